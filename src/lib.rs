//! # listwise
//!
//! Marker-based pagination and bulk-write batching for cloud list APIs.
//!
//! Most cloud providers expose listings page-at-a-time: each call returns a
//! batch of items plus an opaque continuation marker. listwise turns that
//! into a single logical, lazily-evaluated sequence the caller can iterate
//! without manual page-tracking, and provides the companion operation for
//! bulk writes: fixed-size request batching.
//!
//! Transport, auth, serialization, and retry policy stay with the caller;
//! the crate consumes the provider only through a function-shaped page
//! fetcher.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use listwise::{lazy_continue, ListingOptions, Result};
//!
//! fn list_all(client: &MetricClient) -> Result<Vec<Metric>> {
//!     let options = ListingOptions::new().with_filter("namespace", "compute");
//!     let first = client.list(&options)?;
//!     lazy_continue(first, |marker| client.list(&options.after_marker(marker.clone())))
//!         .with_label(format!("list_metrics({options})"))
//!         .collect()
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                         Caller                            │
//! │  first fetch → lazy_continue(page, fetch_next) → iterate  │
//! │  records → for_each_batch(items, size, submit)            │
//! └───────────────────────────────────────────────────────────┘
//!                              │
//! ┌──────────┬─────────────────┴────────────┬─────────────────┐
//! │   Page   │          Pagination          │      Batch      │
//! ├──────────┼──────────────────────────────┼─────────────────┤
//! │ Marker   │ PagedIterator (sync cursor)  │ for_each_batch  │
//! │ Page<T>  │ PagedStream   (async Stream) │ async variant   │
//! │ Options  │ fallback: 404 → empty page   │ groups of ≤ N   │
//! └──────────┴──────────────────────────────┴─────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Page, marker, and listing option types
pub mod page;

/// Marker continuation: the pagination cursors
pub mod pagination;

/// Fixed-size request batching
pub mod batch;

/// Not-found normalization helpers for fetcher boundaries
pub mod fallback;

// ============================================================================
// Re-exports
// ============================================================================

pub use batch::{for_each_batch, for_each_batch_async, METRIC_DATA_BATCH};
pub use error::{Error, Result};
pub use page::{ListingOptions, Marker, Page};
pub use pagination::{lazy_continue, PagedIterator, PagedStream};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
