//! Marker continuation
//!
//! Turns a provider's page-at-a-time list API into one logical sequence of
//! items spanning every page. The caller performs the first request itself
//! and hands the resulting [`Page`](crate::page::Page) to the cursor along
//! with a continuation function; subsequent pages are fetched on demand as
//! the consumer advances past the buffered items.
//!
//! # Overview
//!
//! Two forms of the same state machine:
//!
//! - [`PagedIterator`] (via [`lazy_continue`]) for synchronous page
//!   fetchers, as a plain `Iterator`.
//! - [`PagedStream`] for async page fetchers, as a `futures::Stream`.
//!
//! Both fetch exactly one page at a time, never prefetch, and propagate a
//! fetch failure to the consumer at the point the next page was needed;
//! items already yielded stay valid. Retry policy belongs to the fetcher.

mod iter;
mod stream;

pub use iter::{lazy_continue, PagedIterator};
pub use stream::PagedStream;
