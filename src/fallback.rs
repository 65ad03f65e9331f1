//! Not-found normalization at the fetcher boundary
//!
//! Providers disagree on what an empty collection looks like: some return an
//! empty page, others report the collection itself as missing. These helpers
//! reconcile that at the page-fetcher boundary so the pagination cursor
//! stays provider-agnostic and observes a terminal page with zero items.
//!
//! The same provider signal means something different on a get-by-id
//! endpoint: "this resource does not exist", a non-pagination outcome. The
//! two cases go through separate functions and must not be conflated.

use crate::error::Result;
use crate::page::Page;

/// Treat a provider "not found" on a list endpoint as an empty terminal page
///
/// Wrap a fetcher's result before handing it to the cursor:
///
/// ```rust,ignore
/// let first = fallback::empty_page_on_not_found(client.list(&options))?;
/// let all = lazy_continue(first, |m| {
///     fallback::empty_page_on_not_found(client.list(&options.after_marker(m.clone())))
/// });
/// ```
pub fn empty_page_on_not_found<T>(result: Result<Page<T>>) -> Result<Page<T>> {
    match result {
        Err(err) if err.is_not_found() => Ok(Page::empty()),
        other => other,
    }
}

/// Treat a provider "not found" on a get-by-id endpoint as a missing resource
///
/// Unlike [`empty_page_on_not_found`], this reports absence to the caller as
/// `Ok(None)` rather than pretending an empty collection exists.
pub fn none_on_not_found<T>(result: Result<T>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(err) if err.is_not_found() => Ok(None),
        Err(err) => Err(err),
    }
}
