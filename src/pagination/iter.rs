//! Synchronous pagination cursor

use crate::error::Result;
use crate::page::{Marker, Page};
use std::fmt;
use std::vec;
use tracing::debug;

/// Continue a paginated listing from its already-fetched first page
///
/// `fetch_next` receives the marker of the page just drained and returns the
/// following page. It must tolerate being called with any marker the
/// provider hands back, repeatedly if the caller reuses it elsewhere.
pub fn lazy_continue<T, F>(first_page: Page<T>, fetch_next: F) -> PagedIterator<T, F>
where
    F: FnMut(&Marker) -> Result<Page<T>>,
{
    PagedIterator::new(first_page, fetch_next)
}

/// Cursor over all items of a paginated listing
///
/// Yields the buffered page's items in provider order, then invokes the
/// continuation function while a marker is present. An empty page with a
/// marker continues the listing; only a missing marker ends it. After the
/// final item, or after a fetch failure has been yielded as `Err`, the
/// cursor is exhausted and every further pull returns `None`.
///
/// A cursor is a single-consumer value: it is pulled through `&mut self`
/// and is not meant for concurrent use.
pub struct PagedIterator<T, F> {
    buffer: vec::IntoIter<T>,
    marker: Option<Marker>,
    fetch_next: F,
    pages_fetched: usize,
    exhausted: bool,
    label: Option<String>,
}

impl<T, F> PagedIterator<T, F>
where
    F: FnMut(&Marker) -> Result<Page<T>>,
{
    /// Create a cursor starting at `first_page`
    pub fn new(first_page: Page<T>, fetch_next: F) -> Self {
        let (items, marker) = first_page.into_parts();
        Self {
            buffer: items.into_iter(),
            marker,
            fetch_next,
            pages_fetched: 0,
            exhausted: false,
            label: None,
        }
    }

    /// Attach a stable label describing the overall listing
    ///
    /// Typically built from the original request options (e.g.
    /// `format!("list_metrics({options})")`). Surfaced via `Display` and in
    /// the per-fetch diagnostics; independent of how many pages have been
    /// fetched.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Number of continuation calls made so far
    pub fn pages_fetched(&self) -> usize {
        self.pages_fetched
    }

    fn label(&self) -> &str {
        self.label.as_deref().unwrap_or("listing")
    }
}

impl<T, F> Iterator for PagedIterator<T, F>
where
    F: FnMut(&Marker) -> Result<Page<T>>,
{
    type Item = Result<T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(item) = self.buffer.next() {
                return Some(Ok(item));
            }
            if self.exhausted {
                return None;
            }
            let marker = match self.marker.take() {
                Some(marker) => marker,
                None => {
                    self.exhausted = true;
                    return None;
                }
            };

            debug!(operation = self.label(), marker = %marker, "fetching next page");
            match (self.fetch_next)(&marker) {
                Ok(page) => {
                    self.pages_fetched += 1;
                    let (items, marker) = page.into_parts();
                    self.buffer = items.into_iter();
                    self.marker = marker;
                }
                Err(err) => {
                    self.exhausted = true;
                    return Some(Err(err));
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let buffered = self.buffer.len();
        if self.exhausted || self.marker.is_none() {
            (buffered, Some(buffered))
        } else {
            (buffered, None)
        }
    }
}

impl<T, F> fmt::Display for PagedIterator<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label.as_deref().unwrap_or("listing"))
    }
}

impl<T, F> fmt::Debug for PagedIterator<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PagedIterator")
            .field("label", &self.label)
            .field("buffered", &self.buffer.len())
            .field("marker", &self.marker)
            .field("pages_fetched", &self.pages_fetched)
            .field("exhausted", &self.exhausted)
            .finish_non_exhaustive()
    }
}
