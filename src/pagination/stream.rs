//! Async pagination cursor

use crate::error::Result;
use crate::page::{Marker, Page};
use futures::ready;
use futures::stream::Stream;
use pin_project_lite::pin_project;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::vec;
use tracing::debug;

pin_project! {
    /// Async form of the pagination cursor
    ///
    /// Implements `Stream<Item = Result<T>>` over all items of a paginated
    /// listing. When the buffered page drains and a marker is present, the
    /// continuation function is invoked and its future driven to completion
    /// before the next item is yielded. Exactly one fetch is in flight at a
    /// time; nothing is prefetched.
    ///
    /// Same termination and error semantics as
    /// [`PagedIterator`](super::PagedIterator): an empty page with a marker
    /// continues, a fetch failure is yielded once as `Err`, and the stream
    /// stays exhausted afterwards.
    pub struct PagedStream<T, F, Fut> {
        buffer: vec::IntoIter<T>,
        marker: Option<Marker>,
        fetch_next: F,
        #[pin]
        in_flight: Option<Fut>,
        pages_fetched: usize,
        exhausted: bool,
        label: Option<String>,
    }
}

impl<T, F, Fut> PagedStream<T, F, Fut>
where
    F: FnMut(Marker) -> Fut,
    Fut: Future<Output = Result<Page<T>>>,
{
    /// Continue a paginated listing from its already-fetched first page
    pub fn new(first_page: Page<T>, fetch_next: F) -> Self {
        let (items, marker) = first_page.into_parts();
        Self {
            buffer: items.into_iter(),
            marker,
            fetch_next,
            in_flight: None,
            pages_fetched: 0,
            exhausted: false,
            label: None,
        }
    }

    /// Attach a stable label describing the overall listing
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Number of continuation calls started so far
    pub fn pages_fetched(&self) -> usize {
        self.pages_fetched
    }
}

impl<T, F, Fut> Stream for PagedStream<T, F, Fut>
where
    F: FnMut(Marker) -> Fut,
    Fut: Future<Output = Result<Page<T>>>,
{
    type Item = Result<T>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();
        loop {
            if let Some(item) = this.buffer.next() {
                return Poll::Ready(Some(Ok(item)));
            }
            if *this.exhausted {
                return Poll::Ready(None);
            }

            if let Some(fut) = this.in_flight.as_mut().as_pin_mut() {
                match ready!(fut.poll(cx)) {
                    Ok(page) => {
                        this.in_flight.set(None);
                        let (items, marker) = page.into_parts();
                        *this.buffer = items.into_iter();
                        *this.marker = marker;
                    }
                    Err(err) => {
                        this.in_flight.set(None);
                        *this.exhausted = true;
                        return Poll::Ready(Some(Err(err)));
                    }
                }
                continue;
            }

            match this.marker.take() {
                Some(marker) => {
                    debug!(
                        operation = this.label.as_deref().unwrap_or("listing"),
                        marker = %marker,
                        "fetching next page"
                    );
                    *this.pages_fetched += 1;
                    let fut = (this.fetch_next)(marker);
                    this.in_flight.set(Some(fut));
                }
                None => {
                    *this.exhausted = true;
                    return Poll::Ready(None);
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let buffered = self.buffer.len();
        if self.exhausted || (self.marker.is_none() && self.in_flight.is_none()) {
            (buffered, Some(buffered))
        } else {
            (buffered, None)
        }
    }
}

impl<T, F, Fut> fmt::Debug for PagedStream<T, F, Fut> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PagedStream")
            .field("label", &self.label)
            .field("buffered", &self.buffer.len())
            .field("marker", &self.marker)
            .field("in_flight", &self.in_flight.is_some())
            .field("pages_fetched", &self.pages_fetched)
            .field("exhausted", &self.exhausted)
            .finish_non_exhaustive()
    }
}
