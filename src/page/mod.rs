//! Page and marker types
//!
//! A `Page` is one provider response to a single list request: an ordered
//! item batch plus an optional continuation marker. Marker presence is the
//! only signal that more results exist; item count never is, since providers
//! may return empty pages mid-sequence.

mod options;

pub use options::ListingOptions;


use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Marker
// ============================================================================

/// Opaque continuation token returned by a provider
///
/// Absence of a marker means the result set is complete. A marker carried by
/// a [`Page`] is never empty; construction from provider responses goes
/// through [`Marker::from_response`], which normalizes absent and empty
/// tokens to "no marker".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Marker(String);

impl Marker {
    /// Create a marker from a raw token
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Normalize a provider-reported token into an optional marker
    ///
    /// Providers signal "no more results" as either a missing field or an
    /// empty string; both become `None`.
    pub fn from_response(token: Option<impl Into<String>>) -> Option<Self> {
        token
            .map(Into::into)
            .filter(|t: &String| !t.is_empty())
            .map(Self)
    }

    /// The raw token value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Marker {
    fn from(token: &str) -> Self {
        Self(token.to_string())
    }
}

impl From<String> for Marker {
    fn from(token: String) -> Self {
        Self(token)
    }
}

// ============================================================================
// Page
// ============================================================================

/// One provider response to a single list request
///
/// Items keep the provider-returned order. A page without a marker is
/// terminal; a page with one continues the listing, even when it carries no
/// items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    items: Vec<T>,
    marker: Option<Marker>,
}

impl<T> Page<T> {
    /// Create a terminal page (no continuation marker)
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            marker: None,
        }
    }

    /// Create a page that continues at `marker`
    pub fn with_marker(items: Vec<T>, marker: impl Into<Marker>) -> Self {
        Self {
            items,
            marker: Some(marker.into()),
        }
    }

    /// Create a terminal page with no items
    ///
    /// The normalization target for providers that report an empty
    /// collection as "not found".
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            marker: None,
        }
    }

    /// Items in provider-returned order
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Continuation marker, if more results exist
    pub fn marker(&self) -> Option<&Marker> {
        self.marker.as_ref()
    }

    /// Number of items in this page
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if this page carries no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Check if this page ends the listing (no marker)
    pub fn is_terminal(&self) -> bool {
        self.marker.is_none()
    }

    /// Decompose into items and marker
    pub fn into_parts(self) -> (Vec<T>, Option<Marker>) {
        (self.items, self.marker)
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Page<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
