//! Listing options
//!
//! Filter and page-size parameters for a list request, plus the marker at
//! which the next page starts. Immutable per call: advancing goes through
//! [`ListingOptions::after_marker`], which returns an updated copy and
//! leaves the original untouched, so N page requests are issued from N
//! independent snapshots that never alias.

use super::Marker;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Parameters for one list request
///
/// The `Display` form is a stable, deterministic label for the overall
/// listing (sorted filters, then page size, then marker), suitable for
/// diagnostics that should not change as pages are fetched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingOptions {
    /// Provider filter parameters, kept sorted for deterministic output
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    filters: BTreeMap<String, String>,

    /// Maximum number of items per page, if the provider honors one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    page_size: Option<u32>,

    /// Marker identifying where the requested page starts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    after_marker: Option<Marker>,
}

impl ListingOptions {
    /// Create empty options (list everything, provider-default page size)
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a filter parameter
    #[must_use]
    pub fn with_filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.insert(key.into(), value.into());
        self
    }

    /// Set the maximum number of items per page
    #[must_use]
    pub fn with_page_size(mut self, size: u32) -> Self {
        self.page_size = Some(size);
        self
    }

    /// Copy of these options requesting the page that starts after `marker`
    ///
    /// `self` is not modified.
    #[must_use]
    pub fn after_marker(&self, marker: impl Into<Marker>) -> Self {
        let mut next = self.clone();
        next.after_marker = Some(marker.into());
        next
    }

    /// Filter parameters
    pub fn filters(&self) -> &BTreeMap<String, String> {
        &self.filters
    }

    /// Requested page size, if any
    pub fn page_size(&self) -> Option<u32> {
        self.page_size
    }

    /// Marker these options continue from, if any
    pub fn marker(&self) -> Option<&Marker> {
        self.after_marker.as_ref()
    }
}

impl fmt::Display for ListingOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (key, value) in &self.filters {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{key}={value}")?;
            first = false;
        }
        if let Some(size) = self.page_size {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "page_size={size}")?;
            first = false;
        }
        if let Some(marker) = &self.after_marker {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "marker={marker}")?;
            first = false;
        }
        if first {
            f.write_str("all")?;
        }
        Ok(())
    }
}
