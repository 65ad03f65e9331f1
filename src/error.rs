//! Error types for listwise
//!
//! This module defines the error hierarchy for the crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.
//!
//! The crate itself performs no recovery: collaborator failures pass through
//! to the consumer unchanged, and the classification predicates exist so the
//! caller's transport layer can make retry decisions in one place.

use thiserror::Error;

/// The main error type for listwise
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Collaborator (page fetcher / submitter) Errors
    // ============================================================================
    #[error("Provider error {status}: {message}")]
    Provider { status: u16, message: String },

    #[error("Page fetch failed: {message}")]
    Fetch { message: String },

    #[error("Batch submit failed for group {group}: {message}")]
    Submit { group: usize, message: String },

    // ============================================================================
    // Usage Errors
    // ============================================================================
    #[error("Invalid batch size: {size} (must be positive)")]
    InvalidBatchSize { size: usize },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create a provider error with an HTTP-like status code
    pub fn provider(status: u16, message: impl Into<String>) -> Self {
        Self::Provider {
            status,
            message: message.into(),
        }
    }

    /// Create a provider "resource not found" error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::Provider {
            status: 404,
            message: message.into(),
        }
    }

    /// Create a fetch error
    pub fn fetch(message: impl Into<String>) -> Self {
        Self::Fetch {
            message: message.into(),
        }
    }

    /// Create a submit error for a batch group
    pub fn submit(group: usize, message: impl Into<String>) -> Self {
        Self::Submit {
            group,
            message: message.into(),
        }
    }

    /// Create a batch size error
    pub fn invalid_batch_size(size: usize) -> Self {
        Self::InvalidBatchSize { size }
    }

    /// Check if this error is a provider "resource not found" signal
    ///
    /// Used by the fallback helpers to normalize missing list collections
    /// into empty terminal pages. 410 (Gone) is treated the same way.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Provider { status: 404 | 410, .. })
    }

    /// Check if this error is retryable
    ///
    /// Informational for callers: the core never retries.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Fetch { .. } => true,
            Error::Provider { status, .. } => is_retryable_status(*status),
            _ => false,
        }
    }
}

/// Check if an HTTP status code is retryable
fn is_retryable_status(status: u16) -> bool {
    matches!(status, 429 | 500 | 502 | 503 | 504)
}

/// Result type alias for listwise
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}
