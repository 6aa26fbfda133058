//! Error types for query composition and paged execution.

use thiserror::Error;

/// Failures reported by a [`DocumentStore`](crate::DocumentStore) client.
///
/// The store client owns connection handling and retries; by the time one of
/// these reaches this crate it is final and is surfaced to the caller as-is.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The store rejected the request because of request-rate limits.
    #[error("store throttled the request")]
    Throttled {
        /// Back-off hint from the store, if it sent one.
        retry_after_ms: Option<u64>,
    },

    /// The store could not parse or execute the query.
    #[error("store rejected the query: {0}")]
    BadRequest(String),

    /// The store could not be reached.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// Any other client-side or server-side failure.
    #[error("store error: {0}")]
    Other(String),
}

/// Errors produced while composing or executing a query.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QueryError {
    /// A criterion referenced a field path that cannot be rendered.
    #[error("invalid field path '{path}': {reason}")]
    InvalidFieldPath { path: String, reason: String },

    /// Page size must be a positive integer.
    #[error("page limit must be positive")]
    InvalidPageLimit,

    /// The store client failed; the original error is preserved.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl QueryError {
    #[must_use]
    pub fn invalid_field_path(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidFieldPath {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
