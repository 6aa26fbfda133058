//! Error types for the case listing module.

use thiserror::Error;

/// Errors returned by [`CaseListingClientV1`](crate::CaseListingClientV1).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CaseListingError {
    /// The request was rejected before reaching the store.
    #[error("validation error: {message}")]
    Validation { message: String },

    /// The document store could not serve the query.
    #[error("store unavailable: {message}")]
    StoreUnavailable { message: String },

    /// The document store throttled the request; retry later.
    #[error("store throttled the request")]
    Throttled { retry_after_ms: Option<u64> },

    /// The permission record could not be read.
    #[error("permission lookup failed: {message}")]
    PermissionLookup { message: String },

    #[error("internal error")]
    Internal,
}

impl CaseListingError {
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn store_unavailable(message: impl Into<String>) -> Self {
        Self::StoreUnavailable {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn permission_lookup(message: impl Into<String>) -> Self {
        Self::PermissionLookup {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn internal() -> Self {
        Self::Internal
    }
}
