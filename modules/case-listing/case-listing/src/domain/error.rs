use case_listing_sdk::CaseListingError;
use docstore_query::{QueryError, StoreError};

#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Validation error on field '{field}': {message}")]
    Validation { field: String, message: String },

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Document store error: {0}")]
    Store(StoreError),

    #[error("Permission lookup failed: {0}")]
    PermissionLookup(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn permission_lookup(message: impl Into<String>) -> Self {
        Self::PermissionLookup(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

impl From<QueryError> for DomainError {
    fn from(e: QueryError) -> Self {
        match e {
            QueryError::InvalidFieldPath { .. } => Self::InvalidQuery(e.to_string()),
            QueryError::InvalidPageLimit => Self::validation("pageLimit", e.to_string()),
            QueryError::Store(store) => Self::Store(store),
        }
    }
}

impl From<DomainError> for CaseListingError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::Validation { field, message } => {
                Self::validation(format!("{field}: {message}"))
            }
            DomainError::InvalidQuery(message) => Self::validation(message),
            DomainError::Store(StoreError::Throttled { retry_after_ms }) => {
                Self::Throttled { retry_after_ms }
            }
            DomainError::Store(store) => Self::store_unavailable(store.to_string()),
            DomainError::PermissionLookup(message) => Self::permission_lookup(message),
            DomainError::Internal(_) => Self::internal(),
        }
    }
}
