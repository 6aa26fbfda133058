//! Public API trait for case listing.

use async_trait::async_trait;

use crate::error::CaseListingError;
use crate::models::{CasePage, ListCasesRequest};

/// Public API trait for case listing.
///
/// The module registers an in-process implementation; consumers hold it as
/// `Arc<dyn CaseListingClientV1>`.
#[async_trait]
pub trait CaseListingClientV1: Send + Sync {
    /// List one page of cases visible to the caller's project.
    ///
    /// Rows whose module is not active in the project's permission record
    /// are dropped from the page, so a page may hold fewer rows than the
    /// requested limit while `has_more` is still set.
    ///
    /// # Errors
    ///
    /// - `Validation` if ids are blank, the page limit is out of range or a
    ///   criterion names an unusable field path
    /// - `Throttled` / `StoreUnavailable` if the document store failed
    /// - `PermissionLookup` if the permission record could not be read
    /// - `Internal` for unexpected errors
    async fn list_cases(&self, request: ListCasesRequest) -> Result<CasePage, CaseListingError>;
}
