//! Output ports owned by the domain.

use async_trait::async_trait;
use case_listing_sdk::ModulePermissionRecord;

use super::error::DomainError;

/// Read access to per-project module permission records.
#[async_trait]
pub trait ModulePermissionsPort: Send + Sync {
    /// Fetch the record for (`customer_id`, `project_id`).
    ///
    /// `Ok(None)` means no record exists; callers treat that as "no module
    /// is permitted", not as a failure.
    async fn fetch_permission_record(
        &self,
        customer_id: &str,
        project_id: &str,
    ) -> Result<Option<ModulePermissionRecord>, DomainError>;
}
