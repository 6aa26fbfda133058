//! Local (in-process) client for case listing.

use std::sync::Arc;

use async_trait::async_trait;
use case_listing_sdk::{CaseListingClientV1, CaseListingError, CasePage, ListCasesRequest};

use super::{CasesService, DomainError};

/// Local client wrapping the service.
///
/// Handed out by the module after `init()`.
pub struct CaseListingLocalClient {
    svc: Arc<CasesService>,
}

impl CaseListingLocalClient {
    #[must_use]
    pub fn new(svc: Arc<CasesService>) -> Self {
        Self { svc }
    }
}

fn log_and_convert(op: &str, e: DomainError) -> CaseListingError {
    tracing::error!(operation = op, error = ?e, "case_listing call failed");
    e.into()
}

#[async_trait]
impl CaseListingClientV1 for CaseListingLocalClient {
    async fn list_cases(&self, request: ListCasesRequest) -> Result<CasePage, CaseListingError> {
        self.svc
            .list_cases(request)
            .await
            .map_err(|e| log_and_convert("list_cases", e))
    }
}
