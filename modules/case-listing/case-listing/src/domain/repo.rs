use async_trait::async_trait;
use docstore_query::{ComposedClauses, Page, PageRequest};
use serde_json::Value;

use super::error::DomainError;

/// Customer and project every case query is restricted to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseScope {
    pub customer_id: String,
    pub project_id: String,
}

#[async_trait]
pub trait CasesRepository: Send + Sync {
    /// Run the composed clauses within `scope` and return one page of raw
    /// case documents, in store order.
    async fn list_page(
        &self,
        scope: &CaseScope,
        clauses: ComposedClauses,
        page: &PageRequest,
    ) -> Result<Page<Value>, DomainError>;
}
