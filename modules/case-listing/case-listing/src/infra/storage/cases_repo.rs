use std::sync::Arc;

use async_trait::async_trait;
use docstore_query::{
    BaseQuery, ComposedClauses, DocumentStore, Page, PageRequest, SortCriterion, fetch_page,
};
use serde_json::Value;
use tracing::debug;

use crate::config::CaseListingConfig;
use crate::domain::error::DomainError;
use crate::domain::repo::{CaseScope, CasesRepository};

/// [`CasesRepository`] over a document store container.
///
/// Every query is scoped to the customer and project and partitioned by
/// customer id; without an explicit sort, newest cases come first.
pub struct DocStoreCasesRepository {
    store: Arc<dyn DocumentStore>,
    container: String,
    customer_field: String,
    project_field: String,
    created_at_field: String,
}

impl DocStoreCasesRepository {
    #[must_use]
    pub fn new(store: Arc<dyn DocumentStore>, config: &CaseListingConfig) -> Self {
        Self {
            store,
            container: config.container.clone(),
            customer_field: config.customer_field.clone(),
            project_field: config.project_field.clone(),
            created_at_field: config.created_at_field.clone(),
        }
    }
}

#[async_trait]
impl CasesRepository for DocStoreCasesRepository {
    async fn list_page(
        &self,
        scope: &CaseScope,
        clauses: ComposedClauses,
        page: &PageRequest,
    ) -> Result<Page<Value>, DomainError> {
        let query = BaseQuery::new()
            .scope(&self.customer_field, scope.customer_id.as_str())
            .scope(&self.project_field, scope.project_id.as_str())
            .default_order(SortCriterion::descending(&self.created_at_field))
            .assemble(clauses)?;

        debug!(container = %self.container, query = %query.query, "querying cases");

        let page = fetch_page(
            self.store.as_ref(),
            &self.container,
            &query,
            page,
            Some(scope.customer_id.as_str()),
        )
        .await?;
        Ok(page)
    }
}
