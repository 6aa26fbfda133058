use std::sync::Arc;

use async_trait::async_trait;
use case_listing_sdk::ModulePermissionRecord;
use docstore_query::{BaseQuery, DocumentStore, PageRequest, QueryCriteria, compose, fetch_page};
use tracing::debug;

use crate::config::CaseListingConfig;
use crate::domain::error::DomainError;
use crate::domain::ports::ModulePermissionsPort;

/// Reads module permission records kept in a document store container,
/// one document per (customer, project).
pub struct DocStoreModulePermissions {
    store: Arc<dyn DocumentStore>,
    container: String,
    customer_field: String,
    project_field: String,
}

impl DocStoreModulePermissions {
    #[must_use]
    pub fn new(store: Arc<dyn DocumentStore>, config: &CaseListingConfig) -> Self {
        Self {
            store,
            container: config.permissions_container.clone(),
            customer_field: config.customer_field.clone(),
            project_field: config.project_field.clone(),
        }
    }
}

#[async_trait]
impl ModulePermissionsPort for DocStoreModulePermissions {
    async fn fetch_permission_record(
        &self,
        customer_id: &str,
        project_id: &str,
    ) -> Result<Option<ModulePermissionRecord>, DomainError> {
        let query = BaseQuery::new()
            .scope(&self.customer_field, customer_id)
            .scope(&self.project_field, project_id)
            .assemble(compose(&QueryCriteria::default())?)?;

        let mut request = PageRequest::first(1);
        loop {
            let page = fetch_page(
                self.store.as_ref(),
                &self.container,
                &query,
                &request,
                Some(customer_id),
            )
            .await?;

            if let Some(row) = page.rows.into_iter().next() {
                return serde_json::from_value(row).map(Some).map_err(|e| {
                    DomainError::permission_lookup(format!("malformed permission record: {e}"))
                });
            }
            // partitioned stores may hand back an empty page with a continuation
            if !page.has_more || page.next_cursor.is_empty() {
                return Ok(None);
            }
            debug!(container = %self.container, "empty permissions page, following cursor");
            request = PageRequest::next(page.next_cursor, 1);
        }
    }
}
