//! Domain service: permission-gated case listing.
//!
//! A `list_cases` call:
//! 1. validates ids and resolves the page limit against [`ServiceConfig`];
//! 2. composes the caller's criteria into query clauses;
//! 3. fetches the project's module permission record and the content page
//!    concurrently;
//! 4. drops rows whose module is not active in the record.
//!
//! Filtering happens after paging, so a page can hold fewer rows than the
//! limit (down to zero) while `has_more` is still set. The cursor always
//! comes from the store unchanged.

use std::collections::HashSet;
use std::sync::Arc;

use case_listing_sdk::{CasePage, DocumentTypeOption, ListCasesRequest};
use docstore_query::{PageRequest, compose};
use serde_json::Value;
use tracing::{debug, instrument, warn};

use super::error::DomainError;
use super::ports::ModulePermissionsPort;
use super::repo::{CaseScope, CasesRepository};

#[cfg(test)]
mod tests_list_cases;

#[cfg(test)]
mod tests_permissions;

/// Configuration for the domain service
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub default_page_limit: u32,
    pub max_page_limit: u32,
    /// Top-level row property checked against the permitted module set.
    pub module_field: String,
    pub document_type_options: Vec<DocumentTypeOption>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            default_page_limit: 50,
            max_page_limit: 1000,
            module_field: "module".to_owned(),
            document_type_options: Vec::new(),
        }
    }
}

pub struct CasesService {
    repo: Arc<dyn CasesRepository>,
    permissions: Arc<dyn ModulePermissionsPort>,
    config: ServiceConfig,
}

impl CasesService {
    pub fn new(
        repo: Arc<dyn CasesRepository>,
        permissions: Arc<dyn ModulePermissionsPort>,
        config: ServiceConfig,
    ) -> Self {
        Self {
            repo,
            permissions,
            config,
        }
    }

    #[instrument(
        skip(self, request),
        fields(customer_id = %request.customer_id, project_id = %request.project_id)
    )]
    pub async fn list_cases(&self, request: ListCasesRequest) -> Result<CasePage, DomainError> {
        let page = self.page_request(&request)?;
        let scope = Self::scope(&request)?;

        let mut criteria = request.criteria;
        if !criteria.projection.is_empty()
            && !criteria.projection.contains(&self.config.module_field)
        {
            // the permission filter below needs the module of every row
            criteria.projection.push(self.config.module_field.clone());
        }
        let clauses = compose(&criteria)?;

        let (permitted, fetched) = tokio::try_join!(
            self.permitted_modules(&scope),
            self.repo.list_page(&scope, clauses, &page),
        )?;

        let fetched_rows = fetched.rows.len();
        let module_field = self.config.module_field.as_str();
        let visible = fetched.retain(|row| {
            row.get(module_field)
                .and_then(Value::as_str)
                .is_some_and(|module| permitted.contains(module))
        });

        debug!(
            fetched = fetched_rows,
            visible = visible.rows.len(),
            has_more = visible.has_more,
            "listed cases"
        );

        Ok(CasePage {
            rows: visible.rows,
            options: self.config.document_type_options.clone(),
            has_more: visible.has_more,
            next_cursor: visible.next_cursor,
        })
    }

    fn page_request(&self, request: &ListCasesRequest) -> Result<PageRequest, DomainError> {
        let limit = match request.page_limit {
            None | Some(0) => self.config.default_page_limit,
            Some(limit) if limit > self.config.max_page_limit => {
                return Err(DomainError::validation(
                    "pageLimit",
                    format!("must not exceed {}", self.config.max_page_limit),
                ));
            }
            Some(limit) => limit,
        };
        Ok(PageRequest::next(request.continuation_cursor.clone(), limit))
    }

    fn scope(request: &ListCasesRequest) -> Result<CaseScope, DomainError> {
        if request.customer_id.trim().is_empty() {
            return Err(DomainError::validation("customerId", "must not be blank"));
        }
        if request.project_id.trim().is_empty() {
            return Err(DomainError::validation("projectId", "must not be blank"));
        }
        Ok(CaseScope {
            customer_id: request.customer_id.clone(),
            project_id: request.project_id.clone(),
        })
    }

    async fn permitted_modules(&self, scope: &CaseScope) -> Result<HashSet<String>, DomainError> {
        let record = self
            .permissions
            .fetch_permission_record(&scope.customer_id, &scope.project_id)
            .await?;

        let Some(record) = record else {
            warn!("no module permission record for project; no rows are visible");
            return Ok(HashSet::new());
        };

        let permitted: HashSet<String> = record
            .active_module_types()
            .into_iter()
            .map(str::to_owned)
            .collect();
        debug!(permitted = permitted.len(), "resolved active modules");
        Ok(permitted)
    }
}
