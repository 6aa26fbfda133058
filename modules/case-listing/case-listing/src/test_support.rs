#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use case_listing_sdk::{ModulePermission, ModulePermissionRecord};
use docstore_query::{DocumentStore, QueryOptions, RawPage, SqlQuerySpec, StoreError};
use serde_json::{Value, json};

use crate::config::CaseListingConfig;
use crate::domain::error::DomainError;
use crate::domain::ports::ModulePermissionsPort;
use crate::domain::service::CasesService;
use crate::infra::storage::DocStoreCasesRepository;

/// One `execute_query` call seen by [`ScriptedStore`].
#[derive(Debug, Clone)]
pub struct StoreCall {
    pub container: String,
    pub query: SqlQuerySpec,
    pub options: QueryOptions,
}

/// Document store returning queued responses in order, then empty pages.
#[derive(Default)]
pub struct ScriptedStore {
    responses: Mutex<VecDeque<Result<RawPage, StoreError>>>,
    calls: Mutex<Vec<StoreCall>>,
}

impl ScriptedStore {
    pub fn with_pages(pages: impl IntoIterator<Item = RawPage>) -> Self {
        Self {
            responses: Mutex::new(pages.into_iter().map(Ok).collect()),
            calls: Mutex::default(),
        }
    }

    pub fn failing(err: StoreError) -> Self {
        Self {
            responses: Mutex::new(VecDeque::from([Err(err)])),
            calls: Mutex::default(),
        }
    }

    pub fn calls(&self) -> Vec<StoreCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl DocumentStore for ScriptedStore {
    async fn execute_query(
        &self,
        container: &str,
        query: &SqlQuerySpec,
        options: &QueryOptions,
    ) -> Result<RawPage, StoreError> {
        self.calls.lock().unwrap().push(StoreCall {
            container: container.to_owned(),
            query: query.clone(),
            options: options.clone(),
        });
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(RawPage::default()))
    }
}

/// Permission port answering every lookup the same way.
pub struct StaticPermissions {
    answer: Result<Option<ModulePermissionRecord>, String>,
    lookups: Mutex<Vec<(String, String)>>,
}

impl StaticPermissions {
    pub fn allowing(modules: &[&str]) -> Self {
        let record = ModulePermissionRecord {
            modules: modules
                .iter()
                .map(|m| ModulePermission {
                    module_type: (*m).to_owned(),
                    active: true,
                })
                .collect(),
        };
        Self::with_record(record)
    }

    pub fn with_record(record: ModulePermissionRecord) -> Self {
        Self {
            answer: Ok(Some(record)),
            lookups: Mutex::default(),
        }
    }

    pub fn missing() -> Self {
        Self {
            answer: Ok(None),
            lookups: Mutex::default(),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            answer: Err(message.to_owned()),
            lookups: Mutex::default(),
        }
    }

    pub fn lookups(&self) -> Vec<(String, String)> {
        self.lookups.lock().unwrap().clone()
    }
}

#[async_trait]
impl ModulePermissionsPort for StaticPermissions {
    async fn fetch_permission_record(
        &self,
        customer_id: &str,
        project_id: &str,
    ) -> Result<Option<ModulePermissionRecord>, DomainError> {
        self.lookups
            .lock()
            .unwrap()
            .push((customer_id.to_owned(), project_id.to_owned()));
        self.answer.clone().map_err(DomainError::permission_lookup)
    }
}

/// A case document as stored.
pub fn case(id: &str, module: &str) -> Value {
    json!({
        "id": id,
        "module": module,
        "customerId": "c-1",
        "projectId": "p-1",
        "createdAt": "2024-05-01T10:00:00Z"
    })
}

pub fn page(rows: Vec<Value>, has_more: bool, next_cursor: Option<&str>) -> RawPage {
    RawPage {
        rows,
        has_more: Some(has_more),
        next_cursor: next_cursor.map(str::to_owned),
    }
}

pub fn build_service(
    store: Arc<ScriptedStore>,
    permissions: Arc<StaticPermissions>,
    config: &CaseListingConfig,
) -> CasesService {
    let repo = Arc::new(DocStoreCasesRepository::new(store, config));
    CasesService::new(repo, permissions, config.service_config())
}
