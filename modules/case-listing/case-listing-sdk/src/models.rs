//! Request, page and permission models.

use std::collections::HashSet;

use docstore_query::QueryCriteria;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request for one page of cases.
///
/// On the wire all fields are flat: ids, paging and the criteria lists
/// (`sort`, `filter`, `search`, `fieldSearch`, `projection`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListCasesRequest {
    pub customer_id: String,
    pub project_id: String,
    /// Cursor from the previous page; empty for the first page.
    #[serde(default)]
    pub continuation_cursor: String,
    /// Rows per page; the module default applies when unset or zero.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_limit: Option<u32>,
    #[serde(flatten)]
    pub criteria: QueryCriteria,
}

impl ListCasesRequest {
    #[must_use]
    pub fn new(customer_id: impl Into<String>, project_id: impl Into<String>) -> Self {
        Self {
            customer_id: customer_id.into(),
            project_id: project_id.into(),
            ..Self::default()
        }
    }
}

/// One entry of the document type catalog returned with every page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentTypeOption {
    pub value: String,
    pub label: String,
}

impl DocumentTypeOption {
    #[must_use]
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// A page of cases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CasePage {
    pub rows: Vec<Value>,
    pub options: Vec<DocumentTypeOption>,
    pub has_more: bool,
    /// Opaque; pass back unchanged to fetch the next page.
    pub next_cursor: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModulePermission {
    #[serde(rename = "type")]
    pub module_type: String,
    #[serde(default)]
    pub active: bool,
}

/// Module allow-list stored per (customer, project).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModulePermissionRecord {
    #[serde(default)]
    pub modules: Vec<ModulePermission>,
}

impl ModulePermissionRecord {
    /// Module types the project may view.
    #[must_use]
    pub fn active_module_types(&self) -> HashSet<&str> {
        self.modules
            .iter()
            .filter(|m| m.active)
            .map(|m| m.module_type.as_str())
            .collect()
    }
}
