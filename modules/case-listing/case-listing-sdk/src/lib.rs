//! Case Listing SDK
//!
//! This crate provides the public API for the `case_listing` module:
//!
//! - [`CaseListingClientV1`] - Public API trait for consumers
//! - [`ListCasesRequest`] / [`CasePage`] - Request and page models
//! - [`ModulePermissionRecord`] - Per-project module allow-list
//! - [`CaseListingError`] - Error types
//!
//! Query criteria types are re-exported from `docstore_query` so consumers
//! don't need a direct dependency on it.
//!
//! ## Usage
//!
//! ```ignore
//! use case_listing_sdk::{CaseListingClientV1, ListCasesRequest, SortCriterion};
//!
//! let mut request = ListCasesRequest::new("customer-1", "project-7");
//! request.page_limit = Some(25);
//! request.criteria.sort.push(SortCriterion::descending("createdAt"));
//!
//! let page = client.list_cases(request).await?;
//! if page.has_more {
//!     // pass page.next_cursor back as `continuation_cursor`
//! }
//! ```

pub mod api;
pub mod error;
pub mod models;

pub use api::CaseListingClientV1;
pub use error::CaseListingError;
pub use models::{
    CasePage, DocumentTypeOption, ListCasesRequest, ModulePermission, ModulePermissionRecord,
};

pub use docstore_query::{
    ComparisonOperator, FieldSearchCriterion, FilterCriterion, FilterValue, QueryCriteria,
    SortCriterion, SortDirection,
};
