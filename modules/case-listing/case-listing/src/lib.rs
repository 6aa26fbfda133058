//! Case Listing Module
//!
//! Lists cases stored in a document store, one cursor page at a time, and
//! drops rows whose module is not active for the caller's project.
//!
//! Consumers use the [`CaseListingClientV1`](case_listing_sdk::CaseListingClientV1)
//! handed out by [`CaseListing::init`].
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

// === PUBLIC CONTRACT ===
pub use case_listing_sdk::{
    CaseListingClientV1, CaseListingError, CasePage, DocumentTypeOption, ListCasesRequest,
    ModulePermissionRecord,
};

// === MODULE DEFINITION ===
pub mod module;
pub use module::CaseListing;

// === INTERNAL MODULES ===
// Exposed for wiring and tests; the SDK types are the stable API.
#[doc(hidden)]
pub mod config;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;

#[cfg(test)]
mod test_support;
