#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::sync::Arc;

use case_listing_sdk::{ListCasesRequest, ModulePermission, ModulePermissionRecord};
use serde_json::json;
use tracing_test::traced_test;

use crate::config::CaseListingConfig;
use crate::domain::error::DomainError;
use crate::test_support::{ScriptedStore, StaticPermissions, build_service, case, page};

fn full_page() -> Arc<ScriptedStore> {
    Arc::new(ScriptedStore::with_pages([page(
        vec![
            case("1", "kyc"),
            case("2", "aml"),
            case("3", "onboarding"),
            case("4", "kyc"),
            json!({"id": "5"}),
            json!({"id": "6", "module": 7}),
        ],
        true,
        Some("next"),
    )]))
}

fn ids(rows: &[serde_json::Value]) -> Vec<&str> {
    rows.iter().map(|r| r["id"].as_str().unwrap()).collect()
}

#[tokio::test]
async fn only_rows_of_active_modules_are_returned() {
    let record = ModulePermissionRecord {
        modules: vec![
            ModulePermission {
                module_type: "kyc".to_owned(),
                active: true,
            },
            ModulePermission {
                module_type: "aml".to_owned(),
                active: false,
            },
            ModulePermission {
                module_type: "onboarding".to_owned(),
                active: true,
            },
        ],
    };
    let svc = build_service(
        full_page(),
        Arc::new(StaticPermissions::with_record(record)),
        &CaseListingConfig::default(),
    );

    let page = svc
        .list_cases(ListCasesRequest::new("c-1", "p-1"))
        .await
        .unwrap();

    assert_eq!(ids(&page.rows), vec!["1", "3", "4"]);
    // paging metadata is independent of filtering
    assert!(page.has_more);
    assert_eq!(page.next_cursor, "next");
}

#[tokio::test]
async fn empty_permission_set_yields_no_rows() {
    let svc = build_service(
        full_page(),
        Arc::new(StaticPermissions::allowing(&[])),
        &CaseListingConfig::default(),
    );

    let page = svc
        .list_cases(ListCasesRequest::new("c-1", "p-1"))
        .await
        .unwrap();
    assert!(page.rows.is_empty());
    assert!(page.has_more);
    assert_eq!(page.next_cursor, "next");
}

#[tokio::test]
#[traced_test]
async fn missing_record_filters_everything_without_failing() {
    let permissions = Arc::new(StaticPermissions::missing());
    let svc = build_service(
        full_page(),
        permissions.clone(),
        &CaseListingConfig::default(),
    );

    let page = svc
        .list_cases(ListCasesRequest::new("c-1", "p-1"))
        .await
        .unwrap();

    assert!(page.rows.is_empty());
    assert!(!page.options.is_empty());
    assert_eq!(
        permissions.lookups(),
        vec![("c-1".to_owned(), "p-1".to_owned())]
    );
    assert!(logs_contain("no module permission record"));
}

#[tokio::test]
async fn permission_lookup_failure_fails_the_call() {
    let svc = build_service(
        full_page(),
        Arc::new(StaticPermissions::failing("authorization store down")),
        &CaseListingConfig::default(),
    );

    let err = svc
        .list_cases(ListCasesRequest::new("c-1", "p-1"))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::PermissionLookup(ref m) if m.contains("down")));
}

#[tokio::test]
async fn module_field_is_configurable() {
    let store = Arc::new(ScriptedStore::with_pages([page(
        vec![
            json!({"id": "1", "category": "kyc"}),
            json!({"id": "2", "category": "aml"}),
        ],
        false,
        None,
    )]));
    let config = CaseListingConfig {
        module_field: "category".to_owned(),
        ..CaseListingConfig::default()
    };
    let svc = build_service(
        store,
        Arc::new(StaticPermissions::allowing(&["aml"])),
        &config,
    );

    let page = svc
        .list_cases(ListCasesRequest::new("c-1", "p-1"))
        .await
        .unwrap();
    assert_eq!(ids(&page.rows), vec!["2"]);
}
