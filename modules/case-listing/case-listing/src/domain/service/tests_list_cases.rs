#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::sync::Arc;

use case_listing_sdk::ListCasesRequest;
use docstore_query::{FieldSearchCriterion, FilterCriterion, RawPage, SortCriterion, StoreError};
use serde_json::json;

use crate::config::CaseListingConfig;
use crate::domain::error::DomainError;
use crate::test_support::{ScriptedStore, StaticPermissions, build_service, case, page};

fn request() -> ListCasesRequest {
    ListCasesRequest::new("c-1", "p-1")
}

#[tokio::test]
async fn first_page_reports_store_paging() {
    let store = Arc::new(ScriptedStore::with_pages([page(
        vec![case("1", "kyc"), case("2", "kyc")],
        true,
        Some("cursor-1"),
    )]));
    let svc = build_service(
        store.clone(),
        Arc::new(StaticPermissions::allowing(&["kyc"])),
        &CaseListingConfig::default(),
    );

    let mut req = request();
    req.page_limit = Some(10);
    let page = svc.list_cases(req).await.unwrap();

    assert_eq!(page.rows.len(), 2);
    assert!(page.has_more);
    assert_eq!(page.next_cursor, "cursor-1");
    assert_eq!(page.options, CaseListingConfig::default().document_type_options);

    let calls = store.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].container, "cases");
    assert_eq!(calls[0].options.page_limit, 10);
    assert_eq!(calls[0].options.continuation, None);
    assert_eq!(calls[0].options.partition_key.as_deref(), Some("c-1"));
}

#[tokio::test]
async fn last_page_defaults_to_no_more_rows() {
    let store = Arc::new(ScriptedStore::with_pages([RawPage {
        rows: vec![case("1", "kyc")],
        has_more: None,
        next_cursor: None,
    }]));
    let svc = build_service(
        store,
        Arc::new(StaticPermissions::allowing(&["kyc"])),
        &CaseListingConfig::default(),
    );

    let page = svc.list_cases(request()).await.unwrap();
    assert!(!page.has_more);
    assert_eq!(page.next_cursor, "");
}

#[tokio::test]
async fn cursor_and_default_limit_are_forwarded() {
    let store = Arc::new(ScriptedStore::default());
    let config = CaseListingConfig {
        default_page_limit: 25,
        ..CaseListingConfig::default()
    };
    let svc = build_service(
        store.clone(),
        Arc::new(StaticPermissions::allowing(&["kyc"])),
        &config,
    );

    let mut req = request();
    req.continuation_cursor = "opaque-token==".to_owned();
    req.page_limit = Some(0);
    svc.list_cases(req).await.unwrap();

    let calls = store.calls();
    assert_eq!(calls[0].options.page_limit, 25);
    assert_eq!(calls[0].options.continuation.as_deref(), Some("opaque-token=="));
}

#[tokio::test]
async fn criteria_reach_the_store_as_one_scoped_query() {
    let store = Arc::new(ScriptedStore::default());
    let svc = build_service(
        store.clone(),
        Arc::new(StaticPermissions::allowing(&["kyc"])),
        &CaseListingConfig::default(),
    );

    let mut req = request();
    req.criteria.filter = vec![
        FilterCriterion::eq("status", "open"),
        FilterCriterion::eq("documents.type", "passport"),
    ];
    req.criteria.search = vec!["acme".to_owned()];
    req.criteria.field_search = vec![FieldSearchCriterion::new("customer.name", "smi")];
    req.criteria.sort = vec![SortCriterion::ascending("title")];
    svc.list_cases(req).await.unwrap();

    let query = &store.calls()[0].query;
    assert_eq!(
        query.query,
        "SELECT VALUE backend FROM backend \
         JOIN (SELECT VALUE t1 FROM t1 IN backend.documents WHERE t1.type = @p1) \
         WHERE backend.customerId = @scope_customerId AND backend.projectId = @scope_projectId \
         AND backend.status = @p0 \
         AND CONTAINS(ToString(backend), @p2, true) \
         AND CONTAINS(ToString(backend.customer.name), @p3, true) \
         ORDER BY backend.title ASC"
    );
    assert_eq!(query.parameter("@scope_customerId"), Some(&json!("c-1")));
    assert_eq!(query.parameter("@scope_projectId"), Some(&json!("p-1")));
    assert_eq!(query.parameter("@p1"), Some(&json!("passport")));
}

#[tokio::test]
async fn unsorted_requests_list_newest_first() {
    let store = Arc::new(ScriptedStore::default());
    let svc = build_service(
        store.clone(),
        Arc::new(StaticPermissions::allowing(&["kyc"])),
        &CaseListingConfig::default(),
    );

    svc.list_cases(request()).await.unwrap();
    assert!(
        store.calls()[0]
            .query
            .query
            .ends_with("ORDER BY backend.createdAt DESC")
    );
}

#[tokio::test]
async fn projection_gains_the_module_field() {
    let store = Arc::new(ScriptedStore::default());
    let svc = build_service(
        store.clone(),
        Arc::new(StaticPermissions::allowing(&["kyc"])),
        &CaseListingConfig::default(),
    );

    let mut req = request();
    req.criteria.projection = vec!["id".to_owned(), "title".to_owned()];
    svc.list_cases(req).await.unwrap();

    let mut req = request();
    req.criteria.projection = vec!["module".to_owned(), "id".to_owned()];
    svc.list_cases(req).await.unwrap();

    let calls = store.calls();
    assert!(
        calls[0]
            .query
            .query
            .starts_with("SELECT backend.id, backend.title, backend.module FROM backend")
    );
    assert!(
        calls[1]
            .query
            .query
            .starts_with("SELECT backend.module, backend.id FROM backend")
    );
}

#[tokio::test]
async fn oversized_page_limit_is_rejected() {
    let store = Arc::new(ScriptedStore::default());
    let svc = build_service(
        store.clone(),
        Arc::new(StaticPermissions::allowing(&["kyc"])),
        &CaseListingConfig::default(),
    );

    let mut req = request();
    req.page_limit = Some(1001);
    let err = svc.list_cases(req).await.unwrap_err();
    assert!(matches!(err, DomainError::Validation { ref field, .. } if field == "pageLimit"));
    assert!(store.calls().is_empty());
}

#[tokio::test]
async fn blank_ids_are_rejected() {
    let store = Arc::new(ScriptedStore::default());
    let permissions = Arc::new(StaticPermissions::allowing(&["kyc"]));
    let svc = build_service(store.clone(), permissions.clone(), &CaseListingConfig::default());

    let err = svc
        .list_cases(ListCasesRequest::new(" ", "p-1"))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Validation { ref field, .. } if field == "customerId"));

    let err = svc
        .list_cases(ListCasesRequest::new("c-1", ""))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Validation { ref field, .. } if field == "projectId"));

    assert!(store.calls().is_empty());
    assert!(permissions.lookups().is_empty());
}

#[tokio::test]
async fn bad_field_path_is_an_invalid_query() {
    let store = Arc::new(ScriptedStore::default());
    let svc = build_service(
        store.clone(),
        Arc::new(StaticPermissions::allowing(&["kyc"])),
        &CaseListingConfig::default(),
    );

    let mut req = request();
    req.criteria.filter = vec![FilterCriterion::eq("documents", "x")];
    let err = svc.list_cases(req).await.unwrap_err();
    assert!(matches!(err, DomainError::InvalidQuery(_)));
    assert!(store.calls().is_empty());
}

#[tokio::test]
async fn store_errors_surface_unmodified() {
    let store = Arc::new(ScriptedStore::failing(StoreError::Throttled {
        retry_after_ms: Some(300),
    }));
    let svc = build_service(
        store,
        Arc::new(StaticPermissions::allowing(&["kyc"])),
        &CaseListingConfig::default(),
    );

    let err = svc.list_cases(request()).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Store(StoreError::Throttled {
            retry_after_ms: Some(300)
        })
    ));
}
