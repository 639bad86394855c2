//! End-to-end tests against a catalog file on disk.

use axum::http::StatusCode;
use axum_test::TestServer;
use skuview::catalog::{Catalog, UserProfile};
use skuview::source::{CatalogProducts, SessionUser};
use skuview::{AppState, create_app};
use std::io::Write;
use std::sync::Arc;
use tempfile::NamedTempFile;

fn catalog_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    writeln!(
        file,
        r#"{{"name":"TEST Name","productLine":"TEST Line","quantity":3,"sku":"TESTSKU","serviceLevel":"TEST serviceLevel","serviceType":"TEST serviceType","unitOfMeasure":{{"name":"test","quantity":"2"}}}}"#
    )
    .unwrap();
    writeln!(
        file,
        r#"{{"name":"Bare","productLine":"Misc","quantity":1,"sku":"BARE","serviceLevel":"Self-Support","serviceType":"","unitOfMeasure":null}}"#
    )
    .unwrap();
    file
}

fn catalog_server(file: &NamedTempFile, can_read_products: bool) -> TestServer {
    let user = SessionUser::new(UserProfile {
        is_org_admin: false,
        is_sca_capable: false,
        can_read_products,
    });
    let products = CatalogProducts::new(Catalog::new(file.path()));
    let state = AppState::new(Arc::new(user), Arc::new(products));
    TestServer::new(create_app(Arc::new(state))).unwrap()
}

#[tokio::test]
async fn test_catalog_product_detail() {
    let file = catalog_file();
    let server = catalog_server(&file, true);

    let response = server.get("/products/TESTSKU").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response.text().contains("TEST Name"));
}

#[tokio::test]
async fn test_catalog_product_without_unit() {
    let file = catalog_file();
    let server = catalog_server(&file, true);

    let response = server.get("/products/BARE").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let html = response.text();
    assert!(html.contains(r#"data-view="detail""#));
    assert!(html.contains("Self-Support"));
}

#[tokio::test]
async fn test_catalog_missing_sku_not_available() {
    let file = catalog_file();
    let server = catalog_server(&file, true);

    let response = server.get("/products/MISSING").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response.text().contains(r#"data-view="not_available""#));
}

#[tokio::test]
async fn test_catalog_edits_picked_up_without_restart() {
    let mut file = catalog_file();
    let server = catalog_server(&file, true);

    let before = server.get("/products/LATE").await;
    assert!(before.text().contains(r#"data-view="not_available""#));

    writeln!(
        file,
        r#"{{"name":"Late Arrival","productLine":"Misc","quantity":5,"sku":"LATE","serviceLevel":"Standard","serviceType":"L1","unitOfMeasure":null}}"#
    )
    .unwrap();
    file.flush().unwrap();

    let after = server.get("/products/LATE").await;
    assert!(after.text().contains("Late Arrival"));
}

#[tokio::test]
async fn test_unreadable_catalog_is_not_available() {
    let dir = tempfile::tempdir().unwrap();
    let user = SessionUser::new(UserProfile {
        can_read_products: true,
        ..UserProfile::default()
    });
    let products = CatalogProducts::new(Catalog::new(dir.path().join("missing.jsonl")));
    let state = AppState::new(Arc::new(user), Arc::new(products));
    let server = TestServer::new(create_app(Arc::new(state))).unwrap();

    let response = server.get("/products/TESTSKU").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response.text().contains(r#"data-view="not_available""#));
}

#[tokio::test]
async fn test_catalog_denied_user_redirected() {
    let file = catalog_file();
    let server = catalog_server(&file, false);

    let response = server.get("/products/TESTSKU").await;

    assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
    assert!(!response.text().contains("TEST Name"));
}
