//! General integration tests.
//!
//! Tests for health check, static assets and the access-denied page

use crate::common::{RecordingProducts, RecordingUser, authenticated_user, test_server};
use axum::http::StatusCode;
use skuview::catalog::Product;
use skuview::query::QueryStatus;

fn server() -> axum_test::TestServer {
    test_server(
        RecordingUser::new(authenticated_user(false, true, true)),
        RecordingProducts::new(QueryStatus::success(Product::empty())),
    )
}

#[tokio::test]
async fn test_health_check() {
    let response = server().get("/health").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.text(), "OK");
}

#[tokio::test]
async fn test_serves_css() {
    let response = server().get("/style.css").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.header("content-type"), "text/css");
}

#[tokio::test]
async fn test_access_denied_page() {
    let response = server().get("/access-denied").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let html = response.text();
    assert!(html.contains("<!DOCTYPE html>"));
    assert!(html.contains(r#"data-view="denied""#));
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let response = server().get("/products").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}
