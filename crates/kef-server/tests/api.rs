//! HTTP-level tests for the dashboard API, running against tempdir-backed
//! stores and an unreachable live search endpoint (so Reddit serves its
//! curated fallback).

use std::path::Path;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use kef_core::{AppConfig, Environment};
use kef_discovery::Collector;
use kef_server::api::{build_app, AppState};
use kef_store::{ClientStore, OpportunityStore, SessionStore};
use tower::ServiceExt;

fn test_config(data_dir: &Path) -> AppConfig {
    AppConfig {
        env: Environment::Test,
        bind_addr: "127.0.0.1:0".parse().expect("valid addr"),
        log_level: "info".to_string(),
        data_dir: data_dir.to_path_buf(),
        // Nothing listens here; the Reddit source falls back to its curated
        // catalog without touching the network.
        reddit_base_url: "http://127.0.0.1:1".to_string(),
        reddit_user_agent: "kef-test/1.0".to_string(),
        search_request_timeout_secs: 1,
    }
}

fn test_app(data_dir: &Path) -> Router {
    let config = test_config(data_dir);
    let collector = Collector::from_config(&config).expect("collector builds");
    build_app(AppState {
        clients: ClientStore::new(&config.data_dir),
        opportunities: OpportunityStore::new(&config.data_dir),
        sessions: SessionStore::new(&config.data_dir),
        collector: Arc::new(collector),
    })
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    serde_json::from_slice(&bytes).expect("body should be JSON")
}

fn create_acme_request() -> Request<Body> {
    Request::post("/api/v1/clients")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            r#"{"name":"Acme","websiteUrl":"https://acme.test","keywords":["seo tools"]}"#,
        ))
        .expect("request")
}

#[tokio::test]
async fn healthz_reports_ok_with_request_id() {
    let dir = tempfile::tempdir().expect("tempdir");
    let app = test_app(dir.path());

    let response = app
        .oneshot(Request::get("/healthz").body(Body::empty()).expect("request"))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-request-id"));
    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn client_create_and_list_round_trip() {
    let dir = tempfile::tempdir().expect("tempdir");
    let app = test_app(dir.path());

    let response = app
        .clone()
        .oneshot(create_acme_request())
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let created = body_json(response).await;
    assert_eq!(created["data"]["name"], "Acme");
    assert!(created["data"]["id"].as_str().is_some());

    let response = app
        .oneshot(
            Request::get("/api/v1/clients")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");
    let listed = body_json(response).await;
    assert_eq!(listed["data"].as_array().expect("array").len(), 1);
    assert_eq!(listed["data"][0]["websiteUrl"], "https://acme.test");
}

#[tokio::test]
async fn login_rejects_bad_credentials_and_persists_good_ones() {
    let dir = tempfile::tempdir().expect("tempdir");
    let app = test_app(dir.path());

    let bad = Request::post("/api/v1/auth/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"email":"FHM","password":"nope"}"#))
        .expect("request");
    let response = app.clone().oneshot(bad).await.expect("response");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let good = Request::post("/api/v1/auth/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"email":"FHM","password":"TechnicalSEO!"}"#))
        .expect("request");
    let response = app.clone().oneshot(good).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(
            Request::get("/api/v1/auth/session")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");
    let session = body_json(response).await;
    assert_eq!(session["data"]["role"], "admin");
}

#[tokio::test]
async fn search_run_stores_results_and_export_serves_csv() {
    let dir = tempfile::tempdir().expect("tempdir");
    let app = test_app(dir.path());

    app.clone()
        .oneshot(create_acme_request())
        .await
        .expect("response");

    let response = app
        .clone()
        .oneshot(
            Request::post("/api/v1/opportunities/search")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let run = body_json(response).await;
    let results = run["data"].as_array().expect("array");
    assert!(!results.is_empty());
    let first_id = results[0]["id"].as_str().expect("id").to_string();

    let response = app
        .clone()
        .oneshot(
            Request::put(format!("/api/v1/opportunities/{first_id}/visited"))
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(
            Request::get("/api/v1/opportunities?visited=true")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");
    let visited = body_json(response).await;
    assert_eq!(visited["data"].as_array().expect("array").len(), 1);
    assert_eq!(visited["data"][0]["id"], first_id.as_str());

    let response = app
        .oneshot(
            Request::get("/api/v1/opportunities/export")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok()),
        Some("text/csv")
    );
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let csv = String::from_utf8(bytes.to_vec()).expect("utf8");
    assert!(csv.starts_with("\"Client Name\""));
    assert!(csv.contains("\"Acme\""));
}

#[tokio::test]
async fn invalid_platform_filter_is_a_bad_request() {
    let dir = tempfile::tempdir().expect("tempdir");
    let app = test_app(dir.path());

    let response = app
        .oneshot(
            Request::get("/api/v1/opportunities?platform=myspace")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
