//! Integration tests for the target server: bind an ephemeral port,
//! spawn the real app, and drive it over HTTP.

use std::{net::SocketAddr, sync::OnceLock};

use metrics_exporter_prometheus::PrometheusHandle;
use swell_server::{app, metrics};

static RECORDER: OnceLock<PrometheusHandle> = OnceLock::new();

/// The Prometheus recorder is process-global, so every test shares one
/// installation.
fn recorder() -> PrometheusHandle {
    RECORDER
        .get_or_init(|| metrics::install_recorder().unwrap())
        .clone()
}

async fn spawn_app() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();
    let app = app::app(recorder());

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    addr
}

#[tokio::test]
async fn good_returns_greeting() {
    let addr = spawn_app().await;

    let response = reqwest::get(format!("http://{addr}/good"))
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    assert_eq!(
        response.text().await.unwrap(),
        "Hello from the swell target."
    );
}

#[tokio::test]
async fn notfound_is_always_missing() {
    let addr = spawn_app().await;

    let response = reqwest::get(format!("http://{addr}/notfound"))
        .await
        .unwrap();

    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn err_always_fails() {
    let addr = spawn_app().await;

    let response = reqwest::get(format!("http://{addr}/err"))
        .await
        .unwrap();

    assert_eq!(response.status(), 500);
}

#[tokio::test]
async fn acceptable_settles_on_success_or_server_error() {
    let addr = spawn_app().await;

    for _ in 0..5 {
        let status = reqwest::get(format!("http://{addr}/acceptable"))
            .await
            .unwrap()
            .status()
            .as_u16();
        assert!(status == 200 || status == 500, "unexpected {status}");
    }
}

#[tokio::test]
async fn health_probe_answers_immediately() {
    let addr = spawn_app().await;

    let response = reqwest::get(format!("http://{addr}/health"))
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    assert_eq!(response.text().await.unwrap(), "OK");
}

#[tokio::test]
async fn metrics_expose_request_counters() {
    let addr = spawn_app().await;

    reqwest::get(format!("http://{addr}/good")).await.unwrap();

    let body = reqwest::get(format!("http://{addr}/metrics"))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    assert!(body.contains("http_requests_total"));
    assert!(body.contains("http_request_duration_seconds"));
}

#[tokio::test]
async fn openapi_document_is_served() {
    let addr = spawn_app().await;

    let response =
        reqwest::get(format!("http://{addr}/api-docs/openapi.json"))
            .await
            .unwrap();

    assert_eq!(response.status(), 200);
    let doc: serde_json::Value = response.json().await.unwrap();
    assert!(doc["paths"]["/good"].is_object());
}
