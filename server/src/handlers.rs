use std::time::Duration;

use axum::{http::StatusCode, response::IntoResponse};
use rand::Rng;

const GREETING: &str = "Hello from the swell target.";

/// Sleeps a uniformly random duration inside the given millisecond
/// bounds. The sample is taken before the await so the thread-local rng
/// never crosses a suspension point.
async fn jitter_delay(min_ms: u64, max_ms: u64) {
    let delay = rand::rng().random_range(min_ms..=max_ms);
    tokio::time::sleep(Duration::from_millis(delay)).await;
}

/// Happy path. Fast and returns successfully.
#[utoipa::path(
    get,
    path = "/good",
    responses(
        (status = 200, description = "Fast successful response", body = String)
    ),
    tag = "endpoints"
)]
pub async fn good() -> impl IntoResponse {
    jitter_delay(100, 500).await;
    (StatusCode::OK, GREETING)
}

/// Small delay but successful.
#[utoipa::path(
    get,
    path = "/ok",
    responses(
        (status = 200, description = "Moderately delayed successful response", body = String)
    ),
    tag = "endpoints"
)]
pub async fn ok() -> impl IntoResponse {
    jitter_delay(500, 800).await;
    (StatusCode::OK, GREETING)
}

/// Significant delay, but successful.
#[utoipa::path(
    get,
    path = "/veryslow",
    responses(
        (status = 200, description = "Slow successful response", body = String)
    ),
    tag = "endpoints"
)]
pub async fn veryslow() -> impl IntoResponse {
    jitter_delay(800, 2000).await;
    (StatusCode::OK, GREETING)
}

/// After a reasonable delay returns a successful response ~90% of the
/// time, otherwise a 500.
#[utoipa::path(
    get,
    path = "/acceptable",
    responses(
        (status = 200, description = "Successful response, most of the time", body = String),
        (status = 500, description = "Roughly one request in ten fails")
    ),
    tag = "endpoints"
)]
pub async fn acceptable() -> impl IntoResponse {
    jitter_delay(200, 1000).await;

    let roll = rand::rng().random_range(0..100);
    if roll > 10 {
        (StatusCode::OK, GREETING).into_response()
    }
    else {
        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
}

/// No delay, and returns 404.
#[utoipa::path(
    get,
    path = "/notfound",
    responses(
        (status = 404, description = "Always missing")
    ),
    tag = "endpoints"
)]
pub async fn notfound() -> impl IntoResponse {
    StatusCode::NOT_FOUND
}

/// Small delay, and returns 500.
#[utoipa::path(
    get,
    path = "/err",
    responses(
        (status = 500, description = "Always fails after a short delay")
    ),
    tag = "endpoints"
)]
pub async fn err() -> impl IntoResponse {
    jitter_delay(200, 400).await;
    StatusCode::INTERNAL_SERVER_ERROR
}

/// Significant delay, and returns 500.
#[utoipa::path(
    get,
    path = "/bad",
    responses(
        (status = 500, description = "Always fails after a long delay")
    ),
    tag = "endpoints"
)]
pub async fn bad() -> impl IntoResponse {
    jitter_delay(500, 2000).await;
    StatusCode::INTERNAL_SERVER_ERROR
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Liveness probe", body = String)
    ),
    tag = "health"
)]
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
