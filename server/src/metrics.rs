use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::{
    BuildError, PrometheusBuilder, PrometheusHandle,
};

const DURATION_BUCKETS: &[f64] = &[
    0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
];

/// Installs the process-wide Prometheus recorder and returns the handle
/// the `/metrics` route renders from. Call once at startup.
pub fn install_recorder() -> Result<PrometheusHandle, BuildError> {
    let handle = PrometheusBuilder::new()
        .set_buckets(DURATION_BUCKETS)?
        .install_recorder()?;

    describe_counter!("http_requests_total", "Count of all HTTP requests");
    describe_histogram!(
        "http_request_duration_seconds",
        "Duration of all HTTP requests"
    );

    Ok(handle)
}

/// Counts and times every request passing through the endpoint router,
/// labelled the way the upstream dashboards expect: code and method on
/// the counter, code, handler and method on the histogram.
pub async fn track_http(request: Request, next: Next) -> Response {
    let started = Instant::now();
    let method = request.method().to_string();
    let handler = request
        .extensions()
        .get::<MatchedPath>()
        .map(|path| path.as_str().trim_start_matches('/').to_string())
        .unwrap_or_else(|| "unknown".to_string());

    let response = next.run(request).await;

    let code = response.status().as_u16().to_string();
    counter!(
        "http_requests_total",
        "code" => code.clone(),
        "method" => method.clone()
    )
    .increment(1);
    histogram!(
        "http_request_duration_seconds",
        "code" => code,
        "handler" => handler,
        "method" => method
    )
    .record(started.elapsed().as_secs_f64());

    response
}
