use axum::{Router, middleware, routing::get};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;

use crate::{handlers, metrics};

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::good,
        handlers::ok,
        handlers::veryslow,
        handlers::acceptable,
        handlers::notfound,
        handlers::err,
        handlers::bad,
        handlers::health,
    ),
    tags(
        (name = "endpoints", description = "Load-profile endpoints"),
        (name = "health", description = "Health check endpoints")
    ),
    info(
        title = "Swell Target API",
        description = "Demo target with fixed latency and failure profiles",
        version = "1.0.0"
    )
)]
struct ApiDoc;

/// Builds the full application router. The seven load-profile endpoints
/// go through the metrics middleware; health, docs and the Prometheus
/// exposition stay out of the counters.
pub fn app(metrics_handle: PrometheusHandle) -> Router {
    let endpoints = Router::new()
        .route("/good", get(handlers::good))
        .route("/ok", get(handlers::ok))
        .route("/veryslow", get(handlers::veryslow))
        .route("/acceptable", get(handlers::acceptable))
        .route("/notfound", get(handlers::notfound))
        .route("/err", get(handlers::err))
        .route("/bad", get(handlers::bad))
        .route_layer(middleware::from_fn(metrics::track_http));

    Router::new()
        .route("/health", get(handlers::health))
        .merge(endpoints)
        .merge(RapiDoc::new("/api-docs/openapi.json").path("/docs"))
        .route(
            "/api-docs/openapi.json",
            get(|| async { axum::Json(ApiDoc::openapi()) }),
        )
        .route(
            "/metrics",
            get(move || async move { metrics_handle.render() }),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
