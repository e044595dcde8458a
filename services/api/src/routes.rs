use crate::infra::AppState;
use axum::extract::Request;
use axum::http::{header, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::Extension;
use axum::Json;
use covid19_estimator::estimator::router::estimate_handler;
use covid19_estimator::estimator::{estimator_router, EstimateService};
use covid19_estimator::observe::{render_log, RequestLogEntry};
use serde_json::json;
use std::sync::Arc;
use std::time::Instant;

pub(crate) fn app_router(state: AppState, service: Arc<EstimateService>) -> axum::Router {
    estimator_router(service.clone())
        // Path matching outranks method matching, so the static logs segment
        // must mount the JSON estimate handler for its POST side itself.
        .route(
            "/api/v1/on-covid-19/logs",
            axum::routing::get(request_log_endpoint)
                .post(estimate_handler)
                .with_state(service),
        )
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .fallback(not_found)
        .layer(middleware::from_fn(record_request))
        .layer(Extension(state))
}

/// Records every handled exchange into the state's log sink. The state
/// extension is layered outside this middleware so the extractor can see it.
pub(crate) async fn record_request(
    Extension(state): Extension<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let method = request.method().to_string();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(request).await;

    let elapsed_ms = started.elapsed().as_millis() as u64;
    state.request_log.append(RequestLogEntry::record(
        method,
        path,
        response.status().as_u16(),
        elapsed_ms,
    ));
    response
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(json!({ "ready": ready })))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn request_log_endpoint(
    Extension(state): Extension<AppState>,
) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        render_log(&state.request_log.snapshot()),
    )
}

pub(crate) async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "status": 404, "error": "The resource wasn't found" })),
    )
}
