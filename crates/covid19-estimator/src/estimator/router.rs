use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde_json::json;

use super::formats::{self, ResponseFormat};
use super::service::EstimateService;

/// Router builder exposing the estimator endpoints.
pub fn estimator_router(service: Arc<EstimateService>) -> Router {
    Router::new()
        .route(
            "/api/v1/on-covid-19",
            post(estimate_handler).get(info_handler),
        )
        .route(
            "/api/v1/on-covid-19/:format",
            post(estimate_format_handler).get(info_format_handler),
        )
        .with_state(service)
}

/// Estimate handler that always answers in JSON, for routes with no format
/// segment (or a static segment that pins the default).
pub async fn estimate_handler(
    State(service): State<Arc<EstimateService>>,
    payload: Result<axum::Json<serde_json::Value>, JsonRejection>,
) -> Response {
    render_estimate(&service, ResponseFormat::Json, payload)
}

pub(crate) async fn estimate_format_handler(
    State(service): State<Arc<EstimateService>>,
    Path(format): Path<String>,
    payload: Result<axum::Json<serde_json::Value>, JsonRejection>,
) -> Response {
    render_estimate(&service, ResponseFormat::parse(&format), payload)
}

pub(crate) async fn info_handler() -> Response {
    info_response()
}

pub(crate) async fn info_format_handler(Path(_format): Path<String>) -> Response {
    info_response()
}

fn info_response() -> Response {
    let payload = json!({
        "status": 200,
        "message": "Post covid-19 data and get the estimates",
    });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

fn render_estimate(
    service: &EstimateService,
    format: ResponseFormat,
    payload: Result<axum::Json<serde_json::Value>, JsonRejection>,
) -> Response {
    let axum::Json(payload) = match payload {
        Ok(body) => body,
        Err(rejection) => return bad_request(rejection.body_text()),
    };

    match service.estimate_payload(&payload) {
        Ok(report) => match format {
            ResponseFormat::Json => (StatusCode::OK, axum::Json(report)).into_response(),
            ResponseFormat::Xml => match formats::render_xml(&report) {
                Ok(document) => (
                    StatusCode::OK,
                    [(header::CONTENT_TYPE, ResponseFormat::Xml.content_type())],
                    document,
                )
                    .into_response(),
                Err(_) => {
                    let payload = json!({
                        "status": 500,
                        "error": "internal server error",
                    });
                    (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
                }
            },
        },
        Err(error) => bad_request(error.to_string()),
    }
}

fn bad_request(message: String) -> Response {
    let payload = json!({
        "status": 400,
        "error": message,
    });
    (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
}
