use std::sync::Arc;

use axum::response::Response;
use serde_json::{json, Value};

use crate::estimator::domain::{EstimateRequest, RegionProfile};
use crate::estimator::{estimator_router, EstimateService, EstimatorConfig, EstimatorEngine};

/// Payload whose arithmetic lands on exact figures: impact seed 100,
/// one doubling, severe cases 30, beds 350, ICU 10, ventilators 4,
/// dollars in flight 1000.
pub(super) fn sample_payload() -> Value {
    json!({
        "region": {
            "name": "Africa",
            "avgDailyIncomePopulation": 0.5,
            "avgDailyIncomeInUSD": 30.0
        },
        "periodType": "days",
        "timeToElapse": 3,
        "reportedCases": 10,
        "population": 5000,
        "totalHospitalBeds": 1000
    })
}

pub(super) fn sample_request() -> EstimateRequest {
    EstimateRequest {
        region: RegionProfile {
            name: "Africa".to_string(),
            avg_daily_income_population: 0.5,
            avg_daily_income_in_usd: 30.0,
        },
        period_type: "days".to_string(),
        time_to_elapse: 3.0,
        reported_cases: 10,
        population: 5000,
        total_hospital_beds: 1000,
    }
}

pub(super) fn engine() -> EstimatorEngine {
    EstimatorEngine::new(EstimatorConfig::default())
}

pub(super) fn service() -> EstimateService {
    EstimateService::new(EstimatorConfig::default())
}

pub(super) fn estimator_router_with_service() -> axum::Router {
    estimator_router(Arc::new(service()))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) async fn read_text_body(response: Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    String::from_utf8(body.to_vec()).expect("utf8 body")
}

pub(super) fn post_estimate(path: &str, payload: &Value) -> axum::http::Request<axum::body::Body> {
    axum::http::Request::post(path)
        .header(axum::http::header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from(payload.to_string()))
        .expect("request builds")
}
