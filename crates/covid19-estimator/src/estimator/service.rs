use serde_json::Value;

use super::domain::{EstimateReport, EstimateRequest};
use super::engine::{EstimateError, EstimatorConfig, EstimatorEngine};
use super::validation::{PayloadValidator, ValidationError};

/// Service composing the payload guard and the projection engine.
#[derive(Debug, Clone, Default)]
pub struct EstimateService {
    engine: EstimatorEngine,
}

impl EstimateService {
    pub fn new(config: EstimatorConfig) -> Self {
        Self {
            engine: EstimatorEngine::new(config),
        }
    }

    /// Full pipeline for a raw JSON payload: form checks in contract order,
    /// typed decode, then projection.
    pub fn estimate_payload(
        &self,
        payload: &Value,
    ) -> Result<EstimateReport, EstimateServiceError> {
        PayloadValidator::validate(payload)?;
        let request: EstimateRequest = serde_json::from_value(payload.clone())?;
        Ok(self.estimate_request(&request)?)
    }

    /// Projection for an already-typed request.
    pub fn estimate_request(
        &self,
        request: &EstimateRequest,
    ) -> Result<EstimateReport, EstimateError> {
        self.engine.estimate(request)
    }
}

/// Error raised by the estimate service.
#[derive(Debug, thiserror::Error)]
pub enum EstimateServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("invalid payload: {0}")]
    Payload(#[from] serde_json::Error),
    #[error(transparent)]
    Estimate(#[from] EstimateError),
}
