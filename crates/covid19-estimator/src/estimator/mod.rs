//! COVID-19 impact estimation: payload validation, the projection engine,
//! and the HTTP surface serving both.

pub mod domain;
pub(crate) mod engine;
pub mod formats;
pub mod router;
pub mod service;
pub mod validation;

#[cfg(test)]
mod tests;

pub use domain::{
    EstimateReport, EstimateRequest, ImpactProjection, PeriodType, RegionProfile, Scenario,
};
pub use engine::{EstimateError, EstimatorConfig, EstimatorEngine};
pub use formats::{render_xml, ResponseFormat};
pub use router::estimator_router;
pub use service::{EstimateService, EstimateServiceError};
pub use validation::{PayloadValidator, ValidationError, REQUIRED_KEYS};
