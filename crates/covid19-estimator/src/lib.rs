pub mod config;
pub mod error;
pub mod estimator;
pub mod observe;
pub mod telemetry;
