use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryRequestLog};
use crate::routes::app_router;
use axum_prometheus::PrometheusMetricLayer;
use covid19_estimator::config::AppConfig;
use covid19_estimator::error::AppError;
use covid19_estimator::estimator::{EstimateService, EstimatorConfig};
use covid19_estimator::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        request_log: Arc::new(InMemoryRequestLog::default()),
    };

    let estimator = Arc::new(EstimateService::new(EstimatorConfig::default()));
    let app = app_router(app_state, estimator).layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(environment = config.environment.label(), %addr, "covid-19 estimator ready");

    axum::serve(listener, app).await?;
    Ok(())
}
