use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryLoanRequestRepository};
use crate::routes::with_loan_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use loan_advisor::config::AppConfig;
use loan_advisor::error::AppError;
use loan_advisor::telemetry;
use loan_advisor::workflows::loans::LoanRequestService;
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
    };

    let repository = Arc::new(InMemoryLoanRequestRepository::default());
    let loan_service = Arc::new(LoanRequestService::new(
        repository,
        config.decision.clone(),
    ));

    let app = with_loan_routes(loan_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        approval_threshold = config.decision.approval_threshold,
        "loan advisor service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
