use crate::cli::ServeArgs;
use crate::infra::{load_candidate_pool, AppState, InMemorySessionRepository};
use crate::routes::with_session_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use pm_internship::config::AppConfig;
use pm_internship::error::AppError;
use pm_internship::telemetry;
use pm_internship::workflows::matching::MatchingEngine;
use pm_internship::workflows::sessions::OnboardingSessionService;
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
    if let Some(path) = args.candidate_csv.take() {
        config.candidates.csv_path = Some(path);
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let pool = Arc::new(load_candidate_pool(config.candidates.csv_path.as_deref())?);
    let engine = Arc::new(MatchingEngine::new(config.matching));
    let repository = Arc::new(InMemorySessionRepository::default());
    let session_service = Arc::new(OnboardingSessionService::new(repository, engine, pool));

    let app = with_session_routes(session_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        max_results = config.matching.max_results,
        "internship recommendation service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
