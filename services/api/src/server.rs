use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryDocumentRepository};
use crate::routes::with_onboarding_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use onboarding_engine::config::AppConfig;
use onboarding_engine::error::AppError;
use onboarding_engine::telemetry;
use onboarding_engine::workflows::onboarding::{
    JsonCandidateExtractor, OnboardingService, TemplateContractDrafter,
};
use std::sync::atomic::{AtomicBool, Ordering};
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

    let rules = config.compliance.load_rules()?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let onboarding_service = Arc::new(OnboardingService::new(
        Arc::new(JsonCandidateExtractor),
        Arc::new(TemplateContractDrafter),
        Arc::new(InMemoryDocumentRepository::default()),
        rules,
    ));
    let loaded_rules = onboarding_service.engine().rules();
    info!(
        source = ?config.compliance.rules_path,
        aliases = loaded_rules.aliases.len(),
        wage_rules = loaded_rules.minimum_wages.len(),
        "compliance rules loaded"
    );

    let app = with_onboarding_routes(onboarding_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "onboarding compliance engine ready");

    axum::serve(listener, app).await?;
    Ok(())
}
