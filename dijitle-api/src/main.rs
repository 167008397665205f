use dijitle_api::config::DijitleConfig;
use dijitle_api::startup::Application;
use dijitle_api::{SERVICE_ID, SERVICE_VERSION};
use service_core::error::AppError;
use service_core::observability::init_tracing;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Load configuration - fail fast if invalid
    let config = DijitleConfig::load()?;

    init_tracing(SERVICE_ID, &config.log_level, config.otlp_endpoint.as_deref())?;

    tracing::info!(
        service = SERVICE_ID,
        version = SERVICE_VERSION,
        environment = ?config.environment,
        "Starting Dijitle API"
    );

    let application = Application::build(config).await.map_err(|e| {
        tracing::error!("Failed to start application: {}", e);
        e
    })?;

    application.run_until_stopped().await?;

    tracing::info!("Service shutdown complete");
    Ok(())
}
