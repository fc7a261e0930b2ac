use std::sync::Arc;

use ship_issue_logger::config::Config;
use ship_issue_logger::handlers::{self, AppState};
use ship_issue_logger::services::IssueService;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Reads .env first so RUST_LOG from the file applies
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let issue_service = Arc::new(IssueService::new(&config));

    // Make sure the workbook exists before the first request reads it
    let existing = issue_service.load_store()?;
    tracing::info!(
        store = %config.store_path.display(),
        uploads = %config.upload_dir.display(),
        rows = existing.len(),
        "Issue log ready"
    );

    let app = handlers::router(AppState { issue_service }, config.max_upload_bytes);

    let addr = config.server_addr();
    tracing::info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
