use anyhow::{Context, Result};
use franchise_site::config::Config;
use franchise_site::contact::ContactHandler;
use franchise_site::i18n::TranslationValidator;
use franchise_site::mailer::HttpMailer;
use franchise_site::server::{self, AppState};
use std::sync::Arc;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("franchise_site=info".parse()?),
        )
        .init();

    info!("Starting franchise site");

    // Load configuration from environment
    let config = Config::from_env()?;

    let report = TranslationValidator::validate_all();
    for problem in report.errors.iter().chain(report.warnings.iter()) {
        warn!("Translation table: {}", problem);
    }

    let mailer = HttpMailer::from_config(&config).context("Failed to build mail relay client")?;
    let contact = ContactHandler::from_config(Arc::new(mailer), &config);
    let app = server::router(AppState::new(contact));

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context(format!("Failed to bind {}", addr))?;

    info!("Listening on {}", addr);
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
