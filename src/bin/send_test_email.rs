//! Send test notifications through the configured mail relay.
//!
//! Sends one sample inquiry per supported locale to `CONTACT_RECIPIENT` so
//! both notification templates can be checked in a real inbox.
//!
//! Usage:
//!   cargo run --bin send-test-email
//!
//! Required environment variables:
//! - MAIL_API_URL
//! - MAIL_API_KEY
//!
//! Optional:
//! - MAIL_FROM, CONTACT_RECIPIENT, MAIL_TIMEOUT_SECS

use anyhow::{Context, Result};
use chrono::Utc;
use franchise_site::config::Config;
use franchise_site::contact::{compose_notification, ContactSubmission};
use franchise_site::i18n::LocaleRegistry;
use franchise_site::mailer::{HttpMailer, Mailer};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("send_test_email=info".parse()?)
                .add_directive("franchise_site=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;
    info!("Mail relay: {}", config.mail_api_url);
    info!("From: {}", config.mail_from);
    info!("To: {}", config.contact_recipient);

    let mailer = HttpMailer::from_config(&config).context("Failed to build mail relay client")?;

    let mut failures = 0;
    for locale in LocaleRegistry::get().list_all() {
        let submission = ContactSubmission::parse(
            serde_json::json!({
                "name": "Test User 测试用户",
                "email": "test@example.com",
                "phone": "(415) 123-4567",
                "message": "This is a test message to verify the mail relay configuration.\n\
                            这是一条测试消息，用于验证邮件配置是否正常工作。",
                "language": locale.code,
            })
            .to_string()
            .as_bytes(),
        )?;

        let mut message = compose_notification(
            &submission,
            Utc::now(),
            &config.mail_from,
            &config.contact_recipient,
        );
        message.subject = format!("🧪 [TEST] {}", message.subject);

        let code = submission.language.code();
        match mailer.send(&message).await {
            Ok(receipt) => info!("✓ [{}] sent, message id {}", code, receipt.message_id),
            Err(e) => {
                failures += 1;
                error!("❌ [{}] failed: {}", code, e);
            }
        }
    }

    if failures > 0 {
        error!("Troubleshooting tips:");
        error!("  1. Check MAIL_API_URL points at the relay's send endpoint");
        error!("  2. Check MAIL_API_KEY is valid for that relay");
        error!("  3. Check the relay accepts MAIL_FROM as a sender");
        anyhow::bail!("{} test email(s) failed", failures);
    }

    info!("✓ Check your inbox at {}", config.contact_recipient);
    Ok(())
}
