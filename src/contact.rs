//! Contact form submissions.
//!
//! A submission is parsed and validated, turned into a staff notification and
//! handed to the [`Mailer`] exactly once. Nothing is stored: a successful
//! inquiry exists only as the sent email.

use crate::config::Config;
use crate::i18n::strings::fill;
use crate::i18n::Locale;
use crate::mailer::{MailError, MailMessage, Mailer};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info, warn};

/// Raw form payload. Every field is optional at this stage.
#[derive(Debug, Default, Deserialize)]
pub struct ContactRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    /// Kept untyped: a value of the wrong type falls back to the default
    /// locale instead of rejecting the inquiry.
    #[serde(default)]
    pub language: Option<Value>,
}

/// A validated inquiry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: Option<String>,
    /// Selects notification wording only
    pub language: Locale,
}

#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("invalid submission: {0}")]
    Validation(String),

    #[error("failed to dispatch notification: {0}")]
    Dispatch(#[from] MailError),
}

/// Successful submission acknowledgment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ack {
    pub success: bool,
    pub message: &'static str,
}

impl Ack {
    fn sent() -> Self {
        Self {
            success: true,
            message: "Email sent successfully",
        }
    }
}

impl ContactSubmission {
    /// Parse and validate a JSON request body.
    ///
    /// Malformed JSON is reported the same way as missing fields.
    pub fn parse(body: &[u8]) -> Result<Self, SubmissionError> {
        let request: ContactRequest = serde_json::from_slice(body)
            .map_err(|e| SubmissionError::Validation(format!("malformed payload: {}", e)))?;
        Self::try_from(request)
    }
}

impl TryFrom<ContactRequest> for ContactSubmission {
    type Error = SubmissionError;

    fn try_from(request: ContactRequest) -> Result<Self, Self::Error> {
        let name = required(request.name, "name")?;
        let email = required(request.email, "email")?;
        let phone = required(request.phone, "phone")?;

        let language = request
            .language
            .as_ref()
            .and_then(Value::as_str)
            .and_then(|code| Locale::from_code(code).ok())
            .unwrap_or_default();

        Ok(Self {
            name,
            email,
            phone,
            message: request.message.filter(|m| !m.is_empty()),
            language,
        })
    }
}

fn required(value: Option<String>, field: &str) -> Result<String, SubmissionError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(SubmissionError::Validation(format!("missing {}", field))),
    }
}

/// Build the staff notification for a submission.
pub fn compose_notification(
    submission: &ContactSubmission,
    submitted_at: DateTime<Utc>,
    from: &str,
    to: &str,
) -> MailMessage {
    let strings = &submission.language.strings().notification;

    let subject = fill(strings.subject, &[("name", submission.name.as_str())]);
    let timestamp = submitted_at.format(strings.timestamp_format).to_string();

    let name = escape_html(&submission.name);
    let email = escape_html(&submission.email);
    let phone = escape_html(&submission.phone);

    let mut fields = vec![
        field_row(strings.name_label, &name),
        field_row(
            strings.email_label,
            &format!("<a href=\"mailto:{0}\">{0}</a>", email),
        ),
        field_row(
            strings.phone_label,
            &format!("<a href=\"tel:{0}\">{0}</a>", phone),
        ),
    ];
    if let Some(message) = &submission.message {
        fields.push(field_row(
            strings.message_label,
            &escape_html(message).replace('\n', "<br>"),
        ));
    }
    fields.push(field_row(strings.submitted_label, &escape_html(&timestamp)));

    let html = format!(
        r#"<html>
  <head>
    <style>
      body {{ font-family: Arial, sans-serif; line-height: 1.6; color: #333; }}
      .container {{ max-width: 600px; margin: 0 auto; padding: 20px; }}
      .header {{ background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); color: white; padding: 20px; border-radius: 8px 8px 0 0; }}
      .content {{ background: #f9f9f9; padding: 20px; border-radius: 0 0 8px 8px; }}
      .field {{ margin-bottom: 15px; }}
      .label {{ font-weight: bold; color: #667eea; }}
      .value {{ margin-top: 5px; padding: 10px; background: white; border-radius: 4px; }}
    </style>
  </head>
  <body>
    <div class="container">
      <div class="header"><h2>{heading}</h2></div>
      <div class="content">
{fields}
      </div>
    </div>
  </body>
</html>"#,
        heading = strings.heading,
        fields = fields.join("\n"),
    );

    MailMessage {
        from: from.to_string(),
        to: to.to_string(),
        subject,
        html,
        reply_to: submission.email.clone(),
    }
}

fn field_row(label: &str, value_html: &str) -> String {
    format!(
        "        <div class=\"field\"><div class=\"label\">{}</div><div class=\"value\">{}</div></div>",
        label, value_html
    )
}

/// Escape text for inclusion in HTML content or a quoted attribute.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Validates submissions and dispatches notifications.
#[derive(Clone)]
pub struct ContactHandler {
    mailer: Arc<dyn Mailer>,
    from: String,
    to: String,
}

impl ContactHandler {
    pub fn new(mailer: Arc<dyn Mailer>, from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            mailer,
            from: from.into(),
            to: to.into(),
        }
    }

    pub fn from_config(mailer: Arc<dyn Mailer>, config: &Config) -> Self {
        Self::new(mailer, &config.mail_from, &config.contact_recipient)
    }

    /// Handle one raw request body.
    ///
    /// No retry, no deduplication: each successful call sends one email.
    pub async fn handle(&self, payload: &[u8]) -> Result<Ack, SubmissionError> {
        let submission = ContactSubmission::parse(payload).inspect_err(|e| {
            warn!("Rejected contact submission: {}", e);
        })?;

        let message = compose_notification(&submission, Utc::now(), &self.from, &self.to);

        match self.mailer.send(&message).await {
            Ok(receipt) => {
                info!(
                    "Inquiry from {} ({}) sent, message id {}",
                    submission.name, submission.language, receipt.message_id
                );
                Ok(Ack::sent())
            }
            Err(e) => {
                error!("Failed to send inquiry from {}: {}", submission.name, e);
                Err(SubmissionError::Dispatch(e))
            }
        }
    }
}

impl IntoResponse for Ack {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

impl IntoResponse for SubmissionError {
    fn into_response(self) -> Response {
        match self {
            SubmissionError::Validation(_) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Missing required fields" })),
            )
                .into_response(),
            SubmissionError::Dispatch(cause) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "Failed to send email",
                    "details": cause.to_string(),
                })),
            )
                .into_response(),
        }
    }
}
