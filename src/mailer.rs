//! Outbound mail.
//!
//! [`Mailer`] is the port the contact handler dispatches through.
//! [`HttpMailer`] implements it against a JSON mail relay: one POST per
//! message, bearer-token auth, no retries.

use crate::config::Config;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// A composed message, ready to hand to a mail transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MailMessage {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub html: String,
    pub reply_to: String,
}

/// Proof of acceptance returned by the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailReceipt {
    pub message_id: String,
}

#[derive(Debug, Error)]
pub enum MailError {
    #[error("mail relay request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("mail relay rejected message ({status}): {body}")]
    Rejected { status: u16, body: String },

    #[error("mail relay returned an unexpected response: {0}")]
    InvalidResponse(String),
}

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, message: &MailMessage) -> Result<MailReceipt, MailError>;
}

#[derive(Debug, Deserialize)]
struct RelayResponse {
    id: Option<String>,
}

/// Mail relay client.
pub struct HttpMailer {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl HttpMailer {
    pub fn new(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, MailError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, MailError> {
        Self::new(
            config.mail_api_url.clone(),
            config.mail_api_key.clone(),
            Duration::from_secs(config.mail_timeout_secs),
        )
    }
}

#[async_trait]
impl Mailer for HttpMailer {
    async fn send(&self, message: &MailMessage) -> Result<MailReceipt, MailError> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(message)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(MailError::Rejected { status, body });
        }

        let body = response.text().await?;
        let parsed: RelayResponse = serde_json::from_str(&body)
            .map_err(|e| MailError::InvalidResponse(format!("{}: {}", e, body)))?;

        match parsed.id {
            Some(message_id) => Ok(MailReceipt { message_id }),
            None => Err(MailError::InvalidResponse(format!(
                "missing message id: {}",
                body
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::{
        matchers::{body_json, header, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    fn create_message() -> MailMessage {
        MailMessage {
            from: "Franchise <noreply@example.com>".to_string(),
            to: "staff@example.com".to_string(),
            subject: "New Franchise Inquiry - Ada".to_string(),
            html: "<p>hello</p>".to_string(),
            reply_to: "ada@example.com".to_string(),
        }
    }

    fn create_mailer(server: &MockServer) -> HttpMailer {
        HttpMailer::new(
            format!("{}/send", server.uri()),
            "relay-key",
            Duration::from_secs(5),
        )
        .expect("client should build")
    }

    // ==================== Serialization Tests ====================

    #[test]
    fn test_mail_message_serialization() {
        let json = serde_json::to_value(create_message()).unwrap();
        assert_eq!(json["reply_to"], "ada@example.com");
        assert_eq!(json["subject"], "New Franchise Inquiry - Ada");
        assert_eq!(json["html"], "<p>hello</p>");
    }

    // ==================== HttpMailer Tests ====================

    #[tokio::test]
    async fn test_send_success_returns_message_id() {
        let mock_server = MockServer::start().await;
        let message = create_message();

        Mock::given(method("POST"))
            .and(path("/send"))
            .and(header("Authorization", "Bearer relay-key"))
            .and(body_json(&message))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": "msg-42"})),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let receipt = create_mailer(&mock_server).send(&message).await.unwrap();
        assert_eq!(receipt.message_id, "msg-42");
    }

    #[tokio::test]
    async fn test_send_rejected_carries_status_and_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/send"))
            .respond_with(ResponseTemplate::new(401).set_body_string("bad credentials"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let err = create_mailer(&mock_server)
            .send(&create_message())
            .await
            .unwrap_err();

        match err {
            MailError::Rejected { status, ref body } => {
                assert_eq!(status, 401);
                assert_eq!(body, "bad credentials");
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(err.to_string().contains("401"));
    }

    #[tokio::test]
    async fn test_send_does_not_retry_server_errors() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/send"))
            .respond_with(ResponseTemplate::new(503))
            .expect(1)
            .mount(&mock_server)
            .await;

        let result = create_mailer(&mock_server).send(&create_message()).await;
        assert!(matches!(result, Err(MailError::Rejected { status: 503, .. })));
    }

    #[tokio::test]
    async fn test_send_missing_id_is_invalid_response() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/send"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .mount(&mock_server)
            .await;

        let result = create_mailer(&mock_server).send(&create_message()).await;
        assert!(matches!(result, Err(MailError::InvalidResponse(_))));
    }

    #[tokio::test]
    async fn test_send_non_json_body_is_invalid_response() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/send"))
            .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
            .mount(&mock_server)
            .await;

        let result = create_mailer(&mock_server).send(&create_message()).await;
        assert!(matches!(result, Err(MailError::InvalidResponse(_))));
    }

    #[tokio::test]
    async fn test_send_connection_error_is_transport() {
        // Reserve a free port, then release it so the connection is refused
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };

        let mailer = HttpMailer::new(
            format!("http://127.0.0.1:{}/send", port),
            "k",
            Duration::from_secs(2),
        )
        .unwrap();
        let result = mailer.send(&create_message()).await;
        assert!(
            matches!(result, Err(MailError::Transport(_))),
            "unexpected result: {:?}",
            result
        );
    }

    #[test]
    fn test_from_config() {
        let config = Config {
            mail_api_url: "http://localhost:1/send".to_string(),
            mail_api_key: "k".to_string(),
            mail_timeout_secs: 3,
            mail_from: "a@b.c".to_string(),
            contact_recipient: "d@e.f".to_string(),
            port: 8080,
        };

        let mailer = HttpMailer::from_config(&config).unwrap();
        assert_eq!(mailer.endpoint, "http://localhost:1/send");
        assert_eq!(mailer.api_key, "k");
    }
}
