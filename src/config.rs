use anyhow::{Context, Result};

pub const DEFAULT_MAIL_FROM: &str = "\"UNI&CORE Franchise\" <noreply@unincore.us>";
pub const DEFAULT_CONTACT_RECIPIENT: &str = "staff@unincore.us";

#[derive(Debug, Clone)]
pub struct Config {
    // Mail relay
    pub mail_api_url: String,
    pub mail_api_key: String,
    pub mail_timeout_secs: u64,

    // Notification addressing
    pub mail_from: String,
    pub contact_recipient: String,

    // Server
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Mail relay
            mail_api_url: std::env::var("MAIL_API_URL").context("MAIL_API_URL not set")?,
            mail_api_key: std::env::var("MAIL_API_KEY").context("MAIL_API_KEY not set")?,
            mail_timeout_secs: std::env::var("MAIL_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),

            // Notification addressing
            mail_from: std::env::var("MAIL_FROM")
                .unwrap_or_else(|_| DEFAULT_MAIL_FROM.to_string()),
            contact_recipient: std::env::var("CONTACT_RECIPIENT")
                .unwrap_or_else(|_| DEFAULT_CONTACT_RECIPIENT.to_string()),

            // Server
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const ALL_VARS: [&str; 6] = [
        "MAIL_API_URL",
        "MAIL_API_KEY",
        "MAIL_TIMEOUT_SECS",
        "MAIL_FROM",
        "CONTACT_RECIPIENT",
        "PORT",
    ];

    fn clear_env() {
        for var in ALL_VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_from_env_applies_defaults() {
        clear_env();
        std::env::set_var("MAIL_API_URL", "https://relay.example.com/send");
        std::env::set_var("MAIL_API_KEY", "key-123");

        let config = Config::from_env().expect("Should load");
        assert_eq!(config.mail_api_url, "https://relay.example.com/send");
        assert_eq!(config.mail_api_key, "key-123");
        assert_eq!(config.mail_timeout_secs, 30);
        assert_eq!(config.mail_from, DEFAULT_MAIL_FROM);
        assert_eq!(config.contact_recipient, DEFAULT_CONTACT_RECIPIENT);
        assert_eq!(config.port, 8080);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_reads_overrides() {
        clear_env();
        std::env::set_var("MAIL_API_URL", "http://localhost:9000/mail");
        std::env::set_var("MAIL_API_KEY", "secret");
        std::env::set_var("MAIL_TIMEOUT_SECS", "5");
        std::env::set_var("MAIL_FROM", "Franchise <hello@example.com>");
        std::env::set_var("CONTACT_RECIPIENT", "sales@example.com");
        std::env::set_var("PORT", "3000");

        let config = Config::from_env().expect("Should load");
        assert_eq!(config.mail_timeout_secs, 5);
        assert_eq!(config.mail_from, "Franchise <hello@example.com>");
        assert_eq!(config.contact_recipient, "sales@example.com");
        assert_eq!(config.port, 3000);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_numbers_fall_back() {
        clear_env();
        std::env::set_var("MAIL_API_URL", "http://localhost:9000/mail");
        std::env::set_var("MAIL_API_KEY", "secret");
        std::env::set_var("MAIL_TIMEOUT_SECS", "soon");
        std::env::set_var("PORT", "not-a-port");

        let config = Config::from_env().expect("Should load");
        assert_eq!(config.mail_timeout_secs, 30);
        assert_eq!(config.port, 8080);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_missing_api_key_names_variable() {
        clear_env();
        std::env::set_var("MAIL_API_URL", "http://localhost:9000/mail");

        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("MAIL_API_KEY"));

        clear_env();
    }
}
