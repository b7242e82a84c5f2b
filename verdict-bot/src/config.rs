//! Bot configuration
//!
//! Defines the secrets and tunables for the watcher: the three credentials,
//! the remote endpoints, the retry interval and the request timeout.

use std::time::Duration;

use verdict_client::practicum::DEFAULT_ENDPOINT;
use verdict_client::telegram::DEFAULT_API_URL;

const DEFAULT_RETRY_INTERVAL: Duration = Duration::from_secs(600);
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// The three opaque secrets the watcher needs
///
/// Missing values are stored as empty strings; [`Credentials::check_tokens`]
/// decides whether the bot may run.
#[derive(Clone, Default)]
pub struct Credentials {
    /// OAuth token for the homework-status API
    pub practicum_token: String,

    /// Telegram bot token
    pub telegram_token: String,

    /// Recipient chat
    pub telegram_chat_id: String,
}

impl Credentials {
    pub fn new(
        practicum_token: impl Into<String>,
        telegram_token: impl Into<String>,
        telegram_chat_id: impl Into<String>,
    ) -> Self {
        Self {
            practicum_token: practicum_token.into(),
            telegram_token: telegram_token.into(),
            telegram_chat_id: telegram_chat_id.into(),
        }
    }

    /// True iff all three secrets are present
    pub fn check_tokens(&self) -> bool {
        [
            &self.practicum_token,
            &self.telegram_token,
            &self.telegram_chat_id,
        ]
        .iter()
        .all(|secret| !secret.is_empty())
    }

    /// Names of the environment variables that are missing
    pub fn missing(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.practicum_token.is_empty() {
            missing.push("PRACTICUM_TOKEN");
        }
        if self.telegram_token.is_empty() {
            missing.push("TELEGRAM_TOKEN");
        }
        if self.telegram_chat_id.is_empty() {
            missing.push("TELEGRAM_CHAT_ID");
        }
        missing
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mask = |s: &str| if s.is_empty() { "<unset>" } else { "<redacted>" };
        f.debug_struct("Credentials")
            .field("practicum_token", &mask(self.practicum_token.as_str()))
            .field("telegram_token", &mask(self.telegram_token.as_str()))
            .field("telegram_chat_id", &self.telegram_chat_id)
            .finish()
    }
}

/// Bot configuration
///
/// Built once at startup and handed to the poller; never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    pub credentials: Credentials,

    /// Homework-status endpoint
    pub practicum_endpoint: String,

    /// Telegram Bot API base URL
    pub telegram_api_url: String,

    /// Sleep between two poll cycles
    pub retry_interval: Duration,

    /// Upper bound on every outbound request
    pub request_timeout: Duration,
}

impl Config {
    /// Creates a new configuration with defaults
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            practicum_endpoint: DEFAULT_ENDPOINT.to_string(),
            telegram_api_url: DEFAULT_API_URL.to_string(),
            retry_interval: DEFAULT_RETRY_INTERVAL,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    /// Creates configuration from environment variables
    ///
    /// Expected environment variables:
    /// - PRACTICUM_TOKEN, TELEGRAM_TOKEN, TELEGRAM_CHAT_ID (required, but
    ///   absence is reported by the credential check, not here)
    /// - PRACTICUM_ENDPOINT (optional)
    /// - TELEGRAM_API_URL (optional)
    /// - RETRY_INTERVAL (optional, seconds, default: 600)
    /// - REQUEST_TIMEOUT (optional, seconds, default: 30)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let secret = |key: &str| lookup(key).unwrap_or_default();
        let seconds = |key: &str, default: Duration| {
            lookup(key)
                .and_then(|s| s.trim().parse::<u64>().ok())
                .map(Duration::from_secs)
                .unwrap_or(default)
        };

        let credentials = Credentials::new(
            secret("PRACTICUM_TOKEN"),
            secret("TELEGRAM_TOKEN"),
            secret("TELEGRAM_CHAT_ID"),
        );

        let mut config = Self::new(credentials);
        if let Some(endpoint) = lookup("PRACTICUM_ENDPOINT") {
            config.practicum_endpoint = endpoint;
        }
        if let Some(api_url) = lookup("TELEGRAM_API_URL") {
            config.telegram_api_url = api_url;
        }
        config.retry_interval = seconds("RETRY_INTERVAL", DEFAULT_RETRY_INTERVAL);
        config.request_timeout = seconds("REQUEST_TIMEOUT", DEFAULT_REQUEST_TIMEOUT);
        config
    }

    /// Validates the configuration
    ///
    /// Credentials are deliberately not checked here.
    pub fn validate(&self) -> anyhow::Result<()> {
        for (name, url) in [
            ("practicum_endpoint", &self.practicum_endpoint),
            ("telegram_api_url", &self.telegram_api_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                anyhow::bail!("{name} must start with http:// or https://");
            }
        }

        if self.retry_interval.is_zero() {
            anyhow::bail!("retry_interval must be greater than 0");
        }

        if self.request_timeout.is_zero() {
            anyhow::bail!("request_timeout must be greater than 0");
        }

        Ok(())
    }
}
