//! Homework-status API

use reqwest::header::AUTHORIZATION;
use reqwest::{Client, StatusCode};
use serde_json::Value as JsonValue;
use tracing::debug;

use crate::error::{ClientError, Result};

/// Production endpoint of the homework-status API
pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// Client for the homework-status API
#[derive(Debug, Clone)]
pub struct PracticumClient {
    /// Full endpoint URL (kept verbatim, the trailing slash matters)
    endpoint: String,
    /// OAuth token of the student
    token: String,
    /// HTTP client instance
    client: Client,
}

impl PracticumClient {
    /// Create a new client with a default HTTP client
    pub fn new(endpoint: impl Into<String>, token: impl Into<String>) -> Self {
        Self::with_client(endpoint, token, Client::new())
    }

    /// Create a new client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    pub fn with_client(
        endpoint: impl Into<String>,
        token: impl Into<String>,
        client: Client,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            token: token.into(),
            client,
        }
    }

    fn authorization(&self) -> String {
        format!("OAuth {}", self.token)
    }

    /// Fetch status changes since `from_date`
    ///
    /// # Arguments
    /// * `from_date` - Unix timestamp, lower bound of the window
    ///
    /// # Returns
    /// The parsed JSON body. Any status other than `200 OK` is an
    /// [`ClientError::ApiError`] carrying that status.
    pub async fn homework_statuses(&self, from_date: i64) -> Result<JsonValue> {
        debug!(from_date, "Requesting homework statuses");

        let response = self
            .client
            .get(&self.endpoint)
            .header(AUTHORIZATION, self.authorization())
            .query(&[("from_date", from_date)])
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            let message = crate::error_body(response).await;
            return Err(ClientError::api_error(status.as_u16(), message));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }
}
