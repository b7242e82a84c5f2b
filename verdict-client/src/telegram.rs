//! Telegram Bot API

use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::error::{ClientError, Result};

/// Public Bot API base URL
pub const DEFAULT_API_URL: &str = "https://api.telegram.org";

/// Envelope every Bot API method answers with
#[derive(Debug, Deserialize)]
struct BotApiReply {
    ok: bool,
    description: Option<String>,
}

/// Client for sending messages through a Telegram bot
#[derive(Debug, Clone)]
pub struct TelegramClient {
    /// Base URL of the Bot API (e.g., "https://api.telegram.org")
    api_url: String,
    bot_token: String,
    client: Client,
}

impl TelegramClient {
    /// Create a new client against the public Bot API
    pub fn new(bot_token: impl Into<String>) -> Self {
        Self::with_client(DEFAULT_API_URL, bot_token, Client::new())
    }

    /// Create a new client with a custom base URL and HTTP client
    pub fn with_client(
        api_url: impl Into<String>,
        bot_token: impl Into<String>,
        client: Client,
    ) -> Self {
        let api_url = api_url.into();
        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            bot_token: bot_token.into(),
            client,
        }
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{method}", self.api_url, self.bot_token)
    }

    /// Send a plain-text message to a chat
    ///
    /// Fails if the request cannot be made, the Bot API answers with a
    /// non-2xx status, or the reply reports `"ok": false`. Transport errors
    /// have the request URL stripped since it embeds the bot token.
    pub async fn send_message(&self, chat_id: &str, text: &str) -> Result<()> {
        let body = serde_json::json!({
            "chat_id": chat_id,
            "text": text,
        });

        debug!(chat_id, "Sending Telegram message");

        let response = self
            .client
            .post(self.method_url("sendMessage"))
            .json(&body)
            .send()
            .await
            .map_err(|e| ClientError::RequestFailed(e.without_url()))?;

        let status = response.status();
        if !status.is_success() {
            let message = crate::error_body(response).await;
            return Err(ClientError::api_error(status.as_u16(), message));
        }

        let reply: BotApiReply = response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse Bot API reply: {}", e)))?;

        if !reply.ok {
            return Err(ClientError::api_error(
                status.as_u16(),
                reply
                    .description
                    .unwrap_or_else(|| "sendMessage failed".to_string()),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> TelegramClient {
        TelegramClient::with_client(server.uri(), "123:abc", Client::new())
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = TelegramClient::with_client("http://localhost:8081/", "t", Client::new());
        assert_eq!(client.api_url, "http://localhost:8081");
        assert_eq!(
            client.method_url("sendMessage"),
            "http://localhost:8081/bott/sendMessage"
        );
    }

    #[test]
    fn test_default_api_url() {
        assert_eq!(TelegramClient::new("t").api_url, DEFAULT_API_URL);
    }

    #[tokio::test]
    async fn test_send_message_posts_chat_and_text() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/bot123:abc/sendMessage"))
            .and(body_json(json!({"chat_id": "42", "text": "hello"})))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"ok": true, "result": {}})),
            )
            .expect(1)
            .mount(&server)
            .await;

        client_for(&server).send_message("42", "hello").await.unwrap();
    }

    #[tokio::test]
    async fn test_rejected_send_is_api_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/bot123:abc/sendMessage"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "ok": false,
                "error_code": 400,
                "description": "Bad Request: chat not found"
            })))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .send_message("42", "hello")
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::ApiError { status: 400, .. }));
        assert!(err.to_string().contains("chat not found"));
    }

    #[tokio::test]
    async fn test_not_ok_reply_is_api_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/bot123:abc/sendMessage"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"ok": false, "description": "flood control"})),
            )
            .mount(&server)
            .await;

        let err = client_for(&server)
            .send_message("42", "hello")
            .await
            .unwrap_err();
        assert!(err.to_string().contains("flood control"));
    }

    #[tokio::test]
    async fn test_transport_error_hides_token() {
        // Nothing listens on port 9 of localhost
        let client = TelegramClient::with_client("http://127.0.0.1:9", "123:secret", Client::new());
        let err = client.send_message("42", "hello").await.unwrap_err();
        assert!(matches!(err, ClientError::RequestFailed(_)));
        assert!(!err.to_string().contains("123:secret"));
    }
}
