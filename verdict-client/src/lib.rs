//! Verdict HTTP Clients
//!
//! Thin, typed clients for the two remote services the watcher talks to:
//!
//! - [`PracticumClient`]: the homework-status API, queried with an OAuth
//!   token and a `from_date` cursor
//! - [`TelegramClient`]: the Telegram Bot API, used to deliver plain-text
//!   notifications to a single chat
//!
//! Both clients accept a preconfigured [`reqwest::Client`] so callers can
//! bound every request with a timeout.
//!
//! # Example
//!
//! ```no_run
//! use verdict_client::PracticumClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), verdict_client::ClientError> {
//!     let client = PracticumClient::new(verdict_client::practicum::DEFAULT_ENDPOINT, "token");
//!     let answer = client.homework_statuses(1_700_000_000).await?;
//!     println!("{answer}");
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod practicum;
pub mod telegram;

pub use error::{ClientError, Result};
pub use practicum::PracticumClient;
pub use telegram::TelegramClient;

/// Reads the body of a failed response for use in an error message
async fn error_body(response: reqwest::Response) -> String {
    response
        .text()
        .await
        .unwrap_or_else(|e| format!("<failed to read response body: {e}>"))
}
