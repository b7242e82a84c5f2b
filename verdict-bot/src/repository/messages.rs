//! Messaging repository
//!
//! Delivers plain-text messages to the single configured recipient.

use async_trait::async_trait;
use verdict_client::TelegramClient;

use crate::error::{PollError, Result};

/// Repository trait for the messaging channel
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Sends `text` to the configured recipient
    ///
    /// Fails with [`PollError::NotificationUnavailable`] when the channel
    /// does not accept the message.
    async fn send(&self, text: &str) -> Result<()>;
}

/// Telegram implementation of MessageRepository
pub struct TelegramMessageRepository {
    client: TelegramClient,
    chat_id: String,
}

impl TelegramMessageRepository {
    /// # Arguments
    /// * `client` - Bot API client holding the bot token
    /// * `chat_id` - Recipient chat
    pub fn new(client: TelegramClient, chat_id: String) -> Self {
        Self { client, chat_id }
    }
}

#[async_trait]
impl MessageRepository for TelegramMessageRepository {
    async fn send(&self, text: &str) -> Result<()> {
        self.client
            .send_message(&self.chat_id, text)
            .await
            .map_err(PollError::from_notifier)
    }
}
