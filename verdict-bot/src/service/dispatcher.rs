//! Notification dispatcher
//!
//! Sends status and error notifications through a [`MessageRepository`].
//! Status notifications surface delivery failures to the caller; error
//! notifications swallow them, as there is no second channel to report on.

use std::sync::Arc;
use tracing::{error, info};

use crate::error::Result;
use crate::repository::MessageRepository;

/// Text sent in place of an empty status message
pub const EMPTY_LIST_PLACEHOLDER: &str = "submission list is empty";

pub struct Dispatcher {
    messages: Arc<dyn MessageRepository>,
}

impl Dispatcher {
    pub fn new(messages: Arc<dyn MessageRepository>) -> Self {
        Self { messages }
    }

    /// Sends a status message
    ///
    /// An empty message becomes [`EMPTY_LIST_PLACEHOLDER`]. Fails with
    /// `NotificationUnavailable` if the channel rejects it.
    pub async fn send_message(&self, message: &str) -> Result<()> {
        let text = if message.is_empty() {
            EMPTY_LIST_PLACEHOLDER
        } else {
            message
        };
        self.deliver(text).await
    }

    /// Sends an error notification
    ///
    /// Delivery failures are logged and dropped.
    pub async fn send_error(&self, message: &str) {
        let _ = self.deliver(message).await;
    }

    async fn deliver(&self, text: &str) -> Result<()> {
        match self.messages.send(text).await {
            Ok(()) => {
                info!("Message sent");
                Ok(())
            }
            Err(e) => {
                error!("Message not sent: {}", e);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PollError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Outbox {
        sent: Mutex<Vec<String>>,
        broken: bool,
    }

    #[async_trait]
    impl MessageRepository for Outbox {
        async fn send(&self, text: &str) -> Result<()> {
            if self.broken {
                return Err(PollError::NotificationUnavailable("channel down".into()));
            }
            self.sent.lock().unwrap().push(text.to_string());
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_empty_message_becomes_placeholder() {
        let outbox = Arc::new(Outbox::default());
        let dispatcher = Dispatcher::new(outbox.clone());

        dispatcher.send_message("").await.unwrap();
        dispatcher.send_message("hello").await.unwrap();

        assert_eq!(
            *outbox.sent.lock().unwrap(),
            vec![EMPTY_LIST_PLACEHOLDER.to_string(), "hello".to_string()]
        );
    }

    #[tokio::test]
    async fn test_error_messages_are_not_normalized() {
        let outbox = Arc::new(Outbox::default());
        let dispatcher = Dispatcher::new(outbox.clone());

        dispatcher.send_error("Program failure: x").await;
        assert_eq!(*outbox.sent.lock().unwrap(), vec!["Program failure: x"]);
    }

    #[tokio::test]
    async fn test_delivery_failure() {
        let outbox = Arc::new(Outbox {
            broken: true,
            ..Default::default()
        });
        let dispatcher = Dispatcher::new(outbox.clone());

        let err = dispatcher.send_message("hello").await.unwrap_err();
        assert!(matches!(err, PollError::NotificationUnavailable(_)));

        dispatcher.send_error("Program failure: x").await;
        assert!(outbox.sent.lock().unwrap().is_empty());
    }
}
