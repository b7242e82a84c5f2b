//! Homework-status repository
//!
//! Fetches the raw status payload for the current poll window.

use async_trait::async_trait;
use serde_json::Value as JsonValue;
use tracing::{error, info};
use verdict_client::PracticumClient;
use verdict_core::domain::Cursor;

use crate::error::{PollError, Result};

/// Repository trait for the homework-status API
#[async_trait]
pub trait HomeworkRepository: Send + Sync {
    /// Fetches status changes since `cursor`
    ///
    /// A zero cursor means "from now". Fails with
    /// [`PollError::UpstreamUnavailable`] on any status other than 200.
    async fn get_api_answer(&self, cursor: Cursor) -> Result<JsonValue>;
}

/// HTTP implementation of HomeworkRepository
pub struct HttpHomeworkRepository {
    client: PracticumClient,
}

impl HttpHomeworkRepository {
    pub fn new(client: PracticumClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HomeworkRepository for HttpHomeworkRepository {
    async fn get_api_answer(&self, cursor: Cursor) -> Result<JsonValue> {
        match self.client.homework_statuses(cursor.from_date()).await {
            Ok(answer) => {
                info!("Received answer from homework API");
                Ok(answer)
            }
            Err(e) => {
                error!("No answer from homework API: {}", e);
                Err(PollError::from_api(e))
            }
        }
    }
}
