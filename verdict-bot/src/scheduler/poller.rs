//! Status poller
//!
//! Polls the homework-status API at a fixed interval and relays status
//! changes to the messaging channel. The poller owns all loop state: the
//! cursor, the last status message sent and the last error reported.
//! Nothing survives a restart.

use std::sync::Arc;
use tokio::time;
use tracing::{debug, error, info};
use verdict_core::domain::{Cursor, parse_status};
use verdict_core::dto::{check_response, current_date};

use crate::config::Config;
use crate::error::{PollError, Result};
use crate::repository::{HomeworkRepository, MessageRepository};
use crate::service::Dispatcher;

/// What a successful cycle did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// A new status message was delivered
    Notified,
    /// The status message matched the previous one
    Unchanged,
}

#[derive(Debug)]
struct PollState {
    cursor: Cursor,
    last_message: Option<String>,
    last_error: Option<String>,
}

/// Long-running poller relaying homework status changes
pub struct StatusPoller {
    config: Config,
    homeworks: Arc<dyn HomeworkRepository>,
    dispatcher: Dispatcher,
    state: PollState,
}

impl StatusPoller {
    /// Creates a poller whose first window starts now
    pub fn new(
        config: Config,
        homeworks: Arc<dyn HomeworkRepository>,
        messages: Arc<dyn MessageRepository>,
    ) -> Self {
        Self {
            config,
            homeworks,
            dispatcher: Dispatcher::new(messages),
            state: PollState {
                cursor: Cursor::now(),
                last_message: None,
                last_error: None,
            },
        }
    }

    /// Runs the poll loop until a fatal error
    ///
    /// Every cycle is followed by the retry sleep, whether it succeeded or
    /// not. Only missing credentials end the loop.
    pub async fn run(&mut self) -> Result<()> {
        info!(
            "Starting status poller (interval: {:?}, cursor: {})",
            self.config.retry_interval, self.state.cursor
        );

        loop {
            self.tick().await?;
            time::sleep(self.config.retry_interval).await;
        }
    }

    /// Performs one cycle without the trailing sleep
    ///
    /// Recoverable failures are reported through the error notification
    /// path and swallowed; only a fatal error is returned.
    pub async fn tick(&mut self) -> Result<()> {
        self.check_credentials()?;

        match self.poll_once().await {
            Ok(CycleOutcome::Notified) => debug!("Cycle finished, status notification sent"),
            Ok(CycleOutcome::Unchanged) => debug!("Cycle finished, nothing to send"),
            Err(e) => self.report_failure(&e).await,
        }

        Ok(())
    }

    fn check_credentials(&self) -> Result<()> {
        let credentials = &self.config.credentials;
        if credentials.check_tokens() {
            return Ok(());
        }

        let err = PollError::MissingCredentials(credentials.missing());
        error!(severity = "critical", "{}", err);
        Err(err)
    }

    /// Fetch, validate, translate and conditionally notify
    async fn poll_once(&mut self) -> Result<CycleOutcome> {
        let response = self.homeworks.get_api_answer(self.state.cursor).await?;

        let homeworks =
            check_response(&response).inspect_err(|e| error!("Invalid API response: {}", e))?;

        let message = match homeworks.first() {
            Some(newest) => parse_status(newest).inspect_err(|e| error!("{}", e))?,
            None => {
                info!("Homework list is empty");
                String::new()
            }
        };

        let next = current_date(&response).unwrap_or_else(|| Cursor::now().timestamp());
        self.state.cursor.advance(next);

        if self.state.last_message.as_deref() == Some(message.as_str()) {
            debug!("Homework status unchanged");
            return Ok(CycleOutcome::Unchanged);
        }

        self.dispatcher.send_message(&message).await?;
        self.state.last_message = Some(message);
        Ok(CycleOutcome::Notified)
    }

    /// Reports a recoverable failure unless it repeats the previous one
    async fn report_failure(&mut self, error: &PollError) {
        let message = format!("Program failure: {error}");
        error!("{}", message);

        if self.state.last_error.as_deref() == Some(message.as_str()) {
            debug!("Same failure as last cycle, not notifying");
            return;
        }

        self.dispatcher.send_error(&message).await;
        self.state.last_error = Some(message);
    }
}

#[cfg(test)]
impl StatusPoller {
    /// Starts the first window at `cursor` instead of now
    pub fn with_cursor(mut self, cursor: Cursor) -> Self {
        self.state.cursor = cursor;
        self
    }

    pub fn cursor(&self) -> Cursor {
        self.state.cursor
    }
}
