//! Verdict Bot
//!
//! Watches a student's homework submissions and relays review status
//! changes to a Telegram chat.
//!
//! Architecture:
//! - Configuration: secrets and tunables from the environment (and `.env`)
//! - Repositories: the homework-status API and the messaging channel
//! - Services: notification dispatch
//! - Scheduler: the fixed-interval poll loop
//!
//! The bot runs until killed. Missing credentials are the only condition
//! that stops it on its own, with a non-zero exit code.

mod config;
mod error;
mod repository;
mod scheduler;
mod service;

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use verdict_client::{PracticumClient, TelegramClient};

use crate::config::Config;
use crate::repository::{HttpHomeworkRepository, TelegramMessageRepository};
use crate::scheduler::StatusPoller;

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine, the environment may already be set
    let dotenv_path = dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "verdict_bot=info,verdict_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Verdict bot");
    if let Some(path) = dotenv_path {
        info!("Loaded environment from {}", path.display());
    }

    let config = Config::from_env();
    config.validate()?;
    info!(
        "Loaded configuration: endpoint={}, retry_interval={:?}, request_timeout={:?}",
        config.practicum_endpoint, config.retry_interval, config.request_timeout
    );

    let http = reqwest::Client::builder()
        .timeout(config.request_timeout)
        .build()
        .context("Failed to build HTTP client")?;

    let homeworks = Arc::new(HttpHomeworkRepository::new(PracticumClient::with_client(
        &config.practicum_endpoint,
        &config.credentials.practicum_token,
        http.clone(),
    )));
    let messages = Arc::new(TelegramMessageRepository::new(
        TelegramClient::with_client(
            &config.telegram_api_url,
            &config.credentials.telegram_token,
            http,
        ),
        config.credentials.telegram_chat_id.clone(),
    ));

    let mut poller = StatusPoller::new(config, homeworks, messages);

    if let Err(e) = poller.run().await {
        error!("Poller stopped: {}", e);
        return Err(e.into());
    }

    Ok(())
}
