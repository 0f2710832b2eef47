//! Minimal ntfy publisher.
//!
//! A message is published by POSTing its raw UTF-8 text to
//! `{server}/{channel}`. Subscribers of the topic receive it as a push
//! notification. The reply status is only logged: ntfy rate limits and
//! rejections do not stop the caller, only transport failures do.

use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::Client;
use thiserror::Error;

pub const DEFAULT_SERVER: &str = "https://ntfy.sh";
pub const DEFAULT_CHANNEL: &str = "trakttv_shows";

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("failed to reach notification topic: {0}")]
    Http(#[from] reqwest::Error),
}

#[async_trait]
pub trait Notifier: Send + Sync {
    /// Publish a single plain-text message.
    async fn send(&self, message: &str) -> Result<(), NotifyError>;
}

#[derive(Debug, Clone)]
pub struct NtfyNotifier {
    client: Arc<Client>,
    topic_url: String,
    channel: String,
}

impl NtfyNotifier {
    pub fn new(client: Arc<Client>, server: &str, channel: impl Into<String>) -> Self {
        let channel = channel.into();
        let topic_url = format!("{}/{}", server.trim_end_matches('/'), channel);
        NtfyNotifier {
            client,
            topic_url,
            channel,
        }
    }

    pub fn topic_url(&self) -> &str {
        &self.topic_url
    }
}

#[async_trait]
impl Notifier for NtfyNotifier {
    async fn send(&self, message: &str) -> Result<(), NotifyError> {
        debug!("Publishing to {}: {}", self.topic_url, message);

        let response = self
            .client
            .post(&self.topic_url)
            .body(message.as_bytes().to_vec())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("ntfy answered {} for channel {}: {}", status, self.channel, body);
            return Ok(());
        }

        info!("Notification delivered to channel {}", self.channel);
        Ok(())
    }
}
