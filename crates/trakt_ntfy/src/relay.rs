use std::sync::Arc;

use anyhow::{anyhow, Context};
use chrono::{Local, NaiveDate};
use log::{info, warn};
use ntfy_notifier::{Notifier, NotifyError, NtfyNotifier};
use reqwest::Client;
use trakt_client::{CalendarClient, CalendarEntry, DeviceAuthHandler, TokenStore, TraktConfig};

use crate::config::Settings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Number of notifications sent.
    Delivered(usize),
    AuthenticationFailed,
}

pub fn notification_message(entry: &CalendarEntry) -> String {
    format!("New Ep - {}: S{} E{}!", entry.show, entry.season, entry.number)
}

/// Send one message per entry, in order. The first failed delivery aborts
/// the remaining ones.
pub async fn notify(
    notifier: &dyn Notifier,
    entries: &[CalendarEntry],
) -> Result<usize, NotifyError> {
    for entry in entries {
        notifier.send(&notification_message(entry)).await?;
    }
    Ok(entries.len())
}

pub struct Relay {
    auth_handler: DeviceAuthHandler,
    calendar: CalendarClient,
    notifier: Arc<dyn Notifier>,
    channel: String,
}

impl Relay {
    pub fn new(
        auth_handler: DeviceAuthHandler,
        calendar: CalendarClient,
        notifier: Arc<dyn Notifier>,
        channel: impl Into<String>,
    ) -> Self {
        Relay {
            auth_handler,
            calendar,
            notifier,
            channel: channel.into(),
        }
    }

    pub fn from_settings(settings: &Settings) -> anyhow::Result<Self> {
        let client = Arc::new(Self::build_http_client()?);

        let notifier: Arc<dyn Notifier> = Arc::new(NtfyNotifier::new(
            Arc::clone(&client),
            &settings.ntfy_server,
            settings.channel.clone(),
        ));

        let config = TraktConfig::new(settings.client_id.clone(), settings.client_secret.clone())
            .with_api_root(&settings.api_root);
        let token_store = TokenStore::new(settings.token_file.clone());

        let auth_handler =
            DeviceAuthHandler::new(Arc::clone(&client), config.clone(), token_store.clone())
                .with_notifier(Arc::clone(&notifier));
        let calendar = CalendarClient::new(client, config, token_store);

        Ok(Self::new(auth_handler, calendar, notifier, settings.channel.clone()))
    }

    fn build_http_client() -> anyhow::Result<Client> {
        Client::builder()
            .user_agent(concat!("trakt-ntfy/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| anyhow!("Failed to build HTTP client: {e}"))
    }

    /// Authenticate, fetch the calendar window starting at `date` (today when
    /// `None`) and push one notification per episode.
    pub async fn run(&self, date: Option<NaiveDate>, days: u32) -> anyhow::Result<RunOutcome> {
        println!("Initializing...");
        println!("Updates will be sent to channel: {}", self.channel);

        let status = self
            .auth_handler
            .authenticate()
            .await
            .context("Trakt authentication failed")?;
        let Some(token) = status.token() else {
            warn!("Authentication did not complete: {:?}", status);
            return Ok(RunOutcome::AuthenticationFailed);
        };

        let date = match date {
            Some(date) => {
                println!("Importing calendar ({date})...");
                date
            }
            None => {
                let today = Local::now().date_naive();
                println!("Importing today's calendar ({today})...");
                today
            }
        };
        let entries = self
            .calendar
            .get_calendar(token, date, days)
            .await
            .with_context(|| format!("Failed to fetch calendar for {date}"))?;

        println!("Send notifications for {} entries...", entries.len());
        let sent = notify(self.notifier.as_ref(), &entries)
            .await
            .context("Failed to deliver notification")?;

        info!("Relayed {} episodes to channel {}", sent, self.channel);
        Ok(RunOutcome::Delivered(sent))
    }
}
