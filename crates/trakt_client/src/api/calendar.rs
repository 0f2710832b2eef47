use std::sync::Arc;

use chrono::NaiveDate;
use log::{error, info};
use reqwest::{Client, Method, StatusCode};

use super::models::{CalendarEntry, CalendarItem};
use crate::auth::TokenStore;
use crate::config::TraktConfig;
use crate::error::{Result, TraktError};
use crate::utils::http_utils::execute_request;

#[derive(Debug, Clone)]
pub struct CalendarClient {
    client: Arc<Client>,
    config: TraktConfig,
    token_store: TokenStore,
}

impl CalendarClient {
    pub fn new(client: Arc<Client>, config: TraktConfig, token_store: TokenStore) -> Self {
        CalendarClient {
            client,
            config,
            token_store,
        }
    }

    /// Fetch the episodes airing in `number_days` days starting at `date`
    /// for the shows the user follows, in the order Trakt returns them.
    ///
    /// A 401/403 clears the cached token before returning
    /// [`TraktError::Unauthorized`], so the next run authenticates again.
    pub async fn get_calendar(
        &self,
        token: &str,
        date: NaiveDate,
        number_days: u32,
    ) -> Result<Vec<CalendarEntry>> {
        let path = format!(
            "/calendars/my/shows/{}/{}",
            date.format("%Y-%m-%d"),
            number_days
        );
        let response =
            execute_request::<()>(&self.client, &self.config, Method::GET, &path, Some(token), None)
                .await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            println!("Auth Token has expired.");
            error!("Calendar request rejected with {}, clearing cached token", status);
            self.token_store.clear()?;
            return Err(TraktError::Unauthorized(status));
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(TraktError::Api { status, message });
        }

        let items = response.json::<Vec<CalendarItem>>().await?;
        info!("Calendar for {} returned {} entries", date, items.len());
        Ok(items.into_iter().map(CalendarEntry::from).collect())
    }
}
