use std::{
    io::Write,
    sync::Arc,
    time::{Duration, Instant},
};

use log::{debug, info, warn};
use ntfy_notifier::Notifier;
use reqwest::{Client, Method, StatusCode};
use serde::{Deserialize, Serialize};
use tokio::time::sleep;

use super::device_code::{present_device_code, DeviceCodeGrant};
use super::token_store::TokenStore;
use crate::config::TraktConfig;
use crate::error::{Result, TraktError};
use crate::masking::mask_token;
use crate::utils::http_utils::execute_request;

const AUTH_REQUIRED_MESSAGE: &str = "Trakt TV API authentication is necessary.";

#[derive(Debug, Serialize)]
struct DeviceCodeRequest<'a> {
    client_id: &'a str,
}

#[derive(Debug, Serialize)]
struct TokenRequest<'a> {
    code: &'a str,
    client_id: &'a str,
    client_secret: &'a str,
}

/// Access token response from Trakt
#[derive(Debug, Deserialize)]
struct AccessTokenResponse {
    access_token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthFailure {
    /// The token endpoint answered with a terminal status.
    Rejected(StatusCode),
    /// The device code ran out before the user approved it.
    Expired,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthStatus {
    Authenticated(String),
    Failed(AuthFailure),
}

impl AuthStatus {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthStatus::Authenticated(_))
    }

    pub fn token(&self) -> Option<&str> {
        match self {
            AuthStatus::Authenticated(token) => Some(token),
            AuthStatus::Failed(_) => None,
        }
    }
}

// Struct for handling authentication logic
#[derive(Clone)]
pub struct DeviceAuthHandler {
    client: Arc<Client>,
    config: TraktConfig,
    token_store: TokenStore,
    notifier: Option<Arc<dyn Notifier>>,
}

impl DeviceAuthHandler {
    pub fn new(client: Arc<Client>, config: TraktConfig, token_store: TokenStore) -> Self {
        DeviceAuthHandler {
            client,
            config,
            token_store,
            notifier: None,
        }
    }

    /// Announce through `notifier` when interactive authentication starts.
    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    /// Return the cached token, or run the device-code flow to obtain one.
    ///
    /// Transport failures and a refused device-code request are errors.
    /// A rejected or expired authorization is reported as
    /// [`AuthStatus::Failed`] and leaves the token store untouched.
    pub async fn authenticate(&self) -> Result<AuthStatus> {
        if let Some(token) = self.token_store.load()? {
            info!(
                "Using cached token from {}",
                self.token_store.path().display()
            );
            return Ok(AuthStatus::Authenticated(token));
        }

        self.announce_authentication_required().await;

        let grant = self.get_device_code().await?;
        present_device_code(&grant);

        let status = self.poll_for_token(&grant).await?;
        if let AuthStatus::Authenticated(token) = &status {
            self.token_store.save(token)?;
            debug!("Token: {}", mask_token(token));
        }
        Ok(status)
    }

    async fn announce_authentication_required(&self) {
        let Some(notifier) = &self.notifier else {
            return;
        };
        if let Err(e) = notifier.send(AUTH_REQUIRED_MESSAGE).await {
            warn!("Failed to announce pending authentication: {}", e);
        }
    }

    pub(crate) async fn get_device_code(&self) -> Result<DeviceCodeGrant> {
        let body = DeviceCodeRequest {
            client_id: &self.config.client_id,
        };
        let response = execute_request(
            &self.client,
            &self.config,
            Method::POST,
            "/oauth/device/code",
            None,
            Some(&body),
        )
        .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(TraktError::Api { status, message });
        }

        Ok(response.json::<DeviceCodeGrant>().await?)
    }

    /// Poll the token endpoint every `interval` seconds until the user acts
    /// or the grant expires. The deadline is checked before each request,
    /// so no poll is sent once `expires_in` has elapsed.
    pub(crate) async fn poll_for_token(&self, grant: &DeviceCodeGrant) -> Result<AuthStatus> {
        let body = TokenRequest {
            code: &grant.device_code,
            client_id: &self.config.client_id,
            client_secret: &self.config.client_secret,
        };

        let poll_interval = Duration::from_secs(grant.interval.max(1));
        let max_duration = Duration::from_secs(grant.expires_in);
        let start = Instant::now();

        print!("Waiting for authorization. ");
        std::io::stdout().flush().ok();

        loop {
            sleep(poll_interval).await;

            if start.elapsed() > max_duration {
                println!();
                warn!("Device code expired after {:?}", max_duration);
                return Ok(AuthStatus::Failed(AuthFailure::Expired));
            }

            let response = execute_request(
                &self.client,
                &self.config,
                Method::POST,
                "/oauth/device/token",
                None,
                Some(&body),
            )
            .await?;

            match response.status() {
                status if status.is_success() => {
                    let token_response = response.json::<AccessTokenResponse>().await?;
                    return match token_response.access_token {
                        Some(token) => {
                            println!("Authenticated!");
                            Ok(AuthStatus::Authenticated(token))
                        }
                        None => {
                            println!(
                                "\n{} : Authorization failed, please try again.",
                                status.as_u16()
                            );
                            warn!("Token response with status {} had no access_token", status);
                            Ok(AuthStatus::Failed(AuthFailure::Rejected(status)))
                        }
                    };
                }
                StatusCode::BAD_REQUEST => {
                    print!(". ");
                    std::io::stdout().flush().ok();
                }
                status => {
                    println!(
                        "\n{} : Authorization failed, please try again.",
                        status.as_u16()
                    );
                    return Ok(AuthStatus::Failed(AuthFailure::Rejected(status)));
                }
            }
        }
    }
}
