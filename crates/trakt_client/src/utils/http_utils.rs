use std::error::Error;

use log::{debug, error, info};
use reqwest::{Client, Method, Response};
use serde::Serialize;

use crate::config::{TraktConfig, API_VERSION};
use crate::error::Result;
use crate::masking::mask_token;

/// Executes a request against the Trakt API.
///
/// JSON bodies are sent with `Content-Type: application/json`. When
/// `auth_token` is given the request also carries the bearer token and the
/// `trakt-api-version`/`trakt-api-key` headers the authenticated endpoints
/// require. Non-2xx responses are returned as-is; callers decide what a
/// status means for them.
pub async fn execute_request<T: Serialize + ?Sized>(
    client: &Client,
    config: &TraktConfig,
    method: Method,
    path: &str,
    auth_token: Option<&str>,
    json_body: Option<&T>,
) -> Result<Response> {
    let url = config.url(path);
    let mut request_builder = client
        .request(method.clone(), &url)
        .header("Content-Type", "application/json");

    if let Some(token) = auth_token {
        debug!("Authorizing request with token {}", mask_token(token));
        request_builder = request_builder
            .bearer_auth(token)
            .header("trakt-api-version", API_VERSION)
            .header("trakt-api-key", &config.client_id);
    }

    if let Some(body) = json_body {
        request_builder = request_builder.json(body);
    }

    info!("Sending {} request to {}", method.as_str(), url);
    let start_time = std::time::Instant::now();

    match request_builder.send().await {
        Ok(resp) => {
            info!(
                "Got response from {} after {:?} with status {}",
                url,
                start_time.elapsed(),
                resp.status()
            );
            Ok(resp)
        }
        Err(e) => {
            error!("Failed HTTP request to {}: {}", url, e);
            if let Some(source) = e.source() {
                error!("Error source: {:?}", source);
            }
            if e.is_timeout() {
                error!("Request timed out");
            }
            if e.is_connect() {
                error!("Connection error");
            }
            Err(e.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn authenticated_request_carries_api_headers() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/calendars/my/shows/2024-01-01/1"))
            .and(header("Authorization", "Bearer T1"))
            .and(header("trakt-api-version", "2"))
            .and(header("trakt-api-key", "client-id"))
            .and(header("Content-Type", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
            .expect(1)
            .mount(&server)
            .await;

        let config = TraktConfig::new("client-id", "secret").with_api_root(&server.uri());
        let response = execute_request::<()>(
            &Client::new(),
            &config,
            Method::GET,
            "/calendars/my/shows/2024-01-01/1",
            Some("T1"),
            None,
        )
        .await
        .expect("response");

        assert!(response.status().is_success());
    }

    #[tokio::test]
    async fn error_statuses_are_returned_not_raised() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/oauth/device/code"))
            .and(body_json(serde_json::json!({ "client_id": "client-id" })))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;

        let config = TraktConfig::new("client-id", "secret").with_api_root(&server.uri());
        let body = serde_json::json!({ "client_id": "client-id" });
        let response = execute_request(
            &Client::new(),
            &config,
            Method::POST,
            "/oauth/device/code",
            None,
            Some(&body),
        )
        .await
        .expect("response");

        assert_eq!(response.status().as_u16(), 500);
    }
}
