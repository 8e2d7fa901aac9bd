//! Backoffice API client
//!
//! Two client types split the API by authentication requirement:
//! [`PublicApiClient`] for the sign-in flows and [`AuthenticatedApiClient`]
//! for everything behind the session token. Both are built from the
//! process-wide [`ApiConfig`].

pub mod admin;
pub mod auth;
pub mod error;
pub mod typed;

pub use error::ClientError;
pub use typed::{AuthenticatedApiClient, PublicApiClient};

use backoffice_core::ApiConfig;
use reqwest::{Client, ClientBuilder};
use std::time::Duration;

const USER_AGENT: &str = "backoffice-client/0.1.0";

/// Builder that creates the appropriate client type
pub struct ApiClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    config: Option<ApiConfig>,
}

impl ApiClientBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            base_url: None,
            timeout: None,
            config: None,
        }
    }

    /// Take base URL, timeout and auth header layout from the API config
    pub fn from_config(config: &ApiConfig) -> Self {
        Self {
            base_url: Some(config.base_url.clone()),
            timeout: Some(config.timeout()),
            config: Some(config.clone()),
        }
    }

    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    fn into_parts(self) -> Result<(Client, ApiConfig), ClientError> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::Configuration("base_url is required".into()))?;
        let base_url = base_url.trim_end_matches('/').to_string();

        let mut config = self.config.unwrap_or_else(|| ApiConfig::new(String::new()));
        config.base_url = base_url;

        Ok((build_http_client(self.timeout)?, config))
    }

    /// Build a public client
    pub fn build_public(self) -> Result<PublicApiClient, ClientError> {
        let (client, config) = self.into_parts()?;
        Ok(PublicApiClient::from_parts(client, config))
    }

    /// Build an authenticated client
    pub fn build_authenticated(
        self,
        token: impl Into<String>,
    ) -> Result<AuthenticatedApiClient, ClientError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(ClientError::Configuration(
                "an auth token is required".into(),
            ));
        }
        let (client, config) = self.into_parts()?;
        Ok(AuthenticatedApiClient::from_parts(client, config, token))
    }
}

impl Default for ApiClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn build_http_client(timeout: Option<Duration>) -> Result<Client, ClientError> {
    #[cfg(not(target_arch = "wasm32"))]
    let client = {
        let mut builder = ClientBuilder::new().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        builder.build()?
    };

    #[cfg(target_arch = "wasm32")]
    let client = {
        let _ = timeout; // Timeouts not supported on WASM
        ClientBuilder::new().user_agent(USER_AGENT).build()?
    };

    Ok(client)
}

/// Send a request and decode a JSON body, mapping error statuses
async fn execute<T: serde::de::DeserializeOwned>(
    request: reqwest::RequestBuilder,
) -> Result<T, ClientError> {
    let response = request.send().await?;
    let status = response.status();

    if status.is_success() {
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    } else {
        let message = response.text().await.unwrap_or_else(|_| status.to_string());
        tracing::debug!(status = status.as_u16(), "API request failed");
        Err(ClientError::from_status(status, error_message(&message)))
    }
}

/// Prefer the `message` (or `error`) field of a JSON error body
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            ["message", "error"]
                .iter()
                .find_map(|key| value.get(key).and_then(|v| v.as_str()).map(str::to_string))
        })
        .unwrap_or_else(|| body.to_string())
}
