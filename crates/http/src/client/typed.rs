//! Type-safe API clients that enforce authentication requirements at compile time

use super::{ApiClientBuilder, ClientError, execute};
use backoffice_core::ApiConfig;
use reqwest::{Client, header};

/// Client for public endpoints that don't require authentication
#[derive(Clone)]
pub struct PublicApiClient {
    client: Client,
    config: ApiConfig,
}

/// Client for endpoints behind the session token
#[derive(Clone)]
pub struct AuthenticatedApiClient {
    client: Client,
    config: ApiConfig,
    token: String,
}

impl PublicApiClient {
    /// Create a new public client
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        ApiClientBuilder::new().base_url(base_url).build_public()
    }

    pub(super) fn from_parts(client: Client, config: ApiConfig) -> Self {
        Self { client, config }
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Create a request builder without authentication
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.config.base_url, path);
        self.client
            .request(method, url)
            .header(header::ACCEPT, self.config.content_type_json)
    }

    /// Execute a request and handle common errors
    pub async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        execute(request).await
    }
}

impl AuthenticatedApiClient {
    /// Create a new authenticated client
    pub fn new(
        base_url: impl Into<String>,
        token: impl Into<String>,
    ) -> Result<Self, ClientError> {
        ApiClientBuilder::new()
            .base_url(base_url)
            .build_authenticated(token)
    }

    pub(super) fn from_parts(client: Client, config: ApiConfig, token: String) -> Self {
        Self {
            client,
            config,
            token,
        }
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Create a request builder with authentication
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.config.base_url, path);
        self.client
            .request(method, url)
            .header(header::ACCEPT, self.config.content_type_json)
            .header(
                self.config.auth_header,
                self.config.authorization_value(&self.token),
            )
    }

    /// Execute a request and handle common errors
    pub async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        execute(request).await
    }
}
