//! Default HTTP transport
//!
//! A thin reqwest wrapper that:
//! - Joins relative API paths onto a configured base URL
//! - Sends the v2 media type and optional Client-ID on every request
//! - Classifies responses into found / not found / error
//!
//! It performs exactly one request per call. Retries, rate limiting and
//! authentication are left to whoever wraps it.

use super::transport::{Fetched, Transport};
use crate::error::{Error, Result};
use crate::types::StringMap;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, trace};
use url::Url;

/// Root of the public API
pub const API_BASE_URL: &str = "https://api.twitch.tv/kraken";

/// Media type selecting version 2 of the API
pub const V2_MEDIA_TYPE: &str = "application/vnd.twitchtv.v2+json";

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Base URL for all requests
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
    /// Value of the `Accept` header
    pub accept: String,
    /// Application client id, sent as `Client-ID`
    pub client_id: Option<String>,
    /// Default headers for all requests
    pub default_headers: HashMap<String, String>,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            base_url: API_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            accept: V2_MEDIA_TYPE.to_string(),
            client_id: None,
            default_headers: HashMap::new(),
            user_agent: format!("twitch-client/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl HttpClientConfig {
    /// Create a new config builder
    pub fn builder() -> HttpClientConfigBuilder {
        HttpClientConfigBuilder::default()
    }
}

/// Builder for HTTP client config
#[derive(Default)]
pub struct HttpClientConfigBuilder {
    config: HttpClientConfig,
}

impl HttpClientConfigBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the `Accept` media type
    pub fn accept(mut self, media_type: impl Into<String>) -> Self {
        self.config.accept = media_type.into();
        self
    }

    /// Set the application client id
    pub fn client_id(mut self, client_id: impl Into<String>) -> Self {
        self.config.client_id = Some(client_id.into());
        self
    }

    /// Add a default header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(key.into(), value.into());
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> HttpClientConfig {
        self.config
    }
}

/// reqwest-backed [`Transport`]
pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
    base: Url,
}

impl HttpClient {
    /// Create a client for the public API with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(HttpClientConfig::default())
    }

    /// Create a client with custom configuration
    pub fn with_config(config: HttpClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        // A trailing slash makes `Url::join` append instead of replacing the
        // last path segment.
        let base = Url::parse(&format!("{}/", config.base_url.trim_end_matches('/')))?;

        Ok(Self {
            client,
            config,
            base,
        })
    }

    /// Get the client configuration
    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }

    /// Build the full URL for an API path
    pub fn build_url(&self, path: &str) -> Result<Url> {
        Ok(self.base.join(path.trim_start_matches('/'))?)
    }

    fn timeout_error(&self) -> Error {
        Error::Timeout {
            timeout_ms: self.config.timeout.as_millis() as u64,
        }
    }
}

#[async_trait]
impl Transport for HttpClient {
    async fn get(&self, path: &str, params: &StringMap) -> Result<Fetched> {
        let url = self.build_url(path)?;

        let mut req = self
            .client
            .get(url.clone())
            .header(reqwest::header::ACCEPT, self.config.accept.as_str());

        if let Some(client_id) = &self.config.client_id {
            req = req.header("Client-ID", client_id.as_str());
        }

        for (key, value) in &self.config.default_headers {
            req = req.header(key.as_str(), value.as_str());
        }

        if !params.is_empty() {
            req = req.query(params);
        }

        debug!("GET {url} {params:?}");

        let response = match req.send().await {
            Ok(response) => response,
            Err(e) if e.is_timeout() => return Err(self.timeout_error()),
            Err(e) => return Err(Error::Http(e)),
        };

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            debug!("GET {url} -> 404");
            return Ok(Fetched::NotFound);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::http_status(status.as_u16(), body));
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) if e.is_timeout() => return Err(self.timeout_error()),
            Err(e) => return Err(Error::Http(e)),
        };
        trace!("GET {url} -> {} bytes", body.len());

        let value = serde_json::from_str(&body)
            .map_err(|e| Error::decode(format!("Response from {url} is not JSON: {e}")))?;
        Ok(Fetched::Found(value))
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
