//! Client configuration
//!
//! [`ClientConfig`] is the on-disk (YAML) form of the settings used to build
//! the default HTTP transport. Every field is optional; environment
//! variables override the file.
//!
//! ```yaml
//! base_url: https://api.twitch.tv/kraken
//! client_id: abc123
//! timeout_seconds: 10
//! headers:
//!   X-Trace: "1"
//! ```

use crate::error::{Error, Result};
use crate::http::{HttpClientConfig, API_BASE_URL, V2_MEDIA_TYPE};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::debug;

/// Overrides [`ClientConfig::base_url`]
pub const ENV_BASE_URL: &str = "TWITCH_API_BASE_URL";

/// Overrides [`ClientConfig::client_id`]
pub const ENV_CLIENT_ID: &str = "TWITCH_CLIENT_ID";

// ============================================================================
// Client Config
// ============================================================================

/// Settings for the default transport
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClientConfig {
    /// API root every request path is joined onto
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Application client id, sent as `Client-ID`
    #[serde(default)]
    pub client_id: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    /// `Accept` media type (selects the API version)
    #[serde(default = "default_accept")]
    pub accept: String,

    /// Custom user agent
    #[serde(default)]
    pub user_agent: Option<String>,

    /// Extra headers sent with every request
    #[serde(default)]
    pub headers: HashMap<String, String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            client_id: None,
            timeout_seconds: default_timeout(),
            accept: default_accept(),
            user_agent: None,
            headers: HashMap::new(),
        }
    }
}

fn default_base_url() -> String {
    API_BASE_URL.to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_accept() -> String {
    V2_MEDIA_TYPE.to_string()
}

impl ClientConfig {
    /// Load a YAML config file and apply environment overrides
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            Error::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        debug!("Loaded client config from {}", path.display());
        Ok(Self::from_yaml_str(&content)?.with_env_overrides())
    }

    /// Parse a YAML document. Environment overrides are not applied.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `TWITCH_API_BASE_URL` / `TWITCH_CLIENT_ID` from the process
    /// environment
    #[must_use]
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup. Empty values are
    /// ignored.
    #[must_use]
    pub fn with_overrides_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(base_url) = value(ENV_BASE_URL) {
            debug!("{ENV_BASE_URL} overrides base_url");
            self.base_url = base_url;
        }
        if let Some(client_id) = value(ENV_CLIENT_ID) {
            self.client_id = Some(client_id);
        }
        self
    }

    /// Check the values that serde cannot
    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(Error::config("base_url must not be empty"));
        }
        if self.timeout_seconds == 0 {
            return Err(Error::config("timeout_seconds must be greater than 0"));
        }
        Ok(())
    }

    /// Convert to the transport's configuration
    pub fn to_http_config(&self) -> HttpClientConfig {
        let mut builder = HttpClientConfig::builder()
            .base_url(&self.base_url)
            .timeout(Duration::from_secs(self.timeout_seconds))
            .accept(&self.accept);

        if let Some(client_id) = &self.client_id {
            builder = builder.client_id(client_id);
        }
        if let Some(user_agent) = &self.user_agent {
            builder = builder.user_agent(user_agent);
        }
        for (key, value) in &self.headers {
            builder = builder.header(key, value);
        }

        builder.build()
    }
}
