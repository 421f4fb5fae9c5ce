//! Client settings
//!
//! Settings can be loaded from a YAML or JSON file and then overridden by
//! command-line flags or environment variables.
//!
//! ```yaml
//! base_url: http://paperless.local:8000
//! token: 0123456789abcdef
//! timeout_secs: 30
//! ```

use crate::error::{Error, Result};
use crate::types::OptionStringExt;
use serde::Deserialize;
use std::fmt;
use std::path::Path;

/// Connection settings for a Paperless server
#[derive(Clone, Deserialize)]
pub struct ClientSettings {
    /// Server root, without the `/api` suffix
    #[serde(default)]
    pub base_url: String,

    /// API token
    #[serde(default)]
    pub token: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// API version requested in the `Accept` header
    #[serde(default = "default_api_version")]
    pub api_version: u32,
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_api_version() -> u32 {
    5
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            token: String::new(),
            timeout_secs: default_timeout_secs(),
            api_version: default_api_version(),
        }
    }
}

impl ClientSettings {
    /// Settings for a server and token, other values at their defaults
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: token.into(),
            ..Self::default()
        }
    }

    /// Load settings from a file; `.json` files are parsed as JSON,
    /// everything else as YAML.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_yaml_str(&content)
        }
    }

    /// Parse settings from YAML
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Parse settings from JSON
    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Replace the URL and token with any non-empty override
    #[must_use]
    pub fn with_overrides(mut self, base_url: Option<String>, token: Option<String>) -> Self {
        if let Some(url) = base_url.none_if_empty() {
            self.base_url = url;
        }
        if let Some(token) = token.none_if_empty() {
            self.token = token;
        }
        self
    }

    /// Check that the settings can produce a working client
    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(Error::missing_field("base_url"));
        }
        if self.token.trim().is_empty() {
            return Err(Error::missing_field("token"));
        }
        if self.timeout_secs == 0 {
            return Err(Error::config("timeout_secs must be greater than zero"));
        }

        let url = url::Url::parse(&self.base_url)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::config(format!(
                "unsupported URL scheme '{}'",
                url.scheme()
            )));
        }
        Ok(())
    }
}

impl fmt::Debug for ClientSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientSettings")
            .field("base_url", &self.base_url)
            .field("token", &"***")
            .field("timeout_secs", &self.timeout_secs)
            .field("api_version", &self.api_version)
            .finish()
    }
}
