//! # Client configuration — `taskdesk.toml`
//!
//! The backend root differs between deployments (`http://<host>:<port>/api`
//! behind the reverse proxy, `http://<host>:<port>` when talking to the API
//! process directly), so it is configuration rather than a constant.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:8000/api"
//!
//! [session]
//! key_prefix = ""      # namespace for persisted session keys
//! ```
//!
//! All sections derive `Default`, so a missing or empty file is equivalent to
//! the default configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("api.base_url must be an http(s) URL, got {0:?}")]
    InvalidBaseUrl(String),
}

/// Top-level configuration stored in `taskdesk.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

/// Backend connection settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Root every resource path is appended to. Trailing slashes are ignored.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default)]
    pub key_prefix: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api: ApiConfig {
                base_url: base_url.into(),
            },
            session: SessionConfig::default(),
        }
    }

    /// Builder method to namespace persisted session keys.
    pub fn with_key_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.session.key_prefix = prefix.into();
        self
    }

    pub fn filename() -> &'static str {
        "taskdesk.toml"
    }

    /// Parse and validate from a TOML string.
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.api.base_url.trim();
        if url.starts_with("http://") || url.starts_with("https://") {
            Ok(())
        } else {
            Err(ConfigError::InvalidBaseUrl(self.api.base_url.clone()))
        }
    }

    /// Base URL without trailing slashes.
    pub fn base_url(&self) -> &str {
        self.api.base_url.trim().trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        let config = ClientConfig::from_toml("").unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert_eq!(config.session.key_prefix, "");
    }

    #[test]
    fn test_parse_full_config() {
        let config = ClientConfig::from_toml(
            r#"
            [api]
            base_url = "http://10.0.0.5:8000/"

            [session]
            key_prefix = "taskdesk."
            "#,
        )
        .unwrap();
        assert_eq!(config.base_url(), "http://10.0.0.5:8000");
        assert_eq!(config.session.key_prefix, "taskdesk.");
    }

    #[test]
    fn test_rejects_non_http_base_url() {
        let err = ClientConfig::from_toml("[api]\nbase_url = \"localhost:8000\"").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBaseUrl(_)));
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = ClientConfig::new("https://tasks.example.com/api").with_key_prefix("td.");
        let text = config.to_toml().unwrap();
        assert_eq!(ClientConfig::from_toml(&text).unwrap(), config);
    }
}
