//! Configuration System
//!
//! Client configuration parsed from TOML, with named overrides applied on
//! top (environment variables natively, build-time values in the browser).

use serde::Deserialize;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// REST API connection settings
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8000/api";

fn default_base_url() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

/// Keys used for the persisted session entries
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct StorageConfig {
    #[serde(default = "default_token_key")]
    pub token_key: String,

    #[serde(default = "default_user_key")]
    pub user_key: String,
}

fn default_token_key() -> String {
    "token".to_string()
}

fn default_user_key() -> String {
    "user".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            token_key: default_token_key(),
            user_key: default_user_key(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Override variable for the API base URL
pub const API_URL_VAR: &str = "OCTOFIT_API_URL";
/// Override variable for the native request timeout (seconds)
pub const API_TIMEOUT_VAR: &str = "OCTOFIT_API_TIMEOUT_SECS";
/// Override variable for the log filter
pub const LOG_LEVEL_VAR: &str = "OCTOFIT_LOG_LEVEL";

impl Config {
    /// Parse configuration from TOML text; missing sections keep defaults
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply overrides by variable name.
    ///
    /// `lookup` is `std::env::var` natively, build-time values in the browser.
    /// Blank or unparsable values are ignored.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let set = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(url) = set(API_URL_VAR) {
            self.api.base_url = url;
        }
        if let Some(timeout) = set(API_TIMEOUT_VAR).and_then(|t| t.trim().parse().ok()) {
            self.api.request_timeout_secs = timeout;
        }
        if let Some(level) = set(LOG_LEVEL_VAR) {
            self.logging.level = level;
        }
    }

    /// Base URL without trailing slashes
    pub fn api_base(&self) -> &str {
        self.api.base_url.trim_end_matches('/')
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to parse config: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.api.base_url, "http://localhost:8000/api");
        assert_eq!(config.api.request_timeout_secs, 30);
        assert_eq!(config.storage.token_key, "token");
        assert_eq!(config.storage.user_key, "user");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_full_config_parses() {
        let config = Config::from_toml_str(
            r#"
            [api]
            base_url = "https://octofit.example.com/api"
            request_timeout_secs = 10

            [storage]
            token_key = "octofit_token"
            user_key = "octofit_user"

            [logging]
            level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.api.request_timeout_secs, 10);
        assert_eq!(config.storage.token_key, "octofit_token");
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = Config::from_toml_str(
            r#"
            [api]
            base_url = "https://octofit.example.com/api/"
            "#,
        )
        .unwrap();

        assert_eq!(config.api_base(), "https://octofit.example.com/api");
        assert_eq!(config.api.request_timeout_secs, 30);
        assert_eq!(config.storage, StorageConfig::default());
    }

    #[test]
    fn test_invalid_toml() {
        let err = Config::from_toml_str("[api\nbase_url = 1").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_overrides_replace_values() {
        let mut config = Config::default();
        config.apply_overrides(vars(&[
            (API_URL_VAR, "https://api.octofit.dev/api/"),
            (API_TIMEOUT_VAR, "5"),
            (LOG_LEVEL_VAR, "octofit=debug"),
        ]));

        assert_eq!(config.api_base(), "https://api.octofit.dev/api");
        assert_eq!(config.api.request_timeout_secs, 5);
        assert_eq!(config.logging.level, "octofit=debug");
    }

    #[test]
    fn test_blank_or_invalid_overrides_are_ignored() {
        let mut config = Config::default();
        config.apply_overrides(vars(&[
            (API_URL_VAR, "  "),
            (API_TIMEOUT_VAR, "soon"),
        ]));
        assert_eq!(config, Config::default());
    }
}
