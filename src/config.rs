//! Configuration management for pin-dns.

use crate::error::{Error, Result};
use crate::ip::DEFAULT_IP_SERVICE;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Provider API base URL.
    #[serde(default)]
    pub endpoint: String,

    /// API token (or environment variable name if prefixed with $).
    #[serde(default)]
    pub api_token: String,

    /// IP echo service used when no destination is given.
    #[serde(default = "default_ip_service")]
    pub ip_service: String,

    /// HTTP timeout in seconds for both clients.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_ip_service() -> String {
    DEFAULT_IP_SERVICE.to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            api_token: String::new(),
            ip_service: default_ip_service(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Config {
    /// Get the default config file path.
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| Error::Config("Could not find config directory".to_string()))?;

        Ok(config_dir.join("pin-dns").join("config.toml"))
    }

    /// Load configuration from the default path.
    pub fn load() -> Result<Self> {
        let path = Self::default_path()?;
        Self::load_from(&path)
    }

    /// Load configuration from a specific path. A missing file yields the
    /// defaults.
    pub fn load_from(path: &PathBuf) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// API token with $ENV indirection resolved.
    pub fn resolved_api_token(&self) -> String {
        resolve_env(&self.api_token)
    }

    /// HTTP timeout for the IP and provider clients.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Generate example configuration.
    pub fn example() -> Self {
        Self {
            endpoint: "https://dns.example.net/v1".to_string(),
            api_token: "$PIN_DNS_TOKEN".to_string(),
            ip_service: default_ip_service(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Resolve environment variable references (values starting with $).
fn resolve_env(value: &str) -> String {
    if let Some(var_name) = value.strip_prefix('$') {
        std::env::var(var_name).unwrap_or_else(|_| {
            tracing::warn!("Environment variable {} not set", var_name);
            value.to_string()
        })
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.endpoint.is_empty());
        assert_eq!(config.ip_service, DEFAULT_IP_SERVICE);
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn test_parse_partial_config() {
        let config: Config = toml::from_str(
            r#"
            endpoint = "https://dns.example.net/v1"
            api_token = "secret"
            "#,
        )
        .unwrap();

        assert_eq!(config.endpoint, "https://dns.example.net/v1");
        assert_eq!(config.api_token, "secret");
        assert_eq!(config.ip_service, DEFAULT_IP_SERVICE);
    }

    #[test]
    fn test_load_from_missing_file_yields_defaults() {
        let path = PathBuf::from("/nonexistent/pin-dns/config.toml");
        let config = Config::load_from(&path).unwrap();
        assert!(config.endpoint.is_empty());
    }

    #[test]
    fn test_resolve_env_with_value() {
        assert_eq!(resolve_env("plain_value"), "plain_value");
    }

    #[test]
    fn test_resolve_env_with_existing_var() {
        std::env::set_var("TEST_PIN_DNS_VAR", "resolved_value");
        assert_eq!(resolve_env("$TEST_PIN_DNS_VAR"), "resolved_value");
        std::env::remove_var("TEST_PIN_DNS_VAR");
    }

    #[test]
    fn test_resolve_env_with_missing_var() {
        let result = resolve_env("$NONEXISTENT_VAR_12345");
        assert_eq!(result, "$NONEXISTENT_VAR_12345");
    }
}
