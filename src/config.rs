//! Application configuration loaded from environment variables.

use serde::Deserialize;
use url::Url;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Datastore ===
    /// Base URL of the datastore service API.
    #[serde(default = "default_datastore_url")]
    pub datastore_url: String,

    // === Outbound HTTP ===
    /// Per-request timeout for datastore calls in milliseconds.
    #[serde(default = "default_http_timeout_ms")]
    pub http_timeout_ms: u64,

    /// Connection establishment timeout in milliseconds.
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,

    /// Idle connections kept per host.
    #[serde(default = "default_pool_size")]
    pub http_pool_size: usize,

    // === Logging ===
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub rust_log: String,
}

fn default_datastore_url() -> String {
    "http://cmpt756db:30002/api/v1/datastore".to_string()
}

fn default_http_timeout_ms() -> u64 {
    5_000
}

fn default_connect_timeout_ms() -> u64 {
    500
}

fn default_pool_size() -> usize {
    10
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<(), String> {
        if self.datastore_url.is_empty() {
            return Err("DATASTORE_URL is required".to_string());
        }

        let url = Url::parse(&self.datastore_url)
            .map_err(|e| format!("DATASTORE_URL is not a valid URL: {e}"))?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err("DATASTORE_URL must use http or https".to_string());
        }

        if self.http_timeout_ms == 0 {
            return Err("HTTP_TIMEOUT_MS must be greater than 0".to_string());
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            datastore_url: default_datastore_url(),
            http_timeout_ms: default_http_timeout_ms(),
            connect_timeout_ms: default_connect_timeout_ms(),
            http_pool_size: default_pool_size(),
            rust_log: default_log_level(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values_are_sensible() {
        let config = Config::default();
        assert_eq!(config.datastore_url, "http://cmpt756db:30002/api/v1/datastore");
        assert_eq!(config.http_timeout_ms, 5_000);
        assert_eq!(config.http_pool_size, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_datastore_url() {
        let config = Config {
            datastore_url: "".to_string(),
            ..Config::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_non_http_scheme() {
        let config = Config {
            datastore_url: "ftp://cmpt756db:30002/api/v1/datastore".to_string(),
            ..Config::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_timeout() {
        let config = Config {
            http_timeout_ms: 0,
            ..Config::default()
        };

        assert!(config.validate().is_err());
    }
}
