//! Configuration for the email check service.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::time::Duration;

/// Service configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Outbound probe configuration
    #[serde(default)]
    pub probe: ProbeConfig,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Rate limiting configuration
    #[serde(default)]
    pub rate_limit: RateLimitConfig,

    /// Logging configuration
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProbeConfig {
    /// gxlu endpoint URL
    #[serde(default = "default_endpoint_url")]
    pub endpoint_url: String,

    /// Timeout for each outbound probe
    #[serde(default = "default_probe_timeout", with = "humantime_serde")]
    pub timeout: Duration,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Server listen address
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitConfig {
    /// Global requests per minute, 0 disables the limiter
    #[serde(default)]
    pub global_per_minute: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format
    #[serde(default)]
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            endpoint_url: default_endpoint_url(),
            timeout: default_probe_timeout(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            port: default_port(),
        }
    }
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            global_per_minute: 0,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

// Default value functions
fn default_endpoint_url() -> String {
    gxlu_client::DEFAULT_ENDPOINT.into()
}

fn default_probe_timeout() -> Duration {
    gxlu_client::DEFAULT_TIMEOUT
}

fn default_listen_addr() -> String {
    "0.0.0.0".into()
}

fn default_port() -> u16 {
    8000
}

fn default_log_level() -> String {
    "info".into()
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        Self::from_source(
            config::Environment::default()
                .separator("__")
                .try_parsing(false),
        )
    }

    fn from_source<S>(source: S) -> Result<Self>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let config = config::Config::builder()
            .add_source(source)
            .build()
            .context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> config::Environment {
        let source: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        config::Environment::default()
            .separator("__")
            .try_parsing(false)
            .source(Some(source))
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_source(env(&[])).unwrap();

        assert_eq!(config.probe.endpoint_url, "https://mail.google.com/mail/gxlu");
        assert_eq!(config.probe.timeout, Duration::from_secs(10));
        assert_eq!(config.server.listen_addr, "0.0.0.0");
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.rate_limit.global_per_minute, 0);
        assert_eq!(config.log.level, "info");
        assert_eq!(config.log.format, LogFormat::Pretty);
    }

    #[test]
    fn test_environment_overrides() {
        let config = Config::from_source(env(&[
            ("SERVER__PORT", "9090"),
            ("PROBE__ENDPOINT_URL", "http://localhost:1234/gxlu"),
            ("PROBE__TIMEOUT", "2s 500ms"),
            ("RATE_LIMIT__GLOBAL_PER_MINUTE", "30"),
            ("LOG__FORMAT", "json"),
        ]))
        .unwrap();

        assert_eq!(config.server.port, 9090);
        assert_eq!(config.probe.endpoint_url, "http://localhost:1234/gxlu");
        assert_eq!(config.probe.timeout, Duration::from_millis(2500));
        assert_eq!(config.rate_limit.global_per_minute, 30);
        assert_eq!(config.log.format, LogFormat::Json);
    }

    #[test]
    fn test_invalid_timeout_rejected() {
        let result = Config::from_source(env(&[("PROBE__TIMEOUT", "soon")]));
        assert!(result.is_err());
    }
}
