//! Application configuration management
//!
//! This module handles loading and validating configuration from TOML files.
//! Every section is optional; missing values fall back to the defaults below.

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Default request timeout in seconds
const DEFAULT_REQUEST_TIMEOUT: u64 = 30;

/// Config file looked up when `CONFIG_PATH` is not set
const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServiceConfig {
    /// Replaces the scheme and host of every endpoint when set
    #[serde(default)]
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RequestConfig {
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_request_timeout() -> u64 {
    DEFAULT_REQUEST_TIMEOUT
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            request_timeout: default_request_timeout(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub request: RequestConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Converter configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL override, without endpoint paths. `None` uses the
    /// published URL of each endpoint.
    pub base_url: Option<String>,

    /// Request timeout in seconds
    pub request_timeout: u64,

    /// Logging level
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_toml(TomlConfig::default())
    }
}

impl Config {
    fn from_toml(config: TomlConfig) -> Self {
        Config {
            base_url: config.service.base_url,
            request_timeout: config.request.request_timeout,
            log_level: config.logging.log_level,
        }
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: TomlConfig =
            toml::from_str(content).context("Failed to parse TOML configuration")?;

        // Reject bad values at load
        let config = Self::from_toml(config);
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from TOML file
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The TOML file cannot be read or parsed
    /// - Configuration values are invalid
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file {}", path.display()))?;
        Self::from_toml_str(&content)
    }

    /// Load configuration from environment and config file
    ///
    /// Reads the file named by `CONFIG_PATH`, or config.toml in the current
    /// directory. Only the implicit config.toml may be absent, in which case
    /// defaults are used.
    pub fn from_env() -> Result<Self> {
        match std::env::var("CONFIG_PATH") {
            // An explicit path must exist
            Ok(path) => Self::from_file(path),
            Err(_) if Path::new(DEFAULT_CONFIG_PATH).exists() => {
                Self::from_file(DEFAULT_CONFIG_PATH)
            }
            // No file at all: run with built-in defaults
            Err(_) => Ok(Self::default()),
        }
    }

    /// Check values that would otherwise only fail at request time
    pub fn validate(&self) -> Result<()> {
        if let Some(base_url) = &self.base_url {
            if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
                bail!("Invalid base_url {:?}: must start with http:// or https://", base_url);
            }
        }
        if self.request_timeout == 0 {
            bail!("request_timeout must be greater than zero");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_test_config() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
            [service]
            base_url = "https://www.chemspider.com"

            [request]
            request_timeout = 5

            [logging]
            log_level = "debug"
        "#
        )
        .unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_config() {
        let file = create_test_config();
        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.base_url.as_deref(), Some("https://www.chemspider.com"));
        assert_eq!(config.request_timeout, 5);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.base_url, None);
        assert_eq!(config.request_timeout, DEFAULT_REQUEST_TIMEOUT);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_partial_section() {
        let config = Config::from_toml_str("[request]\nrequest_timeout = 12\n").unwrap();
        assert_eq!(config.request_timeout, 12);
        assert_eq!(config.base_url, None);
    }

    #[test]
    fn test_rejects_invalid_base_url() {
        let err = Config::from_toml_str("[service]\nbase_url = \"ftp://example.org\"\n")
            .unwrap_err();
        assert!(err.to_string().contains("base_url"));
    }

    #[test]
    fn test_rejects_zero_timeout() {
        assert!(Config::from_toml_str("[request]\nrequest_timeout = 0\n").is_err());
    }

    #[test]
    fn test_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Config::from_file(dir.path().join("absent.toml")).is_err());
    }
}
