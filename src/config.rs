use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {name}: {message}")]
    InvalidValue { name: String, message: String },
    #[error("failed to parse {name} as integer: {source}")]
    ParseInt {
        name: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("failed to parse {name} as boolean: {value}")]
    ParseBool { name: String, value: String },
}

/// Application configuration loaded from environment variables.
///
/// Read once at startup and shared immutably (behind an `Arc`) with the
/// components that need it.
#[derive(Debug, Clone)]
pub struct Config {
    // Public address (used to build example links on the welcome page)
    pub protocol: String,
    pub domain: String,
    pub external_port: u16,

    // Web Server
    pub web_host: String,
    pub web_port: u16,

    // Caching
    /// TTL of rendered cards, keyed by base URL + timestamp.
    pub cache_timeout: Duration,
    /// TTL of fetched feed documents, keyed by URL.
    pub cache_file_timeout: Duration,

    // Remote fetch
    pub fetch_timeout: Duration,

    // Mode
    pub debug: bool,
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is present but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            protocol: env_or_default("PROTOCOL", "http").to_lowercase(),
            domain: env_or_default("DOMAIN", "localhost"),
            external_port: parse_env_u16("EXTERNAL_PORT", 8080)?,

            web_host: env_or_default("WEB_HOST", "0.0.0.0"),
            web_port: parse_env_u16("WEB_PORT", 8080)?,

            cache_timeout: Duration::from_secs(parse_env_u64("CACHE_TIMEOUT", 30)?),
            cache_file_timeout: Duration::from_secs(parse_env_u64("CACHE_FILE_TIMEOUT", 30)?),

            fetch_timeout: Duration::from_secs(parse_env_u64("FETCH_TIMEOUT_SECS", 10)?),

            debug: parse_env_bool("DEBUG", false)?,
            environment: env_or_default("APP_ENV", "production").to_lowercase(),
        })
    }

    /// Configuration with defaults and no environment access, for tests.
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            protocol: "http".to_string(),
            domain: "localhost".to_string(),
            external_port: 8080,
            web_host: "127.0.0.1".to_string(),
            web_port: 0,
            cache_timeout: Duration::from_secs(30),
            cache_file_timeout: Duration::from_secs(30),
            fetch_timeout: Duration::from_secs(5),
            debug: false,
            environment: "test".to_string(),
        }
    }

    /// Validate that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.protocol != "http" && self.protocol != "https" {
            return Err(ConfigError::InvalidValue {
                name: "PROTOCOL".to_string(),
                message: format!("must be 'http' or 'https', got '{}'", self.protocol),
            });
        }
        if self.domain.is_empty() {
            return Err(ConfigError::InvalidValue {
                name: "DOMAIN".to_string(),
                message: "cannot be empty".to_string(),
            });
        }
        if self.fetch_timeout.is_zero() {
            return Err(ConfigError::InvalidValue {
                name: "FETCH_TIMEOUT_SECS".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Whether the external port belongs in public links.
    ///
    /// Only debug and development deployments expose it; production sits
    /// behind a proxy on the default port.
    #[must_use]
    pub fn show_port(&self) -> bool {
        self.debug || self.environment == "development"
    }

    /// Public base URL of this service, without a trailing slash.
    #[must_use]
    pub fn public_url(&self) -> String {
        if self.show_port() {
            format!("{}://{}:{}", self.protocol, self.domain, self.external_port)
        } else {
            format!("{}://{}", self.protocol, self.domain)
        }
    }
}

fn env_or_default(name: &str, default: &str) -> String {
    std::env::var(name)
        .ok()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn parse_env_u64(name: &str, default: u64) -> Result<u64, ConfigError> {
    match std::env::var(name) {
        Ok(val) if !val.is_empty() => val.trim().parse().map_err(|e| ConfigError::ParseInt {
            name: name.to_string(),
            source: e,
        }),
        _ => Ok(default),
    }
}

fn parse_env_u16(name: &str, default: u16) -> Result<u16, ConfigError> {
    match std::env::var(name) {
        Ok(val) if !val.is_empty() => val.trim().parse().map_err(|e| ConfigError::ParseInt {
            name: name.to_string(),
            source: e,
        }),
        _ => Ok(default),
    }
}

fn parse_env_bool(name: &str, default: bool) -> Result<bool, ConfigError> {
    match std::env::var(name) {
        Ok(val) if !val.is_empty() => parse_bool(&val).ok_or(ConfigError::ParseBool {
            name: name.to_string(),
            value: val,
        }),
        _ => Ok(default),
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "t" | "1" | "yes" | "on" => Some(true),
        "false" | "f" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
