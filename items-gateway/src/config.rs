//! Process configuration read from environment variables.
//!
//! | Variable            | Meaning                                   |
//! |---------------------|-------------------------------------------|
//! | `ITEMS_LISTEN_ADDR` | Full `ip:port` to bind.                   |
//! | `PORT`              | Port on `0.0.0.0`, used when the above is unset. |
//! | `ITEMS_LOG_FORMAT`  | `compact` (default) or `json`.            |

use std::{
    net::{AddrParseError, Ipv4Addr, SocketAddr},
    num::ParseIntError,
    str::FromStr,
};

/// Port bound when neither `ITEMS_LISTEN_ADDR` nor `PORT` is set.
pub const DEFAULT_PORT: u16 = 3000;

/// Errors raised while reading configuration.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// `ITEMS_LISTEN_ADDR` is not a valid `ip:port` pair.
    #[error("invalid ITEMS_LISTEN_ADDR '{value}': {source}")]
    InvalidListenAddr {
        value: String,
        #[source]
        source: AddrParseError,
    },

    /// `PORT` is not a valid TCP port number.
    #[error("invalid PORT '{value}': {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// `ITEMS_LOG_FORMAT` names an unsupported formatter.
    #[error("unknown log format '{0}'; expected 'compact' or 'json'")]
    UnknownLogFormat(String),
}

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable single-line output.
    #[default]
    Compact,
    /// One JSON object per event, for log collectors.
    Json,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "compact" | "" => Ok(LogFormat::Compact),
            "json" => Ok(LogFormat::Json),
            _ => Err(ConfigError::UnknownLogFormat(raw.to_owned())),
        }
    }
}

/// Runtime settings for the gateway binary.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct GatewayConfig {
    /// Socket address the HTTP listener binds to.
    pub listen_addr: SocketAddr,
    /// Formatter used for log output.
    pub log_format: LogFormat,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_PORT)),
            log_format: LogFormat::default(),
        }
    }
}

impl GatewayConfig {
    /// Read configuration from the process environment.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] if any variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] if any variable is set to an invalid value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup("ITEMS_LISTEN_ADDR") {
            config.listen_addr = value
                .parse()
                .map_err(|source| ConfigError::InvalidListenAddr { value, source })?;
        } else if let Some(value) = lookup("PORT") {
            let port: u16 = value
                .trim()
                .parse()
                .map_err(|source| ConfigError::InvalidPort { value, source })?;
            config.listen_addr.set_port(port);
        }

        if let Some(value) = lookup("ITEMS_LOG_FORMAT") {
            config.log_format = value.parse()?;
        }

        Ok(config)
    }
}
