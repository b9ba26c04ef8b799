//! # Configuration
//!
//! Server configuration, loaded from the environment (and `.env` if present)
//! and then overridden by command-line flags.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `HOST` | `127.0.0.1` |
//! | `PORT` | `8080` |
//! | `LUHN_INPUT_POLICY` | `lenient` |
//! | `LOG_FORMAT` | `pretty` |
//! | `MAX_BODY_BYTES` | `16777216` |

use clap::Parser;
use luhn_core::InputPolicy;
use std::fmt;
use std::net::{SocketAddr, ToSocketAddrs};
use std::str::FromStr;
use thiserror::Error;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

/// Configuration errors raised at startup
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment variable holds a value that does not parse
    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },

    /// Host and port do not resolve to a bindable address
    #[error("Invalid socket address {address}: {message}")]
    InvalidAddress { address: String, message: String },
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Pretty,
    /// One JSON object per event
    Json,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Pretty => f.write_str("pretty"),
            LogFormat::Json => f.write_str("json"),
        }
    }
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(format!(
                "unknown log format '{}' (expected 'pretty' or 'json')",
                other
            )),
        }
    }
}

/// Command-line flags. Anything left unset falls back to the environment.
#[derive(Debug, Default, Parser)]
#[command(name = "luhn-check")]
#[command(version, about = "Credit card number validation over HTTP (Luhn checksum)")]
pub struct Cli {
    /// Port to listen on (shorthand for --port)
    #[arg(value_name = "PORT", conflicts_with = "port")]
    pub port_arg: Option<u16>,

    /// Host to bind to
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(long)]
    pub port: Option<u16>,

    /// How non-digit input is handled: lenient or strict
    #[arg(long)]
    pub policy: Option<InputPolicy>,

    /// Log output format: pretty or json
    #[arg(long)]
    pub log_format: Option<LogFormat>,

    /// Largest request body accepted, in bytes
    #[arg(long)]
    pub max_body_bytes: Option<usize>,
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Treatment of non-digit characters in card numbers
    pub policy: InputPolicy,
    /// Log output format
    pub log_format: LogFormat,
    /// Bodies larger than this are rejected as unreadable
    pub max_body_bytes: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            policy: InputPolicy::default(),
            log_format: LogFormat::default(),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl AppConfig {
    /// Load from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup; unset keys take their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: parse_var(&lookup, "PORT")?.unwrap_or(defaults.port),
            policy: parse_var(&lookup, "LUHN_INPUT_POLICY")?.unwrap_or(defaults.policy),
            log_format: parse_var(&lookup, "LOG_FORMAT")?.unwrap_or(defaults.log_format),
            max_body_bytes: parse_var(&lookup, "MAX_BODY_BYTES")?
                .unwrap_or(defaults.max_body_bytes),
        })
    }

    /// Apply command-line overrides
    pub fn with_cli(mut self, cli: Cli) -> Self {
        if let Some(host) = cli.host {
            self.host = host;
        }
        if let Some(port) = cli.port.or(cli.port_arg) {
            self.port = port;
        }
        if let Some(policy) = cli.policy {
            self.policy = policy;
        }
        if let Some(log_format) = cli.log_format {
            self.log_format = log_format;
        }
        if let Some(max_body_bytes) = cli.max_body_bytes {
            self.max_body_bytes = max_body_bytes;
        }
        self
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let address = format!("{}:{}", self.host, self.port);
        let invalid = |message: String| ConfigError::InvalidAddress {
            address: address.clone(),
            message,
        };

        (self.host.as_str(), self.port)
            .to_socket_addrs()
            .map_err(|e| invalid(e.to_string()))?
            .next()
            .ok_or_else(|| invalid("host resolved to no addresses".to_string()))
    }
}

fn parse_var<F, T>(lookup: &F, key: &str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e: T::Err| ConfigError::InvalidValue {
                key: key.to_string(),
                message: e.to_string(),
            }),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_app_config_defaults() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.policy, InputPolicy::Lenient);
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert_eq!(config.max_body_bytes, 16 * 1024 * 1024);
    }

    #[test]
    fn test_app_config_from_vars() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("HOST", "0.0.0.0"),
            ("PORT", "9000"),
            ("LUHN_INPUT_POLICY", "strict"),
            ("LOG_FORMAT", "json"),
            ("MAX_BODY_BYTES", "1024"),
        ]))
        .unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 9000);
        assert_eq!(config.policy, InputPolicy::Strict);
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.max_body_bytes, 1024);
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let err = AppConfig::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "PORT"));
    }

    #[test]
    fn test_invalid_policy_is_rejected() {
        let result = AppConfig::from_lookup(lookup_from(&[("LUHN_INPUT_POLICY", "loose")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_overrides_environment() {
        let cli = Cli::parse_from([
            "luhn-check",
            "--port",
            "3000",
            "--policy",
            "strict",
            "--max-body-bytes",
            "4096",
        ]);
        let config = AppConfig::default().with_cli(cli);
        assert_eq!(config.port, 3000);
        assert_eq!(config.policy, InputPolicy::Strict);
        assert_eq!(config.max_body_bytes, 4096);
        assert_eq!(config.host, "127.0.0.1");
    }

    #[test]
    fn test_positional_port() {
        let cli = Cli::parse_from(["luhn-check", "9090"]);
        let config = AppConfig::default().with_cli(cli);
        assert_eq!(config.port, 9090);
    }

    #[test]
    fn test_socket_addr() {
        let config = AppConfig {
            host: "0.0.0.0".to_string(),
            port: 3000,
            ..AppConfig::default()
        };

        let addr = config.socket_addr().unwrap();
        assert_eq!(addr.to_string(), "0.0.0.0:3000");
    }
}
