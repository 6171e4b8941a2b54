use std::env;
use std::str::FromStr;

use anyhow::{Context, Result};

/// Default listener address.
pub const DEFAULT_BIND: &str = "0.0.0.0";

/// Default listener port.
pub const DEFAULT_PORT: u16 = 8080;

/// Default cap on the `/validate` request body (64 KiB).
pub const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024;

/// Runtime configuration loaded from environment variables.
///
/// Only listener settings live here. The blocklist is a fixed literal
/// (see `censor::DEFAULT_BLOCKED_WORDS`) and is not configurable.
/// The .env file is loaded automatically at startup via dotenvy.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address to bind (CENSOR_BIND)
    pub bind: String,
    /// Port to listen on (CENSOR_PORT)
    pub port: u16,
    /// Largest request body accepted before answering 400 (CENSOR_MAX_BODY_BYTES)
    pub max_body_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            port: DEFAULT_PORT,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Every variable is optional. A numeric variable that is set but
    /// unparseable is an error rather than a silent fallback.
    pub fn load() -> Result<Self> {
        Ok(Self {
            bind: env::var("CENSOR_BIND").unwrap_or_else(|_| DEFAULT_BIND.to_string()),
            port: parse_var("CENSOR_PORT", DEFAULT_PORT)?,
            max_body_bytes: parse_var("CENSOR_MAX_BODY_BYTES", DEFAULT_MAX_BODY_BYTES)?,
        })
    }

    /// `bind:port` as passed to the TCP listener.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}

fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .with_context(|| format!("{name} must be a number, got {raw:?}")),
        _ => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.listen_addr(), "0.0.0.0:8080");
        assert_eq!(config.max_body_bytes, 65_536);
    }

    // Env vars are process-global; each test uses its own variable name.
    #[test]
    fn test_parse_var_unset_uses_default() {
        assert_eq!(parse_var("CENSOR_TEST_UNSET_VAR", 42u16).unwrap(), 42);
    }

    #[test]
    fn test_parse_var_reads_value() {
        env::set_var("CENSOR_TEST_PORT_OK", " 9090 ");
        assert_eq!(parse_var("CENSOR_TEST_PORT_OK", 1u16).unwrap(), 9090);
    }

    #[test]
    fn test_parse_var_rejects_garbage() {
        env::set_var("CENSOR_TEST_PORT_BAD", "eighty");
        let err = parse_var("CENSOR_TEST_PORT_BAD", 1u16).unwrap_err();
        assert!(err.to_string().contains("CENSOR_TEST_PORT_BAD"));
    }
}
