//! Configuration for crisisd.
//!
//! All settings come from the process environment at startup and are handed
//! to constructors explicitly; nothing reads the environment after boot.

use anyhow::{Context, Result};
use std::env;

/// Model used when `CRISIS_MODEL` is unset.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// 0.0.0.0 so the daemon is reachable from the Android emulator.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

/// Gemini REST endpoint prefix.
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

fn default_request_timeout() -> u64 {
    60
}

#[derive(Debug, Clone)]
pub struct Config {
    /// API credential for the model provider. Required.
    pub api_key: String,
    /// Model identifier sent with every invocation.
    pub model: String,
    /// Listen address for the HTTP server.
    pub bind_addr: String,
    /// Base URL of the model provider API.
    pub api_base: String,
    /// Outbound HTTP timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Config {
    /// Load configuration from the environment.
    ///
    /// `GEMINI_API_KEY` must be set; everything else falls back to defaults.
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("GEMINI_API_KEY")
            .context("GEMINI_API_KEY is not set - get a key at https://aistudio.google.com/app/apikey")?;

        Ok(Self {
            api_key,
            model: env::var("CRISIS_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            bind_addr: env::var("CRISIS_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            api_base: env::var("GEMINI_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string()),
            request_timeout_secs: env::var("CRISIS_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(default_request_timeout),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: DEFAULT_MODEL.to_string(),
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = Config::default();
        assert_eq!(config.model, "gemini-2.0-flash");
        assert_eq!(config.bind_addr, "0.0.0.0:8000");
        assert_eq!(config.request_timeout_secs, 60);
        assert!(config.api_base.starts_with("https://generativelanguage"));
    }
}
