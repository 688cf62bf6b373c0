use std::str::FromStr;

use anyhow::{Context, Result};

use crate::keywords::DEFAULT_TOP_N;

const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Every variable has a default; a value that fails to parse aborts startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Number of keywords kept per document.
    pub keyword_top_n: usize,
    pub max_upload_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            keyword_top_n: DEFAULT_TOP_N,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key/value source; `from_env` passes the process environment.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Config::default();
        Ok(Config {
            port: parse_var(&lookup, "PORT", defaults.port)?,
            rust_log: lookup("RUST_LOG").unwrap_or(defaults.rust_log),
            keyword_top_n: parse_var(&lookup, "KEYWORD_TOP_N", defaults.keyword_top_n)?,
            max_upload_bytes: parse_var(&lookup, "MAX_UPLOAD_BYTES", defaults.max_upload_bytes)?,
        })
    }
}

fn parse_var<T>(lookup: impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has invalid value '{raw}'")),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.keyword_top_n, 20);
        assert_eq!(config.max_upload_bytes, 10 * 1024 * 1024);
    }

    #[test]
    fn test_missing_vars_use_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
        assert_eq!(config.keyword_top_n, 20);
    }

    #[test]
    fn test_vars_override_defaults() {
        let config = config_from(&[
            ("PORT", " 9090 "),
            ("RUST_LOG", "debug"),
            ("KEYWORD_TOP_N", "5"),
            ("MAX_UPLOAD_BYTES", "1024"),
        ])
        .unwrap();
        assert_eq!(config.port, 9090);
        assert_eq!(config.rust_log, "debug");
        assert_eq!(config.keyword_top_n, 5);
        assert_eq!(config.max_upload_bytes, 1024);
    }

    #[test]
    fn test_garbage_value_is_rejected() {
        let err = config_from(&[("KEYWORD_TOP_N", "twenty")]).unwrap_err();
        assert!(err.to_string().contains("KEYWORD_TOP_N"));
    }

    #[test]
    fn test_port_out_of_range_is_rejected() {
        assert!(config_from(&[("PORT", "70000")]).is_err());
    }
}
