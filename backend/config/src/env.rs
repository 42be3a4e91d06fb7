//! Environment variable loading.
//!
//! Unset or empty variables keep their defaults; numeric variables that are
//! set but unparsable are an error rather than silently ignored.

use std::collections::HashMap;

use crate::validation::ConfigError;
use crate::Config;

pub const ENV_BIND: &str = "PLANTY_BIND";
pub const ENV_PORT: &str = "PLANTY_PORT";
pub const ENV_GEMINI_API_KEY: &str = "GEMINI_API_KEY";
pub const ENV_MODEL: &str = "PLANTY_MODEL";
pub const ENV_GEMINI_BASE_URL: &str = "GEMINI_BASE_URL";
pub const ENV_MAX_UPLOAD_BYTES: &str = "PLANTY_MAX_UPLOAD_BYTES";
pub const ENV_LOG_LEVEL: &str = "RUST_LOG";
pub const ENV_LOG_DIR: &str = "PLANTY_LOG_DIR";

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(&std::env::vars().collect())
    }

    /// Load configuration from a provided map (useful for testing).
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let get = |key: &str| {
            vars.get(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let defaults = Config::default();

        let config = Config {
            bind_address: get(ENV_BIND).unwrap_or(defaults.bind_address),
            port: parse_number(ENV_PORT, get(ENV_PORT))?.unwrap_or(defaults.port),
            gemini_api_key: get(ENV_GEMINI_API_KEY),
            model: get(ENV_MODEL).unwrap_or(defaults.model),
            gemini_base_url: get(ENV_GEMINI_BASE_URL).unwrap_or(defaults.gemini_base_url),
            max_upload_bytes: parse_number(ENV_MAX_UPLOAD_BYTES, get(ENV_MAX_UPLOAD_BYTES))?
                .unwrap_or(defaults.max_upload_bytes),
            log_level: get(ENV_LOG_LEVEL).unwrap_or(defaults.log_level),
            log_dir: get(ENV_LOG_DIR),
        };
        config.validate()?;
        Ok(config)
    }
}

fn parse_number<T: std::str::FromStr>(
    var: &'static str,
    raw: Option<String>,
) -> Result<Option<T>, ConfigError> {
    match raw {
        None => Ok(None),
        Some(value) => value
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidNumber { var, value }),
    }
}
