//! `planty-config`: runtime configuration for the Planty service.
//!
//! Provides:
//! - Typed `Config` with defaults
//! - Environment variable loading (`PLANTY_*`, `GEMINI_*`, `RUST_LOG`)
//! - Validation of loaded values
//! - Secret masking for safe logging

pub mod env;
pub mod redact;
pub mod validation;

pub use env::{
    ENV_BIND, ENV_GEMINI_API_KEY, ENV_GEMINI_BASE_URL, ENV_LOG_DIR, ENV_LOG_LEVEL,
    ENV_MAX_UPLOAD_BYTES, ENV_MODEL, ENV_PORT,
};
pub use redact::mask_secret;
pub use validation::ConfigError;

pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
/// 10 MiB.
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Planty runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server bind address
    pub bind_address: String,
    /// HTTP server port
    pub port: u16,
    /// Gemini API key
    pub gemini_api_key: Option<String>,
    /// Gemini model used for identification
    pub model: String,
    /// Gemini REST base URL
    pub gemini_base_url: String,
    /// Largest accepted request body, in bytes
    pub max_upload_bytes: usize,
    /// Log level
    pub log_level: String,
    /// Directory for rolling JSON logs; console only when unset
    pub log_dir: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            port: DEFAULT_PORT,
            gemini_api_key: None,
            model: DEFAULT_MODEL.to_string(),
            gemini_base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_dir: None,
        }
    }
}
