//! Config validation.

use thiserror::Error;

use crate::Config;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} must be a number, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },

    #[error("invalid value for '{field}': {message}")]
    Invalid { field: &'static str, message: String },

    #[error("missing required setting {0}")]
    Missing(&'static str),
}

impl Config {
    /// Check values that parse but cannot work.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_upload_bytes == 0 {
            return Err(ConfigError::Invalid {
                field: "max_upload_bytes",
                message: "must be greater than zero".into(),
            });
        }
        if self.model.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "model",
                message: "must not be empty".into(),
            });
        }
        Ok(())
    }

    /// The Gemini API key, required to serve identifications.
    pub fn require_api_key(&self) -> Result<&str, ConfigError> {
        self.gemini_api_key
            .as_deref()
            .ok_or(ConfigError::Missing(crate::ENV_GEMINI_API_KEY))
    }
}
