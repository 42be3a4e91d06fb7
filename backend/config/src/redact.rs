//! Secret masking for config snapshots written to logs.

use crate::Config;

/// Mask a secret, keeping the first 4 characters as a hint.
pub fn mask_secret(secret: &str) -> String {
    if secret.chars().count() > 4 {
        let hint: String = secret.chars().take(4).collect();
        format!("{hint}***")
    } else {
        "***".to_string()
    }
}

impl Config {
    /// A copy safe to log: the API key is masked.
    pub fn redacted(&self) -> Config {
        Config {
            gemini_api_key: self.gemini_api_key.as_deref().map(mask_secret),
            ..self.clone()
        }
    }
}
