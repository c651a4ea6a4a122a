//! Text-generation service configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

fn default_model() -> String {
    "gemini-2.0-flash".to_string()
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

/// HTTP transport timeout in seconds.
const fn default_timeout_secs() -> u64 {
    60
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GenerationConfig {
    /// API key for the generation service. Empty means not configured.
    #[serde(default)]
    pub api_key: String,

    #[serde(default = "default_model")]
    pub model: String,

    /// API root, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Sampling temperature, `0.0..=2.0`. Service default when unset.
    #[serde(default)]
    pub temperature: Option<f32>,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: default_model(),
            base_url: default_base_url(),
            temperature: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl GenerationConfig {
    /// Check if an API key is available.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }

    /// Return `self` if it can be used to call the service.
    ///
    /// # Errors
    ///
    /// `NotConfigured` when no API key is set, `InvalidValue` when the
    /// temperature is out of range or the timeout is zero.
    pub fn require(&self) -> Result<&Self, ConfigError> {
        if !self.is_configured() {
            return Err(ConfigError::NotConfigured {
                section: "generation".to_string(),
            });
        }
        if let Some(t) = self.temperature
            && !(0.0..=2.0).contains(&t)
        {
            return Err(ConfigError::InvalidValue {
                field: "generation.temperature".to_string(),
                reason: format!("{t} is outside 0.0..=2.0"),
            });
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "generation.timeout_secs".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(self)
    }
}
