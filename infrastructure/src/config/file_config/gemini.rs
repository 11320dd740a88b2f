//! Gemini provider configuration from TOML (`[gemini]` section)

use nakkla_domain::Model;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Gemini API settings.
///
/// The API key is normally read from the environment variable named by
/// `api_key_env`. `api_key` is the legacy way of storing the key in the
/// config file; it is still honored as a fallback but logs a warning.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGeminiConfig {
    /// Model name (default: "gemini-pro")
    pub model: String,
    /// Base URL for the Generative Language API
    pub base_url: String,
    /// Environment variable name for the API key (default: "GEMINI_API_KEY")
    pub api_key_env: String,
    /// Direct API key (deprecated; use the environment variable instead)
    pub api_key: Option<String>,
    /// Request timeout in seconds (default: none, the transport decides)
    pub timeout_secs: Option<u64>,
}

impl Default for FileGeminiConfig {
    fn default() -> Self {
        Self {
            model: Model::default().to_string(),
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            api_key_env: "GEMINI_API_KEY".to_string(),
            api_key: None,
            timeout_secs: None,
        }
    }
}

impl FileGeminiConfig {
    pub fn parse_model(&self) -> Model {
        let Ok(model) = self.model.trim().parse::<Model>();
        model
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl std::fmt::Debug for FileGeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileGeminiConfig")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("api_key_env", &self.api_key_env)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}
