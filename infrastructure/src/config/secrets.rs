//! API key resolution
//!
//! The Gemini API key is resolved once at startup. Sources are tried in
//! order and the first non-blank value wins:
//!
//! 1. The environment variable named by `gemini.api_key_env`
//! 2. The legacy `gemini.api_key` config entry (deprecated)
//!
//! If neither yields a key the process refuses to start.

use super::ConfigError;
use super::file_config::FileGeminiConfig;
use std::env;
use tracing::{info, warn};

/// Where the API key came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiKeySource {
    /// Environment variable (name included)
    Environment(String),
    /// Deprecated `gemini.api_key` config entry
    LegacyConfig,
}

impl ApiKeySource {
    pub fn description(&self) -> String {
        match self {
            ApiKeySource::Environment(var) => format!("environment variable {}", var),
            ApiKeySource::LegacyConfig => "gemini.api_key config entry (deprecated)".to_string(),
        }
    }
}

/// A resolved API key. `Debug` never prints the key.
#[derive(Clone, PartialEq, Eq)]
pub struct ResolvedApiKey {
    key: String,
    source: ApiKeySource,
}

impl ResolvedApiKey {
    pub fn new(key: impl Into<String>, source: ApiKeySource) -> Self {
        Self {
            key: key.into(),
            source,
        }
    }

    pub fn expose(&self) -> &str {
        &self.key
    }

    pub fn source(&self) -> &ApiKeySource {
        &self.source
    }
}

impl std::fmt::Debug for ResolvedApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolvedApiKey")
            .field("key", &"<redacted>")
            .field("source", &self.source)
            .finish()
    }
}

/// Resolve the API key from the process environment and config
pub fn resolve_api_key(config: &FileGeminiConfig) -> Result<ResolvedApiKey, ConfigError> {
    resolve_api_key_with(config, |name| env::var(name).ok())
}

/// Resolve the API key using a custom environment lookup
pub fn resolve_api_key_with(
    config: &FileGeminiConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<ResolvedApiKey, ConfigError> {
    let env_var = config.api_key_env.trim();

    if let Some(value) = lookup(env_var).filter(|v| !v.trim().is_empty()) {
        let key = ResolvedApiKey::new(value.trim(), ApiKeySource::Environment(env_var.to_string()));
        info!(source = %key.source().description(), "Gemini API key resolved");
        return Ok(key);
    }

    if let Some(value) = config.api_key.as_deref().filter(|v| !v.trim().is_empty()) {
        warn!(
            "Using the deprecated gemini.api_key config entry; set {} instead",
            env_var
        );
        return Ok(ResolvedApiKey::new(value.trim(), ApiKeySource::LegacyConfig));
    }

    Err(ConfigError::MissingApiKey {
        env_var: env_var.to_string(),
    })
}
