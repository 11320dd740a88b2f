//! Configuration loading for nakkla-oracle
//!
//! This module handles `.env` loading, file I/O, merging of configuration
//! from multiple sources and resolution of the Gemini API key.
//! The priority order (highest to lowest):
//!
//! 1. `NAKKLA_*` environment variables (`__` separates sections)
//! 2. `--config <path>` specified file
//! 3. Project root: `./nakkla.toml` or `./.nakkla.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/nakkla-oracle/config.toml`
//! 5. Default values

mod env_file;
mod file_config;
mod loader;
mod secrets;

pub use env_file::load_env_file;
pub use file_config::{
    ConfigValidationError, FileConfig, FileGeminiConfig, FileQuizConfig, FileServerConfig,
};
pub use loader::ConfigLoader;
pub use secrets::{ApiKeySource, ResolvedApiKey, resolve_api_key};

use thiserror::Error;

/// Startup configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),

    #[error("Invalid configuration:\n{}", format_issues(.0))]
    Invalid(Vec<ConfigValidationError>),

    #[error("No Gemini API key found: set the {env_var} environment variable")]
    MissingApiKey { env_var: String },
}

fn format_issues(issues: &[ConfigValidationError]) -> String {
    issues
        .iter()
        .map(|issue| format!("  - {}", issue))
        .collect::<Vec<_>>()
        .join("\n")
}

impl FileConfig {
    /// Turn validation issues into a startup error
    pub fn ensure_valid(&self) -> Result<(), ConfigError> {
        let issues = self.validate();
        if issues.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Invalid(issues))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_config_lists_every_issue() {
        let mut config = FileConfig::default();
        config.server.identity_header = String::new();
        config.quiz.max_answers = Some(0);

        let message = config.ensure_valid().unwrap_err().to_string();
        assert!(message.contains("server.identity_header cannot be empty"));
        assert!(message.contains("quiz.max_answers cannot be 0"));
    }

    #[test]
    fn test_missing_api_key_names_variable() {
        let err = ConfigError::MissingApiKey {
            env_var: "GEMINI_API_KEY".to_string(),
        };
        assert!(err.to_string().contains("GEMINI_API_KEY"));
    }
}
