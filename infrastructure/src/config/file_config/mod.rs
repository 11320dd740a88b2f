//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted to domain/application
//! types where appropriate.

mod gemini;
mod quiz;
mod server;

pub use gemini::FileGeminiConfig;
pub use quiz::FileQuizConfig;
pub use server::FileServerConfig;

use nakkla_application::AnalyzerParams;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigValidationError {
    #[error("gemini.model: model name cannot be empty")]
    EmptyModelName,

    #[error("gemini.base_url: must start with http:// or https://, got '{0}'")]
    InvalidBaseUrl(String),

    #[error("gemini.api_key_env: variable name cannot be empty")]
    EmptyApiKeyEnv,

    #[error("gemini.timeout_secs cannot be 0")]
    InvalidTimeout,

    #[error("server.bind: '{0}' is not a socket address")]
    InvalidBindAddress(String),

    #[error("server.identity_header cannot be empty")]
    EmptyIdentityHeader,

    #[error("quiz.{0} cannot be 0")]
    ZeroLimit(&'static str),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Callable endpoint settings
    pub server: FileServerConfig,
    /// Gemini provider settings
    pub gemini: FileGeminiConfig,
    /// Persona and answer limits
    pub quiz: FileQuizConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();

        if self.gemini.model.trim().is_empty() {
            issues.push(ConfigValidationError::EmptyModelName);
        }
        let base_url = self.gemini.base_url.trim();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            issues.push(ConfigValidationError::InvalidBaseUrl(base_url.to_string()));
        }
        if self.gemini.api_key_env.trim().is_empty() {
            issues.push(ConfigValidationError::EmptyApiKeyEnv);
        }
        if self.gemini.timeout_secs == Some(0) {
            issues.push(ConfigValidationError::InvalidTimeout);
        }

        if self.server.bind.parse::<SocketAddr>().is_err() {
            issues.push(ConfigValidationError::InvalidBindAddress(
                self.server.bind.clone(),
            ));
        }
        if self.server.identity_header.trim().is_empty() {
            issues.push(ConfigValidationError::EmptyIdentityHeader);
        }

        if self.quiz.max_answers == Some(0) {
            issues.push(ConfigValidationError::ZeroLimit("max_answers"));
        }
        if self.quiz.max_answer_chars == Some(0) {
            issues.push(ConfigValidationError::ZeroLimit("max_answer_chars"));
        }

        issues
    }

    /// Parameters for the quiz analysis use case
    pub fn analyzer_params(&self) -> AnalyzerParams {
        AnalyzerParams::default()
            .with_model(self.gemini.parse_model())
            .with_answer_policy(self.quiz.answer_policy())
    }

    /// Copy of this config that is safe to print (no API key)
    pub fn redacted(&self) -> Self {
        let mut config = self.clone();
        if config.gemini.api_key.is_some() {
            config.gemini.api_key = Some("<redacted>".to_string());
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nakkla_domain::Model;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[server]
bind = "0.0.0.0:9000"
identity_header = "x-verified-uid"

[gemini]
model = "gemini-1.5-pro"
api_key_env = "ORAM_GEMINI_KEY"
timeout_secs = 30

[quiz]
persona_path = "persona.txt"
max_answers = 12
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.server.bind, "0.0.0.0:9000");
        assert_eq!(config.server.identity_header, "x-verified-uid");
        assert_eq!(config.gemini.parse_model(), Model::Gemini15Pro);
        assert_eq!(config.gemini.api_key_env, "ORAM_GEMINI_KEY");
        assert_eq!(config.gemini.timeout_secs, Some(30));
        assert_eq!(
            config.quiz.persona_path.as_deref(),
            Some(std::path::Path::new("persona.txt"))
        );
        assert_eq!(config.quiz.max_answers, Some(12));
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[gemini]
api_key = "legacy-key"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.gemini.api_key.as_deref(), Some("legacy-key"));
        // Defaults should apply
        assert_eq!(config.gemini.model, "gemini-pro");
        assert_eq!(config.server, FileServerConfig::default());
        assert!(config.quiz.answer_policy().is_permissive());
    }

    #[test]
    fn test_validate_valid_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_collects_all_issues() {
        let mut config = FileConfig::default();
        config.gemini.model = " ".to_string();
        config.gemini.base_url = "generativelanguage.googleapis.com".to_string();
        config.gemini.timeout_secs = Some(0);
        config.server.bind = "localhost".to_string();
        config.quiz.max_answer_chars = Some(0);

        let issues = config.validate();
        assert_eq!(issues.len(), 5);
        assert!(issues.contains(&ConfigValidationError::EmptyModelName));
        assert!(issues.contains(&ConfigValidationError::InvalidTimeout));
        assert!(issues.contains(&ConfigValidationError::ZeroLimit("max_answer_chars")));
    }

    #[test]
    fn test_analyzer_params() {
        let mut config = FileConfig::default();
        config.gemini.model = "gemini-2.0-flash".to_string();
        config.quiz.max_answers = Some(10);

        let params = config.analyzer_params();
        assert_eq!(params.model, Model::Gemini20Flash);
        assert_eq!(params.answer_policy.max_answers, Some(10));
        assert_eq!(params.answer_policy.max_answer_chars, None);
    }

    #[test]
    fn test_redacted_hides_api_key() {
        let mut config = FileConfig::default();
        config.gemini.api_key = Some("AIza-secret".to_string());

        let rendered = toml::to_string(&config.redacted()).unwrap();
        assert!(!rendered.contains("AIza-secret"));
    }
}
