//! Infrastructure layer for nakkla-oracle
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, configuration loading and API key resolution.

pub mod config;
pub mod gemini;
pub mod persona;

// Re-export commonly used types
pub use config::{
    ApiKeySource, ConfigError, ConfigLoader, ConfigValidationError, FileConfig,
    FileGeminiConfig, FileQuizConfig, FileServerConfig, ResolvedApiKey, load_env_file,
    resolve_api_key,
};
pub use gemini::{GeminiLlmGateway, GeminiSettings};
pub use persona::{PersonaError, load_persona};
