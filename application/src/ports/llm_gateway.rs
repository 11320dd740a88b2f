//! LLM Gateway port
//!
//! Defines the interface for communicating with the generative model service.

use async_trait::async_trait;
use nakkla_domain::Model;
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Response blocked: {0}")]
    Blocked(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Timeout")]
    Timeout,
}

/// Gateway for LLM communication
///
/// This port defines how the application layer communicates with the model
/// provider. Implementations (adapters) live in the infrastructure layer.
/// Gateways are created once at startup and shared by all requests.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Create a new session with a system prompt
    async fn create_session_with_system_prompt(
        &self,
        model: &Model,
        system_prompt: &str,
    ) -> Result<Box<dyn LlmSession>, GatewayError>;
}

/// An LLM session bound to one model and system prompt
#[async_trait]
pub trait LlmSession: Send + Sync {
    /// Send a message and get the generated text.
    ///
    /// Issues exactly one request to the provider; no retries.
    async fn send(&self, content: &str) -> Result<String, GatewayError>;
}
