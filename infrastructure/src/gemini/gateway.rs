//! Gemini LLM Gateway implementation

use super::session::{GeminiEndpoint, GeminiSession};
use crate::config::{FileGeminiConfig, ResolvedApiKey};
use async_trait::async_trait;
use nakkla_application::{GatewayError, LlmGateway, LlmSession};
use nakkla_domain::Model;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Settings needed to reach the Gemini API
#[derive(Clone)]
pub struct GeminiSettings {
    pub base_url: String,
    pub api_key: ResolvedApiKey,
    pub timeout: Option<Duration>,
}

impl GeminiSettings {
    pub fn from_config(config: &FileGeminiConfig, api_key: ResolvedApiKey) -> Self {
        Self {
            base_url: config.base_url.trim().to_string(),
            api_key,
            timeout: config.timeout(),
        }
    }
}

/// LLM Gateway implementation for the Gemini REST API
///
/// Holds one pooled HTTP client, created at startup and shared by every
/// session.
pub struct GeminiLlmGateway {
    endpoint: Arc<GeminiEndpoint>,
}

impl GeminiLlmGateway {
    pub fn new(settings: GeminiSettings) -> Result<Self, GatewayError> {
        let mut builder = reqwest::Client::builder().user_agent(concat!(
            "nakkla-oracle/",
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(timeout) = settings.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| GatewayError::ConnectionError(e.to_string()))?;

        info!(
            base_url = %settings.base_url,
            key_source = %settings.api_key.source().description(),
            "GeminiLlmGateway initialized"
        );

        Ok(Self {
            endpoint: Arc::new(GeminiEndpoint {
                client,
                base_url: settings.base_url,
                api_key: settings.api_key.expose().to_string(),
            }),
        })
    }
}

#[async_trait]
impl LlmGateway for GeminiLlmGateway {
    async fn create_session_with_system_prompt(
        &self,
        model: &Model,
        system_prompt: &str,
    ) -> Result<Box<dyn LlmSession>, GatewayError> {
        Ok(Box::new(GeminiSession::new(
            Arc::clone(&self.endpoint),
            model.clone(),
            system_prompt.to_string(),
        )))
    }
}
