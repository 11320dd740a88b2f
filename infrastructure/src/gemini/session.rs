//! Gemini LLM session implementation
//!
//! Wraps one `generateContent` call per `send`. The API is stateless and the
//! quiz flow is single-turn, so no conversation history is kept.

use super::types::{self, GenerateContentRequest, GenerateContentResponse};
use async_trait::async_trait;
use nakkla_application::{GatewayError, LlmSession};
use nakkla_domain::Model;
use std::sync::Arc;
use tracing::debug;

/// Connection details shared by all sessions of a gateway
pub(crate) struct GeminiEndpoint {
    pub client: reqwest::Client,
    pub base_url: String,
    pub api_key: String,
}

impl GeminiEndpoint {
    fn generate_url(&self, model: &Model) -> String {
        let name = model.as_str().trim_start_matches("models/");
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            name
        )
    }
}

pub(crate) struct GeminiSession {
    endpoint: Arc<GeminiEndpoint>,
    model: Model,
    system_prompt: String,
}

impl GeminiSession {
    pub(crate) fn new(
        endpoint: Arc<GeminiEndpoint>,
        model: Model,
        system_prompt: String,
    ) -> Self {
        Self {
            endpoint,
            model,
            system_prompt,
        }
    }
}

fn convert_transport_error(e: reqwest::Error) -> GatewayError {
    if e.is_timeout() {
        GatewayError::Timeout
    } else if e.is_connect() {
        GatewayError::ConnectionError(e.to_string())
    } else {
        GatewayError::RequestFailed(e.to_string())
    }
}

#[async_trait]
impl LlmSession for GeminiSession {
    async fn send(&self, content: &str) -> Result<String, GatewayError> {
        let request = GenerateContentRequest::new(Some(&self.system_prompt), content);
        let url = self.endpoint.generate_url(&self.model);

        debug!(model = %self.model, "Calling Gemini generateContent");

        let response = self
            .endpoint
            .client
            .post(&url)
            .header("x-goog-api-key", &self.endpoint.api_key)
            .json(&request)
            .send()
            .await
            .map_err(convert_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(types::convert_error_body(status.as_u16(), &body));
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))?;

        let text = body.text()?;
        debug!(model = %self.model, chars = text.len(), "Gemini response received");
        Ok(text)
    }
}
