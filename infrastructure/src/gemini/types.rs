//! Gemini `generateContent` wire types
//!
//! Request/response payloads of the Generative Language REST API and the
//! conversion of a response envelope into generated text.

use nakkla_application::GatewayError;
use serde::{Deserialize, Serialize};

/// Finish reasons that mean the candidate text must not be used.
const BLOCKING_FINISH_REASONS: [&str; 5] = [
    "SAFETY",
    "RECITATION",
    "BLOCKLIST",
    "PROHIBITED_CONTENT",
    "SPII",
];

// ─── Request ─────────────────────────────────────────────────────

/// Top-level `generateContent` request body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
    pub contents: Vec<Content>,
}

impl GenerateContentRequest {
    /// One user turn, optionally preceded by a system instruction.
    pub fn new(system_prompt: Option<&str>, user_text: &str) -> Self {
        Self {
            system_instruction: system_prompt
                .filter(|p| !p.is_empty())
                .map(|p| Content::text(None, p)),
            contents: vec![Content::text(Some("user"), user_text)],
        }
    }
}

/// Content container used in both requests and responses.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    fn text(role: Option<&str>, text: &str) -> Self {
        Self {
            role: role.map(str::to_string),
            parts: vec![Part {
                text: Some(text.to_string()),
            }],
        }
    }
}

/// A content part. Only text parts are produced or read; other part
/// kinds (inline data, function calls) deserialize with `text: None`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

// ─── Response ────────────────────────────────────────────────────

/// Top-level `generateContent` response envelope.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub prompt_feedback: Option<PromptFeedback>,
}

/// Candidate completion returned by Gemini.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<Content>,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    pub block_reason: Option<String>,
}

/// Google API error envelope (`{"error": {...}}`).
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorEnvelope {
    pub error: ApiErrorBody,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub code: Option<u16>,
    #[serde(default)]
    pub message: String,
    pub status: Option<String>,
}

impl GenerateContentResponse {
    /// Text of the first candidate, with all text parts concatenated.
    ///
    /// A response without candidates yields an empty string unless the
    /// prompt itself was blocked. Empty text is not an error here.
    pub fn text(&self) -> Result<String, GatewayError> {
        let Some(candidate) = self.candidates.first() else {
            if let Some(reason) = self
                .prompt_feedback
                .as_ref()
                .and_then(|f| f.block_reason.as_deref())
            {
                return Err(GatewayError::Blocked(format!("prompt blocked: {}", reason)));
            }
            return Ok(String::new());
        };

        if let Some(reason) = candidate.finish_reason.as_deref() {
            if BLOCKING_FINISH_REASONS.contains(&reason) {
                return Err(GatewayError::Blocked(format!(
                    "candidate finished with {}",
                    reason
                )));
            }
        }

        Ok(candidate
            .content
            .iter()
            .flat_map(|c| c.parts.iter())
            .filter_map(|p| p.text.as_deref())
            .collect())
    }
}

/// Convert a non-2xx response body into a gateway error.
pub fn convert_error_body(status: u16, body: &str) -> GatewayError {
    match serde_json::from_str::<ApiErrorEnvelope>(body) {
        Ok(envelope) => {
            let status_name = envelope.error.status.as_deref().unwrap_or("UNKNOWN");
            GatewayError::RequestFailed(format!(
                "HTTP {} {}: {}",
                envelope.error.code.unwrap_or(status),
                status_name,
                envelope.error.message
            ))
        }
        Err(_) => GatewayError::RequestFailed(format!("HTTP {}: {}", status, body.trim())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response(value: serde_json::Value) -> GenerateContentResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_request_shape() {
        let request = GenerateContentRequest::new(Some("You are a loremaster."), "1. Fight");
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "systemInstruction": { "parts": [{ "text": "You are a loremaster." }] },
                "contents": [{ "role": "user", "parts": [{ "text": "1. Fight" }] }]
            })
        );
    }

    #[test]
    fn test_request_without_system_prompt() {
        let request = GenerateContentRequest::new(None, "hi");
        let value = serde_json::to_value(&request).unwrap();
        assert!(value.get("systemInstruction").is_none());
    }

    #[test]
    fn test_text_joins_parts_of_first_candidate() {
        let resp = response(json!({
            "candidates": [
                {
                    "content": { "role": "model", "parts": [{ "text": "**Qat**" }, { "text": "\n\nYou are..." }] },
                    "finishReason": "STOP"
                },
                { "content": { "parts": [{ "text": "ignored" }] } }
            ]
        }));
        assert_eq!(resp.text().unwrap(), "**Qat**\n\nYou are...");
    }

    #[test]
    fn test_text_skips_non_text_parts() {
        let resp = response(json!({
            "candidates": [{
                "content": { "parts": [{ "inlineData": { "mimeType": "image/png", "data": "" } }, { "text": "**Bell**" }] }
            }]
        }));
        assert_eq!(resp.text().unwrap(), "**Bell**");
    }

    #[test]
    fn test_no_candidates_is_empty_text() {
        assert_eq!(response(json!({})).text().unwrap(), "");
    }

    #[test]
    fn test_blocked_prompt() {
        let resp = response(json!({ "promptFeedback": { "blockReason": "SAFETY" } }));
        assert_eq!(
            resp.text(),
            Err(GatewayError::Blocked("prompt blocked: SAFETY".to_string()))
        );
    }

    #[test]
    fn test_blocked_candidate() {
        let resp = response(json!({
            "candidates": [{ "content": { "parts": [{ "text": "partial" }] }, "finishReason": "RECITATION" }]
        }));
        assert!(matches!(resp.text(), Err(GatewayError::Blocked(_))));
    }

    #[test]
    fn test_max_tokens_keeps_text() {
        let resp = response(json!({
            "candidates": [{ "content": { "parts": [{ "text": "**Akin**" }] }, "finishReason": "MAX_TOKENS" }]
        }));
        assert_eq!(resp.text().unwrap(), "**Akin**");
    }

    #[test]
    fn test_convert_error_envelope() {
        let body = r#"{"error":{"code":400,"message":"API key not valid.","status":"INVALID_ARGUMENT"}}"#;
        assert_eq!(
            convert_error_body(400, body),
            GatewayError::RequestFailed(
                "HTTP 400 INVALID_ARGUMENT: API key not valid.".to_string()
            )
        );
    }

    #[test]
    fn test_convert_plain_error_body() {
        assert_eq!(
            convert_error_body(502, "Bad Gateway\n"),
            GatewayError::RequestFailed("HTTP 502: Bad Gateway".to_string())
        );
    }
}
