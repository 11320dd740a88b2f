//! Callable protocol envelopes
//!
//! Requests arrive as `{"data": {...}}`. Successful calls answer with
//! `{"result": {...}}`; failures answer with
//! `{"error": {"status": "...", "message": "...", "details": ...}}`
//! and an HTTP status matching the error kind.

use axum::Json;
use axum::http::{HeaderMap, HeaderName, StatusCode};
use axum::response::{IntoResponse, Response};
use nakkla_application::{AnalyzeQuizError, ErrorKind};
use nakkla_domain::{CallerIdentity, QuizAnalysis};
use serde::Serialize;
use serde_json::Value;

/// Extract the callable `data` object from a raw request body.
///
/// An empty body is treated as `null`. Bodies without a `data` wrapper are
/// taken as the data object itself.
pub fn parse_request(body: &[u8]) -> Result<Value, serde_json::Error> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }

    let mut value: Value = serde_json::from_slice(body)?;
    Ok(match value.get_mut("data") {
        Some(data) => data.take(),
        None => value,
    })
}

/// Read the caller identity from the configured header.
///
/// A `Bearer ` prefix is stripped; the token itself is not verified.
pub fn caller_identity(headers: &HeaderMap, header: &HeaderName) -> Option<CallerIdentity> {
    let value = headers.get(header)?.to_str().ok()?.trim();
    let token = match value.get(..7) {
        Some(prefix) if prefix.eq_ignore_ascii_case("bearer ") => &value[7..],
        _ => value,
    };
    CallerIdentity::try_new(token.trim())
}

/// HTTP status for an error kind
pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::Unauthenticated => StatusCode::UNAUTHORIZED,
        ErrorKind::InvalidArgument => StatusCode::BAD_REQUEST,
        ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[derive(Debug, Serialize)]
struct SuccessEnvelope<'a> {
    result: &'a QuizAnalysis,
}

#[derive(Debug, Serialize)]
struct ErrorEnvelope<'a> {
    error: ErrorBody<'a>,
}

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    status: &'static str,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<&'a str>,
}

/// Response of one callable invocation
#[derive(Debug)]
pub enum CallableResponse {
    Success(QuizAnalysis),
    Failure(AnalyzeQuizError),
}

impl From<Result<QuizAnalysis, AnalyzeQuizError>> for CallableResponse {
    fn from(result: Result<QuizAnalysis, AnalyzeQuizError>) -> Self {
        match result {
            Ok(analysis) => CallableResponse::Success(analysis),
            Err(e) => CallableResponse::Failure(e),
        }
    }
}

impl IntoResponse for CallableResponse {
    fn into_response(self) -> Response {
        match self {
            CallableResponse::Success(analysis) => (
                StatusCode::OK,
                Json(SuccessEnvelope { result: &analysis }),
            )
                .into_response(),
            CallableResponse::Failure(e) => {
                let kind = e.kind();
                let body = ErrorEnvelope {
                    error: ErrorBody {
                        status: kind.as_str(),
                        message: e.to_string(),
                        details: e.detail(),
                    },
                };
                (status_for(kind), Json(body)).into_response()
            }
        }
    }
}
