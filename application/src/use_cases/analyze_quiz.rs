//! Analyze Quiz use case.
//!
//! Turns a caller's quiz answers into a Drakkaen Nakkla analysis:
//!
//! 1. Require a caller identity (attached by the hosting gateway)
//! 2. Validate the `userAnswers` payload and the configured [`AnswerPolicy`]
//! 3. Compose the prompt from the [`SystemPersona`] and the numbered answers
//! 4. Call the model once through the [`LlmGateway`]
//! 5. Return the generated text unmodified, rejecting only empty output
//!
//! Every failure leaves through [`AnalyzeQuizError`], which has a closed set
//! of kinds. Upstream error details are kept in `detail` and never in the
//! user-facing message.
//!
//! [`AnswerPolicy`]: nakkla_domain::AnswerPolicy

use crate::config::AnalyzerParams;
use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use nakkla_domain::{
    CallerIdentity, DomainError, QuizAnalysis, QuizAnswers, QuizPromptTemplate, SystemPersona,
};
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, info, warn};

const INVALID_ANSWERS_MESSAGE: &str = "The function must be called with an array of userAnswers.";
const EMPTY_RESPONSE_MESSAGE: &str = "Failed to retrieve text from Gemini API response.";
const UPSTREAM_FAILURE_MESSAGE: &str = "Failed to analyze quiz results. Please try again later.";

/// Kind of an [`AnalyzeQuizError`], as reported to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Unauthenticated,
    InvalidArgument,
    Internal,
}

impl ErrorKind {
    /// Status code string used on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Unauthenticated => "UNAUTHENTICATED",
            ErrorKind::InvalidArgument => "INVALID_ARGUMENT",
            ErrorKind::Internal => "INTERNAL",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors returned to the caller of [`AnalyzeQuizUseCase::execute`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalyzeQuizError {
    #[error("The function must be called while authenticated.")]
    Unauthenticated,

    #[error("{message}")]
    InvalidArgument {
        message: String,
        detail: Option<String>,
    },

    #[error("{message}")]
    Internal {
        message: String,
        detail: Option<String>,
    },
}

impl AnalyzeQuizError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AnalyzeQuizError::Unauthenticated => ErrorKind::Unauthenticated,
            AnalyzeQuizError::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            AnalyzeQuizError::Internal { .. } => ErrorKind::Internal,
        }
    }

    /// Optional debugging detail (never shown in `Display`)
    pub fn detail(&self) -> Option<&str> {
        match self {
            AnalyzeQuizError::Unauthenticated => None,
            AnalyzeQuizError::InvalidArgument { detail, .. }
            | AnalyzeQuizError::Internal { detail, .. } => detail.as_deref(),
        }
    }

    /// Error for request bodies that are not valid JSON at all
    pub fn malformed_payload(detail: impl Into<String>) -> Self {
        AnalyzeQuizError::InvalidArgument {
            message: INVALID_ANSWERS_MESSAGE.to_string(),
            detail: Some(detail.into()),
        }
    }
}

/// Everything that can go wrong inside the use case, before conversion.
#[derive(Debug)]
enum AnalyzeFailure {
    MissingCaller,
    Payload(DomainError),
    Gateway(GatewayError),
    EmptyResponse,
}

impl AnalyzeFailure {
    fn log(&self) {
        match self {
            AnalyzeFailure::MissingCaller => debug!("Rejected quiz analysis: no caller identity"),
            AnalyzeFailure::Payload(e) => debug!(error = %e, "Rejected quiz analysis payload"),
            AnalyzeFailure::Gateway(e) => error!(error = %e, "Error calling Gemini API"),
            AnalyzeFailure::EmptyResponse => warn!("Gemini API returned no text"),
        }
    }
}

impl From<GatewayError> for AnalyzeFailure {
    fn from(e: GatewayError) -> Self {
        AnalyzeFailure::Gateway(e)
    }
}

impl From<AnalyzeFailure> for AnalyzeQuizError {
    fn from(failure: AnalyzeFailure) -> Self {
        match failure {
            AnalyzeFailure::MissingCaller => AnalyzeQuizError::Unauthenticated,
            AnalyzeFailure::Payload(e) if e.is_shape_error() => {
                AnalyzeQuizError::InvalidArgument {
                    message: INVALID_ANSWERS_MESSAGE.to_string(),
                    detail: Some(e.to_string()),
                }
            }
            AnalyzeFailure::Payload(e) => AnalyzeQuizError::InvalidArgument {
                message: e.to_string(),
                detail: None,
            },
            AnalyzeFailure::EmptyResponse => AnalyzeQuizError::Internal {
                message: UPSTREAM_FAILURE_MESSAGE.to_string(),
                detail: Some(EMPTY_RESPONSE_MESSAGE.to_string()),
            },
            AnalyzeFailure::Gateway(e) => AnalyzeQuizError::Internal {
                message: UPSTREAM_FAILURE_MESSAGE.to_string(),
                detail: Some(e.to_string()),
            },
        }
    }
}

/// Input for the [`AnalyzeQuizUseCase`].
#[derive(Debug, Clone)]
pub struct AnalyzeQuizInput {
    /// Identity attached by the hosting gateway, if any.
    pub caller: Option<CallerIdentity>,
    /// The callable `data` object, expected to hold `userAnswers`.
    pub payload: Value,
}

impl AnalyzeQuizInput {
    pub fn new(caller: Option<CallerIdentity>, payload: Value) -> Self {
        Self { caller, payload }
    }
}

/// Use case for analyzing quiz answers.
///
/// Holds no per-request state; clones share the gateway and persona.
#[derive(Clone)]
pub struct AnalyzeQuizUseCase {
    gateway: Arc<dyn LlmGateway>,
    persona: SystemPersona,
    params: AnalyzerParams,
}

impl AnalyzeQuizUseCase {
    pub fn new(gateway: Arc<dyn LlmGateway>, persona: SystemPersona) -> Self {
        Self {
            gateway,
            persona,
            params: AnalyzerParams::default(),
        }
    }

    pub fn with_params(mut self, params: AnalyzerParams) -> Self {
        info!(
            model = %params.model,
            permissive = params.answer_policy.is_permissive(),
            "Quiz analyzer configured"
        );
        self.params = params;
        self
    }

    /// Execute the analysis.
    pub async fn execute(&self, input: AnalyzeQuizInput) -> Result<QuizAnalysis, AnalyzeQuizError> {
        self.run(input).await.map_err(|failure| {
            failure.log();
            AnalyzeQuizError::from(failure)
        })
    }

    async fn run(&self, input: AnalyzeQuizInput) -> Result<QuizAnalysis, AnalyzeFailure> {
        if input.caller.is_none() {
            return Err(AnalyzeFailure::MissingCaller);
        }

        let answers = QuizAnswers::from_payload(&input.payload).map_err(AnalyzeFailure::Payload)?;
        self.params
            .answer_policy
            .check(&answers)
            .map_err(AnalyzeFailure::Payload)?;

        let prompt = QuizPromptTemplate::compose(&self.persona, &answers);
        debug!(
            answers = answers.len(),
            model = %self.params.model,
            "Requesting quiz analysis"
        );

        let session = self
            .gateway
            .create_session_with_system_prompt(&self.params.model, prompt.system.as_str())
            .await?;
        let text = session.send(&prompt.user).await?;

        if text.is_empty() {
            return Err(AnalyzeFailure::EmptyResponse);
        }

        debug!(chars = text.len(), "Quiz analysis received");
        Ok(QuizAnalysis::new(text))
    }
}
