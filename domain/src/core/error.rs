//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("userAnswers is missing")]
    MissingAnswers,

    #[error("userAnswers must be an array")]
    AnswersNotArray,

    #[error("userAnswers must not be empty")]
    EmptyAnswers,

    #[error("userAnswers[{index}] is not a string")]
    NonStringAnswer { index: usize },

    #[error("Too many answers: {count} (max {max})")]
    TooManyAnswers { count: usize, max: usize },

    #[error("Answer {number} is too long: {chars} characters (max {max})")]
    AnswerTooLong {
        number: usize,
        chars: usize,
        max: usize,
    },

    #[error("System persona cannot be empty")]
    EmptyPersona,
}

impl DomainError {
    /// Check if this error comes from the shape of the payload
    /// (as opposed to a configured answer policy).
    pub fn is_shape_error(&self) -> bool {
        matches!(
            self,
            DomainError::MissingAnswers
                | DomainError::AnswersNotArray
                | DomainError::EmptyAnswers
                | DomainError::NonStringAnswer { .. }
        )
    }
}
