//! Answer policy
//!
//! Limits on how many answers a caller may submit and how long each may be.
//! Both limits are off by default: any non-empty list of strings is accepted.

use super::answers::QuizAnswers;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnswerPolicy {
    /// Maximum number of answers per request
    pub max_answers: Option<usize>,
    /// Maximum characters (Unicode scalar values) per answer
    pub max_answer_chars: Option<usize>,
}

impl AnswerPolicy {
    /// Policy that accepts every answer list
    pub fn permissive() -> Self {
        Self::default()
    }

    pub fn with_max_answers(mut self, max: usize) -> Self {
        self.max_answers = Some(max);
        self
    }

    pub fn with_max_answer_chars(mut self, max: usize) -> Self {
        self.max_answer_chars = Some(max);
        self
    }

    pub fn is_permissive(&self) -> bool {
        self.max_answers.is_none() && self.max_answer_chars.is_none()
    }

    /// Check answers against the configured limits
    pub fn check(&self, answers: &QuizAnswers) -> Result<(), DomainError> {
        if let Some(max) = self.max_answers {
            if answers.len() > max {
                return Err(DomainError::TooManyAnswers {
                    count: answers.len(),
                    max,
                });
            }
        }

        if let Some(max) = self.max_answer_chars {
            for (i, answer) in answers.iter().enumerate() {
                let chars = answer.chars().count();
                if chars > max {
                    return Err(DomainError::AnswerTooLong {
                        number: i + 1,
                        chars,
                        max,
                    });
                }
            }
        }

        Ok(())
    }
}
