//! Quiz answers value object

use crate::core::error::DomainError;
use serde_json::Value;

/// Ordered answers to the quiz (Value Object)
///
/// Always holds at least one answer. Individual answers are free text
/// and are not inspected here; empty strings are valid answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizAnswers {
    answers: Vec<String>,
}

impl QuizAnswers {
    /// Name of the payload field carrying the answers
    pub const FIELD: &'static str = "userAnswers";

    /// Create answers from an already-typed list
    pub fn try_new(answers: Vec<String>) -> Result<Self, DomainError> {
        if answers.is_empty() {
            return Err(DomainError::EmptyAnswers);
        }
        Ok(Self { answers })
    }

    /// Extract answers from a JSON request payload.
    ///
    /// The payload must be an object whose `userAnswers` field is a
    /// non-empty array of strings. A `null` field counts as missing.
    pub fn from_payload(payload: &Value) -> Result<Self, DomainError> {
        let field = match payload.get(Self::FIELD) {
            None | Some(Value::Null) => return Err(DomainError::MissingAnswers),
            Some(field) => field,
        };

        let items = field.as_array().ok_or(DomainError::AnswersNotArray)?;

        let answers = items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                item.as_str()
                    .map(str::to_string)
                    .ok_or(DomainError::NonStringAnswer { index })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::try_new(answers)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.answers
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.answers.iter()
    }
}

impl<'a> IntoIterator for &'a QuizAnswers {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
