//! Quiz configuration from TOML (`[quiz]` section)

use nakkla_domain::AnswerPolicy;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Persona and answer limits.
///
/// # Example
///
/// ```toml
/// [quiz]
/// persona_path = "persona.txt"   # replaces the built-in loremaster text
/// max_answers = 20
/// max_answer_chars = 2000
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileQuizConfig {
    /// File holding a custom system persona
    pub persona_path: Option<PathBuf>,
    /// Maximum number of answers per request
    pub max_answers: Option<usize>,
    /// Maximum characters per answer
    pub max_answer_chars: Option<usize>,
}

impl FileQuizConfig {
    pub fn answer_policy(&self) -> AnswerPolicy {
        AnswerPolicy {
            max_answers: self.max_answers,
            max_answer_chars: self.max_answer_chars,
        }
    }
}
