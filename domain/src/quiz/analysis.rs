//! Analysis returned to the caller

use serde::{Deserialize, Serialize};

/// The model's analysis of a set of answers.
///
/// The text is passed through unmodified; it is expected to be Markdown
/// with the matching character's name bolded on its own line, but that
/// format is not checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizAnalysis {
    pub analysis: String,
}

impl QuizAnalysis {
    pub fn new(analysis: impl Into<String>) -> Self {
        Self {
            analysis: analysis.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.analysis
    }
}
