//! Analyzer parameters: use case behavior control.
//!
//! [`AnalyzerParams`] groups the static parameters that control
//! [`AnalyzeQuizUseCase`](crate::use_cases::analyze_quiz::AnalyzeQuizUseCase).
//! They are read once at startup and never change afterwards.

use nakkla_domain::{AnswerPolicy, Model};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzerParams {
    /// Model that produces the analysis.
    pub model: Model,
    /// Limits applied to incoming answers (permissive by default).
    pub answer_policy: AnswerPolicy,
}

impl AnalyzerParams {
    pub fn with_model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }

    pub fn with_answer_policy(mut self, policy: AnswerPolicy) -> Self {
        self.answer_policy = policy;
        self
    }
}
