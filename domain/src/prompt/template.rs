//! Prompt templates for the quiz analysis

use super::persona::SystemPersona;
use crate::quiz::answers::QuizAnswers;

/// Header line preceding the numbered answers
const ANSWERS_HEADER: &str = "My answers to the quiz are:";

/// Persona plus user query, ready to send to the model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedPrompt {
    /// System-level instruction
    pub system: SystemPersona,
    /// User message
    pub user: String,
}

/// Templates for generating the quiz prompt
pub struct QuizPromptTemplate;

impl QuizPromptTemplate {
    /// User query listing the answers with 1-based numbering.
    ///
    /// ```
    /// use nakkla_domain::{QuizAnswers, QuizPromptTemplate};
    ///
    /// let answers = QuizAnswers::try_new(vec!["Fight".into(), "Steal".into()]).unwrap();
    /// assert_eq!(
    ///     QuizPromptTemplate::user_query(&answers),
    ///     "My answers to the quiz are:\n\n1. Fight\n2. Steal"
    /// );
    /// ```
    pub fn user_query(answers: &QuizAnswers) -> String {
        let lines = answers
            .iter()
            .enumerate()
            .map(|(i, answer)| format!("{}. {}", i + 1, answer))
            .collect::<Vec<_>>()
            .join("\n");

        format!("{}\n\n{}", ANSWERS_HEADER, lines)
    }

    /// Combine the persona with the answers
    pub fn compose(persona: &SystemPersona, answers: &QuizAnswers) -> ComposedPrompt {
        ComposedPrompt {
            system: persona.clone(),
            user: Self::user_query(answers),
        }
    }
}
