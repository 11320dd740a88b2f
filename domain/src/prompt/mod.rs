//! Prompts sent to the generative model
//!
//! - [`persona::SystemPersona`]: the loremaster system instruction
//! - [`template::QuizPromptTemplate`]: turns answers into the user query

pub mod persona;
pub mod template;

pub use persona::SystemPersona;
pub use template::{ComposedPrompt, QuizPromptTemplate};
