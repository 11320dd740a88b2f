//! Domain layer for nakkla-oracle
//!
//! This crate contains the value objects of the quiz analysis flow.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Quiz
//!
//! - **Quiz answers**: the ordered, non-empty list of free-text answers a
//!   caller submits
//! - **Caller identity**: an opaque token attached by the hosting gateway
//! - **Answer policy**: optional limits on answer count and length
//!   (permissive unless configured)
//!
//! ## Prompt
//!
//! - **System persona**: the loremaster instructions sent with every request
//! - **Composed prompt**: persona plus the numbered answers

pub mod core;
pub mod prompt;
pub mod quiz;

// Re-export commonly used types
pub use core::{error::DomainError, model::Model};
pub use prompt::{ComposedPrompt, QuizPromptTemplate, SystemPersona};
pub use quiz::{AnswerPolicy, CallerIdentity, QuizAnalysis, QuizAnswers};
