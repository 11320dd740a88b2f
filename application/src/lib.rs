//! Application layer for nakkla-oracle
//!
//! This crate contains the quiz analysis use case, the port it talks to the
//! generative model through, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::AnalyzerParams;
pub use ports::llm_gateway::{GatewayError, LlmGateway, LlmSession};
pub use use_cases::analyze_quiz::{
    AnalyzeQuizError, AnalyzeQuizInput, AnalyzeQuizUseCase, ErrorKind,
};
