//! Google Gemini provider
//!
//! Implements the application's `LlmGateway` port on top of the
//! Generative Language REST API (`generateContent`).

mod gateway;
mod session;
mod types;

pub use gateway::{GeminiLlmGateway, GeminiSettings};
