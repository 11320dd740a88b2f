//! Presentation layer for nakkla-oracle
//!
//! This crate contains the CLI definition and the callable HTTP endpoint
//! that exposes the quiz analysis use case.

pub mod cli;
pub mod config;
pub mod http;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use config::EndpointConfig;
pub use http::{CallableServer, serve};
