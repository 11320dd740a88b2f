//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`]: generative models the oracle can be pointed at
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod model;
