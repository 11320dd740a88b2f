//! Application-level configuration.
//!
//! - [`AnalyzerParams`]: which model to call and how answers are screened

pub mod analyzer_params;

pub use analyzer_params::AnalyzerParams;
