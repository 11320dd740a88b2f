//! Presentation-level configuration
//!
//! Settings of the callable HTTP endpoint.

use serde::{Deserialize, Serialize};

/// Endpoint configuration for the presentation layer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    /// Header carrying the caller identity verified by the hosting gateway
    pub identity_header: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            identity_header: "authorization".to_string(),
        }
    }
}

impl EndpointConfig {
    pub fn with_identity_header(mut self, header: impl Into<String>) -> Self {
        self.identity_header = header.into();
        self
    }
}
