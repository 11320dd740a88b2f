//! Server configuration from TOML (`[server]` section)

use serde::{Deserialize, Serialize};

/// Callable endpoint settings
///
/// # Example
///
/// ```toml
/// [server]
/// bind = "0.0.0.0:8080"
/// identity_header = "x-verified-uid"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServerConfig {
    /// Socket address to listen on
    pub bind: String,
    /// Header carrying the gateway-verified caller identity
    pub identity_header: String,
}

impl Default for FileServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:8080".to_string(),
            identity_header: "authorization".to_string(),
        }
    }
}
