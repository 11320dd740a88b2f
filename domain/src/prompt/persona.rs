//! System persona
//!
//! The loremaster persona describes the world of Oram, the twelve Drakkaen
//! Nakkla and the task the model has to perform. It is sent as the system
//! instruction of every request.

use crate::core::error::DomainError;
use std::sync::{Arc, LazyLock};

/// Built-in persona text.
const LOREMASTER: &str = include_str!("loremaster.txt");

static BUILTIN: LazyLock<SystemPersona> = LazyLock::new(|| SystemPersona {
    text: Arc::from(LOREMASTER),
});

/// Immutable persona text shared by all requests.
///
/// Cloning is cheap (reference counted); the text itself is never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemPersona {
    text: Arc<str>,
}

impl SystemPersona {
    /// Create a persona from custom text (e.g. loaded from a file)
    pub fn new(text: impl AsRef<str>) -> Result<Self, DomainError> {
        let text = text.as_ref().trim();
        if text.is_empty() {
            return Err(DomainError::EmptyPersona);
        }
        Ok(Self {
            text: Arc::from(text),
        })
    }

    /// The built-in loremaster persona
    pub fn builtin() -> Self {
        BUILTIN.clone()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl Default for SystemPersona {
    fn default() -> Self {
        Self::builtin()
    }
}
