//! Persona loading
//!
//! The persona is read once at startup, either from the file named by
//! `quiz.persona_path` or from the built-in loremaster text.

use nakkla_domain::SystemPersona;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum PersonaError {
    #[error("Failed to read persona file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Persona file {} is empty", path.display())]
    Empty { path: PathBuf },
}

/// Load the persona from `path`, or the built-in persona when `None`
pub fn load_persona(path: Option<&Path>) -> Result<SystemPersona, PersonaError> {
    let Some(path) = path else {
        info!("Using built-in loremaster persona");
        return Ok(SystemPersona::builtin());
    };

    let text = std::fs::read_to_string(path).map_err(|source| PersonaError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let persona = SystemPersona::new(&text).map_err(|_| PersonaError::Empty {
        path: path.to_path_buf(),
    })?;

    info!(path = %path.display(), chars = persona.as_str().len(), "Loaded persona file");
    Ok(persona)
}
