//! `.env` loading for local development
//!
//! Outside production a `.env` file in the working directory (or a parent)
//! is loaded into the process environment before configuration is resolved.
//! Variables already set in the environment are not overwritten.

use std::env;
use std::path::PathBuf;
use tracing::{debug, info};

/// Environment selector; `production` disables `.env` loading
const ENVIRONMENT_VAR: &str = "NAKKLA_ENV";

const PRODUCTION: &str = "production";

/// Whether a `.env` file should be read for the given `NAKKLA_ENV` value
fn should_load_env_file(environment: Option<&str>) -> bool {
    environment.map(str::trim) != Some(PRODUCTION)
}

/// Load `.env` unless `NAKKLA_ENV=production`.
///
/// Returns the path of the loaded file, or `None` when loading was skipped
/// or no file exists.
pub fn load_env_file() -> Result<Option<PathBuf>, dotenv::Error> {
    load_env_file_for(env::var(ENVIRONMENT_VAR).ok().as_deref())
}

/// Same as [`load_env_file`] with an explicit environment value
fn load_env_file_for(environment: Option<&str>) -> Result<Option<PathBuf>, dotenv::Error> {
    if !should_load_env_file(environment) {
        debug!("Skipping .env file in production");
        return Ok(None);
    }

    match dotenv::dotenv() {
        Ok(path) => {
            info!(path = %path.display(), "Loaded environment file");
            Ok(Some(path))
        }
        Err(e) if e.not_found() => Ok(None),
        Err(e) => Err(e),
    }
}
