//! Configuration loading from the working directory.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::domain::{AppError, CONFIG_FILE, Config};

/// Load configuration.
///
/// An explicit path must exist. Without one, `promptdeck.toml` in `dir` is used
/// when present and defaults apply otherwise.
pub fn load_config(explicit: Option<&Path>, dir: &Path) -> Result<Config, AppError> {
    let path = match explicit {
        Some(path) => {
            if !path.is_file() {
                return Err(AppError::config_error(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            path.to_path_buf()
        }
        None => {
            let candidate = dir.join(CONFIG_FILE);
            if !candidate.is_file() {
                debug!("no {} in {}, using defaults", CONFIG_FILE, dir.display());
                return Ok(Config::default());
            }
            candidate
        }
    };

    debug!(path = %path.display(), "loading config");
    let content = fs::read_to_string(&path)?;
    Config::parse(&content)
}
