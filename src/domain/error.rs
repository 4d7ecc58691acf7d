use std::io;

use thiserror::Error;

/// Why a catalog could not be loaded.
///
/// Every variant is shown to the user as the same fixed message
/// (see [`LOAD_FAILED_MESSAGE`](crate::domain::LOAD_FAILED_MESSAGE)); the detail
/// only reaches the log.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The request never produced a response.
    #[error("HTTP request failed: {0}")]
    Transport(String),

    /// The server answered with a non-success status.
    #[error("HTTP error! status: {0}")]
    Status(u16),

    /// Reading a local catalog file failed.
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    /// The body is not valid JSON.
    #[error("Failed to parse catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// The document parsed, but its top level is not an array.
    #[error("Catalog must be a JSON array, found {0}")]
    NotAnArray(&'static str),
}

/// Library-wide error type for promptdeck operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Configuration file parsed but holds invalid values.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// The catalog could not be loaded.
    #[error(transparent)]
    CatalogLoad(#[from] LoadError),

    /// No rendered card carries this record id.
    #[error("Record '{0}' not found")]
    RecordNotFound(String),

    /// Clipboard could not be opened or written.
    #[error("Clipboard error: {0}")]
    ClipboardError(String),

    /// HTML template rendering failed.
    #[error("Render error: {0}")]
    Render(#[from] minijinja::Error),

    /// Interactive prompt failed.
    #[error("Prompt failed: {0}")]
    Prompt(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
