//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::PathBuf;

use tracing::debug;

use crate::app::commands::{copy, export, list, load, tags};
use crate::app::{AppContext, config::load_config};
use crate::ports::CatalogSource;
use crate::services::{ArboardClipboard, open_catalog_source};

pub use crate::app::commands::export::ExportOptions;
pub use crate::app::commands::list::ListOptions;
pub use crate::domain::{AppError, CopyLabel, FilterState, Page};

/// Context wired to the real catalog source and the system clipboard.
pub type SystemContext = AppContext<Box<dyn CatalogSource>, ArboardClipboard>;

/// Where the catalog and the configuration come from.
#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    /// Overrides `catalog.source` from the config file.
    pub source: Option<String>,
    /// Explicit config file; otherwise `promptdeck.toml` in `dir` if present.
    pub config: Option<PathBuf>,
    /// Directory used for config lookup and relative catalog paths. Defaults
    /// to the current directory.
    pub dir: Option<PathBuf>,
}

/// Create a context from session options.
pub fn create_context(options: &SessionOptions) -> Result<SystemContext, AppError> {
    let dir = match &options.dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir()?,
    };
    let mut config = load_config(options.config.as_deref(), &dir)?;
    if let Some(source) = &options.source {
        config.catalog.source = source.clone();
        config.validate()?;
    }

    let location = resolve_location(&config.catalog.source, &dir);
    debug!(source = %location, "using catalog source");
    let source = open_catalog_source(&location, config.catalog.timeout())?;

    Ok(AppContext::new(source, ArboardClipboard::new(), config))
}

/// Load the catalog and render the cards matching `list_options`.
pub fn list(options: &SessionOptions, list_options: &ListOptions) -> Result<Page, AppError> {
    let ctx = create_context(options)?;
    Ok(list::execute(&ctx, list_options))
}

/// Distinct tags of the catalog, sorted.
pub fn tags(options: &SessionOptions) -> Result<Vec<String>, AppError> {
    let ctx = create_context(options)?;
    tags::execute(&ctx)
}

/// Copy one record's code to the system clipboard.
pub fn copy(options: &SessionOptions, id: &str) -> Result<CopyLabel, AppError> {
    let mut ctx = create_context(options)?;
    copy::execute(&mut ctx, id)
}

/// Render the filtered catalog as a static HTML document.
pub fn export(options: &SessionOptions, export_options: &ExportOptions) -> Result<String, AppError> {
    let ctx = create_context(options)?;
    export::execute(&ctx, export_options)
}

/// Load the catalog for an interactive session.
pub fn open_session(options: &SessionOptions) -> Result<(SystemContext, Page), AppError> {
    let ctx = create_context(options)?;
    let page = load::execute(&ctx);
    Ok((ctx, page))
}

/// Relative file paths are taken from `dir`; URLs and absolute paths pass through.
fn resolve_location(location: &str, dir: &std::path::Path) -> String {
    if location.contains("://") {
        return location.to_string();
    }
    let path = std::path::Path::new(location);
    if path.is_absolute() { location.to_string() } else { dir.join(path).display().to_string() }
}
