use crate::domain::Config;
use crate::ports::{CatalogSource, ClipboardWriter};

/// Application context holding dependencies for command execution.
pub struct AppContext<S: CatalogSource, C: ClipboardWriter> {
    source: S,
    clipboard: C,
    config: Config,
}

impl<S: CatalogSource, C: ClipboardWriter> AppContext<S, C> {
    /// Create a new application context.
    pub fn new(source: S, clipboard: C, config: Config) -> Self {
        Self { source, clipboard, config }
    }

    /// Get a reference to the catalog source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Get a mutable reference to the clipboard writer.
    pub fn clipboard_mut(&mut self) -> &mut C {
        &mut self.clipboard
    }

    /// Get a reference to the loaded configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }
}
