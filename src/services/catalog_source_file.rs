use std::fs;
use std::path::PathBuf;

use crate::domain::LoadError;
use crate::ports::CatalogSource;

/// Reads the catalog document from a local file.
#[derive(Debug, Clone)]
pub struct FileCatalogSource {
    path: PathBuf,
    location: String,
}

impl FileCatalogSource {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        let path = path.into();
        let location = path.display().to_string();
        Self { path, location }
    }
}

impl CatalogSource for FileCatalogSource {
    fn location(&self) -> &str {
        &self.location
    }

    fn fetch(&self) -> Result<String, LoadError> {
        fs::read_to_string(&self.path)
            .map_err(|source| LoadError::Io { path: self.location.clone(), source })
    }
}
