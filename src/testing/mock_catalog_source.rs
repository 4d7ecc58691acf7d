use std::cell::Cell;

use crate::domain::LoadError;
use crate::ports::CatalogSource;

/// In-memory catalog source that counts fetches.
pub struct MockCatalogSource {
    body: Option<String>,
    status: Option<u16>,
    fetches: Cell<usize>,
}

impl MockCatalogSource {
    pub fn with_body(body: &str) -> Self {
        Self { body: Some(body.to_string()), status: None, fetches: Cell::new(0) }
    }

    /// A source whose server answers with `status`.
    pub fn failing(status: u16) -> Self {
        Self { body: None, status: Some(status), fetches: Cell::new(0) }
    }

    pub fn fetches(&self) -> usize {
        self.fetches.get()
    }
}

impl CatalogSource for MockCatalogSource {
    fn location(&self) -> &str {
        "mock://prompts.json"
    }

    fn fetch(&self) -> Result<String, LoadError> {
        self.fetches.set(self.fetches.get() + 1);
        match (&self.body, self.status) {
            (Some(body), _) => Ok(body.clone()),
            (None, Some(status)) => Err(LoadError::Status(status)),
            (None, None) => Err(LoadError::Transport("connection refused".to_string())),
        }
    }
}
