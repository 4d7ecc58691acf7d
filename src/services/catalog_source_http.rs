//! Catalog retrieval over HTTP using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use url::Url;

use crate::domain::{AppError, LoadError};
use crate::ports::CatalogSource;

/// Fetches the catalog document with a single GET request.
#[derive(Debug, Clone)]
pub struct HttpCatalogSource {
    url: Url,
    location: String,
    client: Client,
}

impl HttpCatalogSource {
    pub fn new(url: Url, timeout: Duration) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { location: url.to_string(), url, client })
    }
}

impl CatalogSource for HttpCatalogSource {
    fn location(&self) -> &str {
        &self.location
    }

    fn fetch(&self) -> Result<String, LoadError> {
        let response = self
            .client
            .get(self.url.clone())
            .header(ACCEPT, "application/json")
            .send()
            .map_err(|e| LoadError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status(status.as_u16()));
        }

        response.text().map_err(|e| LoadError::Transport(e.to_string()))
    }
}
