mod catalog_source_file;
mod catalog_source_http;
mod clipboard_arboard;
pub mod html_export;

use std::time::Duration;

use url::Url;

use crate::domain::AppError;
use crate::ports::CatalogSource;

pub use catalog_source_file::FileCatalogSource;
pub use catalog_source_http::HttpCatalogSource;
pub use clipboard_arboard::ArboardClipboard;
pub use html_export::render_html;

/// Pick the catalog source for a configured location.
///
/// `http://` and `https://` URLs are fetched over the network, `file://` URLs
/// and anything that does not parse as an absolute URL are read from disk.
pub fn open_catalog_source(
    location: &str,
    timeout: Duration,
) -> Result<Box<dyn CatalogSource>, AppError> {
    match Url::parse(location) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => {
            Ok(Box::new(HttpCatalogSource::new(url, timeout)?))
        }
        Ok(url) if url.scheme() == "file" => {
            let path = url.to_file_path().map_err(|_| {
                AppError::config_error(format!("Invalid file URL for catalog: {}", location))
            })?;
            Ok(Box::new(FileCatalogSource::new(path)))
        }
        _ => Ok(Box::new(FileCatalogSource::new(location))),
    }
}
