use crate::domain::LoadError;

/// Port for retrieving the raw catalog document.
pub trait CatalogSource {
    /// Human-readable location, used in logs.
    fn location(&self) -> &str;

    /// Retrieve the document body. Called once per session.
    fn fetch(&self) -> Result<String, LoadError>;
}

impl<S: CatalogSource + ?Sized> CatalogSource for Box<S> {
    fn location(&self) -> &str {
        (**self).location()
    }

    fn fetch(&self) -> Result<String, LoadError> {
        (**self).fetch()
    }
}
