pub mod catalog;
pub mod config;
pub mod copy_button;
pub mod error;
pub mod filter;
pub mod page;
pub mod record;

pub use catalog::{Catalog, ParsedCatalog};
pub use config::{
    BodyMode, CONFIG_FILE, CatalogConfig, Config, CopyConfig, DEFAULT_SOURCE, MAX_TIMEOUT_SECS,
};
pub use copy_button::{
    COPIED_LABEL, COPY_LABEL, CopyButton, CopyLabel, DEFAULT_RESET_DELAY, FAILED_LABEL,
};
pub use error::{AppError, LoadError};
pub use filter::{FilterState, Matcher};
pub use page::{CardView, EmptyState, LOAD_FAILED_MESSAGE, NO_MATCHES_MESSAGE, Page, Target};
pub use record::{MalformedRecord, Record, RecordId};
