//! promptdeck: browse a JSON prompt catalog as filterable cards and copy prompt
//! code to the clipboard.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use app::AppContext;
pub use app::api::{
    ExportOptions, ListOptions, SessionOptions, copy, create_context, export, list, open_session,
    tags,
};
pub use domain::{
    AppError, Catalog, CopyLabel, FilterState, LOAD_FAILED_MESSAGE, LoadError, Page, Record,
    RecordId, Target,
};
