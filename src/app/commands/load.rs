//! Catalog loading: runs once per session and installs the result into a page.

use tracing::{error, info, warn};

use crate::app::AppContext;
use crate::domain::{Catalog, LoadError, Page};
use crate::ports::{CatalogSource, ClipboardWriter};

/// Fetch and validate the catalog. Malformed elements are logged and skipped.
pub fn load_catalog<S: CatalogSource + ?Sized>(source: &S) -> Result<Catalog, LoadError> {
    let body = source.fetch()?;
    let parsed = Catalog::parse(&body)?;

    for skipped in &parsed.skipped {
        warn!(source = source.location(), "skipping malformed {}", skipped);
    }
    info!(
        source = source.location(),
        records = parsed.catalog.len(),
        skipped = parsed.skipped.len(),
        "catalog loaded"
    );

    Ok(parsed.catalog)
}

/// Execute the load step.
///
/// Never fails: a load error yields a page showing the fixed failure message
/// and no cards.
pub fn execute<S, C>(ctx: &AppContext<S, C>) -> Page
where
    S: CatalogSource,
    C: ClipboardWriter,
{
    let reset_delay = ctx.config().copy.reset_delay();
    match load_catalog(ctx.source()) {
        Ok(catalog) => Page::loaded(catalog, reset_delay),
        Err(err) => {
            error!(source = ctx.source().location(), "failed to load catalog: {}", err);
            Page::failed(reset_delay)
        }
    }
}
