use crate::app::AppContext;
use crate::app::commands::load::load_catalog;
use crate::domain::AppError;
use crate::ports::{CatalogSource, ClipboardWriter};

/// Execute the tags command: the sorted, duplicate-free tag universe.
pub fn execute<S, C>(ctx: &AppContext<S, C>) -> Result<Vec<String>, AppError>
where
    S: CatalogSource,
    C: ClipboardWriter,
{
    let catalog = load_catalog(ctx.source())?;
    Ok(catalog.tag_universe())
}
