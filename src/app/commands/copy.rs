use std::time::Instant;

use crate::app::AppContext;
use crate::app::commands::activate::{self, Activation};
use crate::app::commands::load::load_catalog;
use crate::domain::{AppError, CopyLabel, Page, RecordId, Target};
use crate::ports::{CatalogSource, ClipboardWriter};

/// Execute the copy command: press one record's copy button on a freshly
/// rendered, unfiltered page.
///
/// Returns the label the button shows afterwards; a clipboard failure is a
/// `Failed` label, not an error.
pub fn execute<S, C>(ctx: &mut AppContext<S, C>, id: &str) -> Result<CopyLabel, AppError>
where
    S: CatalogSource,
    C: ClipboardWriter,
{
    let catalog = load_catalog(ctx.source())?;
    let mut page = Page::loaded(catalog, ctx.config().copy.reset_delay());

    let target = Target::Copy(RecordId::new(id));
    match activate::execute(&mut page, ctx.clipboard_mut(), target, Instant::now()) {
        Activation::Copy { label, .. } => Ok(label),
        _ => Err(AppError::RecordNotFound(id.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Config, LoadError};
    use crate::testing::{MockCatalogSource, MockClipboard, SAMPLE_CATALOG};

    #[test]
    fn copies_code_for_id() {
        let mut ctx = AppContext::new(
            MockCatalogSource::with_body(SAMPLE_CATALOG),
            MockClipboard::new(),
            Config::default(),
        );

        assert_eq!(execute(&mut ctx, "1").unwrap(), CopyLabel::Copied);
        assert_eq!(ctx.clipboard_mut().last_written(), Some("c1"));
    }

    #[test]
    fn clipboard_failure_reports_failed_label() {
        let mut ctx = AppContext::new(
            MockCatalogSource::with_body(SAMPLE_CATALOG),
            MockClipboard::failing(),
            Config::default(),
        );

        assert_eq!(execute(&mut ctx, "2").unwrap(), CopyLabel::Failed);
    }

    #[test]
    fn unknown_id_is_not_found() {
        let mut ctx = AppContext::new(
            MockCatalogSource::with_body(SAMPLE_CATALOG),
            MockClipboard::new(),
            Config::default(),
        );

        let err = execute(&mut ctx, "3").unwrap_err();
        assert!(matches!(err, AppError::RecordNotFound(ref id) if id == "3"));
        assert!(ctx.clipboard_mut().written.is_empty());
    }

    #[test]
    fn load_failure_is_an_error() {
        let mut ctx =
            AppContext::new(MockCatalogSource::failing(404), MockClipboard::new(), Config::default());

        let err = execute(&mut ctx, "1").unwrap_err();
        assert!(matches!(err, AppError::CatalogLoad(LoadError::Status(404))));
    }
}
