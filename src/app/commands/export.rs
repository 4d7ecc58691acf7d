use crate::app::AppContext;
use crate::app::commands::list::{self, ListOptions};
use crate::domain::AppError;
use crate::ports::{CatalogSource, ClipboardWriter};
use crate::services::html_export::{DEFAULT_TITLE, render_html};

#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub list: ListOptions,
    pub title: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self { list: ListOptions::default(), title: DEFAULT_TITLE.to_string() }
    }
}

/// Execute the export command: render the filtered page as static HTML.
///
/// A load failure still produces a document, showing the failure message.
pub fn execute<S, C>(ctx: &AppContext<S, C>, options: &ExportOptions) -> Result<String, AppError>
where
    S: CatalogSource,
    C: ClipboardWriter,
{
    let page = list::execute(ctx, &options.list);
    render_html(&page, ctx.config().render.body, &options.title)
}
