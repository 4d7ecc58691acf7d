use crate::app::AppContext;
use crate::app::commands::load;
use crate::domain::{FilterState, Page};
use crate::ports::{CatalogSource, ClipboardWriter};

/// Options for a one-shot render of the catalog.
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    pub filter: FilterState,
    /// Open every rendered card's code section.
    pub expand: bool,
}

/// Execute the list command: load, apply the filter controls, render.
pub fn execute<S, C>(ctx: &AppContext<S, C>, options: &ListOptions) -> Page
where
    S: CatalogSource,
    C: ClipboardWriter,
{
    let mut page = load::execute(ctx);
    if !options.filter.is_unfiltered() {
        page.set_filter(options.filter.clone());
    }
    if options.expand {
        page.set_all_open(true);
    }
    page
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Config, LOAD_FAILED_MESSAGE, NO_MATCHES_MESSAGE};
    use crate::testing::{MockCatalogSource, MockClipboard, SAMPLE_CATALOG};

    fn ctx(source: MockCatalogSource) -> AppContext<MockCatalogSource, MockClipboard> {
        AppContext::new(source, MockClipboard::new(), Config::default())
    }

    fn ids(page: &Page) -> Vec<String> {
        page.visible_ids().into_iter().map(|id| id.to_string()).collect()
    }

    #[test]
    fn unfiltered_lists_everything_in_order() {
        let page = execute(&ctx(MockCatalogSource::with_body(SAMPLE_CATALOG)), &ListOptions::default());
        assert_eq!(ids(&page), vec!["1", "2"]);
        assert!(page.cards().all(|card| !card.open));
    }

    #[test]
    fn query_and_tag_filters_apply() {
        let ctx = ctx(MockCatalogSource::with_body(SAMPLE_CATALOG));

        let by_query = ListOptions { filter: FilterState::new("beta", ""), expand: false };
        assert_eq!(ids(&execute(&ctx, &by_query)), vec!["2"]);

        let by_tag = ListOptions { filter: FilterState::new("", "x"), expand: true };
        let page = execute(&ctx, &by_tag);
        assert_eq!(ids(&page), vec!["1"]);
        assert!(page.cards().all(|card| card.open));
    }

    #[test]
    fn no_match_shows_empty_state() {
        let ctx = ctx(MockCatalogSource::with_body(SAMPLE_CATALOG));
        let options = ListOptions { filter: FilterState::new("zzz", ""), expand: false };

        let page = execute(&ctx, &options);
        assert_eq!(page.card_count(), 0);
        assert!(page.empty_state().visible);
        assert_eq!(page.empty_state().message, NO_MATCHES_MESSAGE);
    }

    #[test]
    fn load_failure_keeps_failure_message_after_filtering() {
        let ctx = ctx(MockCatalogSource::failing(500));
        let options = ListOptions { filter: FilterState::new("alpha", ""), expand: true };

        let page = execute(&ctx, &options);
        assert!(page.load_failed());
        assert_eq!(page.card_count(), 0);
        assert_eq!(page.empty_state().message, LOAD_FAILED_MESSAGE);
    }
}
