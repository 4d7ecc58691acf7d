//! Page state: the loaded catalog, the filter controls and the rendered cards.

use std::time::{Duration, Instant};

use crate::domain::{Catalog, CopyButton, CopyLabel, FilterState, Record, RecordId};

/// Empty-state text shown when the catalog failed to load.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load data. Please check the prompts.json file.";

/// Empty-state text shown when no record matches the filters.
pub const NO_MATCHES_MESSAGE: &str = "No prompts match the current filters.";

/// Something on the page a user can activate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Copy(RecordId),
    Toggle(RecordId),
    ExpandAll,
    CollapseAll,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub visible: bool,
    pub message: String,
}

/// One rendered card. Cards are rebuilt on every render, so a fresh card is
/// collapsed and its copy button shows the default label.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Card {
    index: usize,
    open: bool,
    copy: CopyButton,
}

/// Read-only view of a rendered card.
#[derive(Debug, Clone, Copy)]
pub struct CardView<'a> {
    pub record: &'a Record,
    pub open: bool,
    pub label: CopyLabel,
}

/// Application state for one browsing session.
///
/// The catalog is installed once at construction and never changes; the filter
/// inputs and the rendered cards change on every event.
#[derive(Debug, Clone)]
pub struct Page {
    catalog: Catalog,
    tag_options: Vec<String>,
    filter: FilterState,
    cards: Vec<Card>,
    empty_state: EmptyState,
    reset_delay: Duration,
    load_failed: bool,
}

impl Page {
    /// Install a loaded catalog, build the tag options and render once.
    pub fn loaded(catalog: Catalog, reset_delay: Duration) -> Self {
        let tag_options = catalog.tag_universe();
        let mut page = Self {
            catalog,
            tag_options,
            filter: FilterState::default(),
            cards: Vec::new(),
            empty_state: EmptyState { visible: false, message: NO_MATCHES_MESSAGE.to_string() },
            reset_delay,
            load_failed: false,
        };
        page.render();
        page
    }

    /// A page whose catalog could not be loaded: no records, no tag options,
    /// and the failure message in the empty-state area.
    pub fn failed(reset_delay: Duration) -> Self {
        Self {
            catalog: Catalog::default(),
            tag_options: Vec::new(),
            filter: FilterState::default(),
            cards: Vec::new(),
            empty_state: EmptyState { visible: true, message: LOAD_FAILED_MESSAGE.to_string() },
            reset_delay,
            load_failed: true,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn tag_options(&self) -> &[String] {
        &self.tag_options
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn empty_state(&self) -> &EmptyState {
        &self.empty_state
    }

    pub fn load_failed(&self) -> bool {
        self.load_failed
    }

    /// Search box input.
    pub fn set_query<S: Into<String>>(&mut self, query: S) {
        self.filter.query = query.into();
        self.render();
    }

    /// Tag selector change. An empty tag clears the constraint.
    pub fn set_tag<S: Into<String>>(&mut self, tag: S) {
        self.filter.tag = tag.into();
        self.render();
    }

    pub fn set_filter(&mut self, filter: FilterState) {
        self.filter = filter;
        self.render();
    }

    /// Rebuild the card list from the catalog and the current filter.
    pub fn render(&mut self) {
        self.cards = self
            .catalog
            .matching_indices(&self.filter)
            .into_iter()
            .map(|index| Card { index, open: false, copy: CopyButton::default() })
            .collect();
        self.empty_state.visible = self.cards.is_empty();
    }

    pub fn cards(&self) -> impl Iterator<Item = CardView<'_>> {
        self.cards.iter().map(|card| CardView {
            record: &self.catalog.records()[card.index],
            open: card.open,
            label: card.copy.label(),
        })
    }

    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    pub fn visible_ids(&self) -> Vec<&RecordId> {
        self.cards().map(|card| &card.record.id).collect()
    }

    pub fn card(&self, id: &RecordId) -> Option<CardView<'_>> {
        self.cards().find(|card| &card.record.id == id)
    }

    /// Open or close every rendered card. Returns how many cards were touched.
    pub fn set_all_open(&mut self, open: bool) -> usize {
        for card in &mut self.cards {
            card.open = open;
        }
        self.cards.len()
    }

    /// Flip one rendered card's code section. `None` if the card is not rendered.
    pub fn toggle(&mut self, id: &RecordId) -> Option<bool> {
        let index = self.position(id)?;
        let card = &mut self.cards[index];
        card.open = !card.open;
        Some(card.open)
    }

    /// Code payload behind a rendered card's copy button.
    pub fn copy_payload(&self, id: &RecordId) -> Option<&str> {
        self.card(id).map(|card| card.record.code.as_str())
    }

    /// Record a clipboard outcome on a rendered card's copy button.
    pub fn record_copy(&mut self, id: &RecordId, copied: bool, now: Instant) -> Option<CopyLabel> {
        let index = self.position(id)?;
        let delay = self.reset_delay;
        Some(self.cards[index].copy.record(copied, now, delay))
    }

    /// Apply every copy-button revert that is due. Returns how many labels changed.
    pub fn tick(&mut self, now: Instant) -> usize {
        let mut changed = 0;
        for card in &mut self.cards {
            if card.copy.tick(now) {
                changed += 1;
            }
        }
        changed
    }

    fn position(&self, id: &RecordId) -> Option<usize> {
        let records = self.catalog.records();
        self.cards.iter().position(|card| &records[card.index].id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DEFAULT_RESET_DELAY;

    fn sample() -> Catalog {
        Catalog::parse(
            r#"[
                {"id": 1, "title": "Alpha", "body": "b", "tags": ["x"], "code": "c1"},
                {"id": 2, "title": "Beta", "body": "b", "tags": ["y"], "code": "c2"}
            ]"#,
        )
        .unwrap()
        .catalog
    }

    fn ids(page: &Page) -> Vec<String> {
        page.visible_ids().into_iter().map(|id| id.to_string()).collect()
    }

    #[test]
    fn initial_render_shows_all_in_order() {
        let page = Page::loaded(sample(), DEFAULT_RESET_DELAY);
        assert_eq!(ids(&page), vec!["1", "2"]);
        assert!(!page.empty_state().visible);
        assert_eq!(page.tag_options(), ["x", "y"]);
    }

    #[test]
    fn query_and_tag_events_rerender() {
        let mut page = Page::loaded(sample(), DEFAULT_RESET_DELAY);

        page.set_query("beta");
        assert_eq!(ids(&page), vec!["2"]);

        page.set_query("");
        page.set_tag("x");
        assert_eq!(ids(&page), vec!["1"]);

        page.set_filter(FilterState::new("zzz", ""));
        assert!(ids(&page).is_empty());
        assert!(page.empty_state().visible);
        assert_eq!(page.empty_state().message, NO_MATCHES_MESSAGE);
    }

    #[test]
    fn render_is_idempotent() {
        let mut page = Page::loaded(sample(), DEFAULT_RESET_DELAY);
        page.set_query("b");
        let first = ids(&page);
        page.render();
        assert_eq!(ids(&page), first);
    }

    #[test]
    fn failed_page_shows_message_and_no_cards() {
        let mut page = Page::failed(DEFAULT_RESET_DELAY);
        assert!(page.load_failed());
        assert_eq!(page.card_count(), 0);
        assert!(page.tag_options().is_empty());
        assert_eq!(page.empty_state().message, LOAD_FAILED_MESSAGE);

        page.set_query("anything");
        assert!(page.empty_state().visible);
        assert_eq!(page.empty_state().message, LOAD_FAILED_MESSAGE);
    }

    #[test]
    fn expand_and_collapse_touch_only_rendered_cards() {
        let mut page = Page::loaded(sample(), DEFAULT_RESET_DELAY);
        page.set_tag("x");
        assert_eq!(page.set_all_open(true), 1);
        assert!(page.cards().all(|card| card.open));

        // A re-render rebuilds cards collapsed, including the one filtered back in.
        page.set_tag("");
        assert!(page.cards().all(|card| !card.open));

        page.set_all_open(true);
        page.set_all_open(false);
        assert!(page.cards().all(|card| !card.open));
    }

    #[test]
    fn toggle_flips_single_card() {
        let mut page = Page::loaded(sample(), DEFAULT_RESET_DELAY);
        let id = RecordId::new("2");
        assert_eq!(page.toggle(&id), Some(true));
        assert!(!page.card(&RecordId::new("1")).unwrap().open);
        assert_eq!(page.toggle(&id), Some(false));

        page.set_tag("x");
        assert_eq!(page.toggle(&id), None);
    }

    #[test]
    fn copy_label_reverts_after_delay() {
        let mut page = Page::loaded(sample(), DEFAULT_RESET_DELAY);
        let id = RecordId::new("1");
        let now = Instant::now();

        assert_eq!(page.copy_payload(&id), Some("c1"));
        assert_eq!(page.record_copy(&id, true, now), Some(CopyLabel::Copied));
        assert_eq!(page.tick(now), 0);
        assert_eq!(page.card(&id).unwrap().label.as_str(), "Copied!");

        assert_eq!(page.tick(now + DEFAULT_RESET_DELAY), 1);
        assert_eq!(page.card(&id).unwrap().label.as_str(), "Copy");
        assert_eq!(page.tick(now + DEFAULT_RESET_DELAY * 2), 0);
    }

    #[test]
    fn copy_targets_only_rendered_cards() {
        let mut page = Page::loaded(sample(), DEFAULT_RESET_DELAY);
        page.set_tag("y");
        let hidden = RecordId::new("1");
        assert_eq!(page.copy_payload(&hidden), None);
        assert_eq!(page.record_copy(&hidden, true, Instant::now()), None);
    }
}
