//! Plain-text rendering of a page for the terminal.

use std::borrow::Cow;
use std::io::{self, Write};

use crate::domain::{CardView, Page};

const INDENT: &str = "    ";

/// Write the page's cards, or its empty-state message when no card is shown.
pub fn write_page<W: Write>(out: &mut W, page: &Page) -> io::Result<()> {
    if page.empty_state().visible {
        writeln!(out, "{}", page.empty_state().message)?;
        return Ok(());
    }

    for (i, card) in page.cards().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        write_card(out, &card)?;
    }
    Ok(())
}

pub fn write_card<W: Write>(out: &mut W, card: &CardView<'_>) -> io::Result<()> {
    let record = card.record;

    let mut header = format!("[{}] {}", sanitize(record.id.as_str()), sanitize(&record.title));
    for tag in &record.tags {
        header.push_str("  #");
        header.push_str(&sanitize(tag));
    }
    writeln!(out, "{}", header)?;

    for line in sanitize(&record.body).lines() {
        writeln!(out, "{}{}", INDENT, line)?;
    }

    let marker = if card.open { "▾ Code" } else { "▸ Show code" };
    writeln!(out, "{}{}  [{}]", INDENT, marker, card.label.as_str())?;
    if card.open {
        for line in sanitize(&record.code).lines() {
            writeln!(out, "{}│ {}", INDENT, line)?;
        }
    }
    Ok(())
}

/// Replace control characters other than newline and tab, so catalog text
/// cannot emit terminal escape sequences.
pub fn sanitize(text: &str) -> Cow<'_, str> {
    let is_unsafe = |c: char| c.is_control() && c != '\n' && c != '\t';
    if !text.chars().any(is_unsafe) {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.chars().map(|c| if is_unsafe(c) { '\u{FFFD}' } else { c }).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Catalog, DEFAULT_RESET_DELAY, LOAD_FAILED_MESSAGE, RecordId};
    use std::time::Instant;

    fn render(page: &Page) -> String {
        let mut out = Vec::new();
        write_page(&mut out, page).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn page() -> Page {
        let catalog = Catalog::parse(
            r#"[
                {"id": 1, "title": "Alpha", "body": "first\nsecond", "tags": ["x", "y"], "code": "line1\nline2"},
                {"id": 2, "title": "Beta", "body": "b", "tags": [], "code": "c2"}
            ]"#,
        )
        .unwrap()
        .catalog;
        Page::loaded(catalog, DEFAULT_RESET_DELAY)
    }

    #[test]
    fn collapsed_cards_hide_code() {
        let text = render(&page());
        assert!(text.starts_with("[1] Alpha  #x  #y\n    first\n    second\n    ▸ Show code  [Copy]\n"));
        assert!(text.contains("\n\n[2] Beta\n"));
        assert!(!text.contains("line1"));
    }

    #[test]
    fn open_card_shows_code_and_label() {
        let mut page = page();
        let id = RecordId::new("1");
        page.toggle(&id);
        page.record_copy(&id, true, Instant::now());

        let text = render(&page);
        assert!(text.contains("    ▾ Code  [Copied!]\n    │ line1\n    │ line2\n"));
    }

    #[test]
    fn empty_state_replaces_cards() {
        let mut page = page();
        page.set_query("zzz");
        assert_eq!(render(&page), format!("{}\n", page.empty_state().message));

        let failed = Page::failed(DEFAULT_RESET_DELAY);
        assert_eq!(render(&failed), format!("{}\n", LOAD_FAILED_MESSAGE));
    }

    #[test]
    fn sanitize_strips_escape_sequences() {
        assert!(matches!(sanitize("plain\ttext\n"), Cow::Borrowed(_)));
        assert_eq!(sanitize("red\u{1b}[31m"), "red\u{FFFD}[31m");
        assert_eq!(sanitize("<b>markup</b>"), "<b>markup</b>");
    }
}
