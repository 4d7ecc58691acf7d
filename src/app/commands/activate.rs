//! Single dispatcher for every activatable element on the page.

use std::time::Instant;

use tracing::{debug, warn};

use crate::domain::{CopyLabel, Page, RecordId, Target};
use crate::ports::ClipboardWriter;

/// What an activation did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    /// A copy button was pressed; the label it now shows.
    Copy { id: RecordId, label: CopyLabel },
    /// A card's code section was opened or closed.
    Toggled { id: RecordId, open: bool },
    /// Expand/collapse all, with the number of cards touched.
    AllSet { open: bool, cards: usize },
    /// The target id has no rendered card; nothing happened.
    NotRendered(RecordId),
}

/// Resolve `target` against the rendered cards and perform its action.
pub fn execute<C: ClipboardWriter>(
    page: &mut Page,
    clipboard: &mut C,
    target: Target,
    now: Instant,
) -> Activation {
    match target {
        Target::Copy(id) => copy(page, clipboard, id, now),
        Target::Toggle(id) => match page.toggle(&id) {
            Some(open) => Activation::Toggled { id, open },
            None => Activation::NotRendered(id),
        },
        Target::ExpandAll => Activation::AllSet { open: true, cards: page.set_all_open(true) },
        Target::CollapseAll => Activation::AllSet { open: false, cards: page.set_all_open(false) },
    }
}

fn copy<C: ClipboardWriter>(
    page: &mut Page,
    clipboard: &mut C,
    id: RecordId,
    now: Instant,
) -> Activation {
    let Some(code) = page.copy_payload(&id) else {
        return Activation::NotRendered(id);
    };

    let copied = match clipboard.write_text(code) {
        Ok(()) => {
            debug!(id = %id, bytes = code.len(), "copied code to clipboard");
            true
        }
        Err(err) => {
            warn!(id = %id, "clipboard write failed: {}", err);
            false
        }
    };

    match page.record_copy(&id, copied, now) {
        Some(label) => Activation::Copy { id, label },
        None => Activation::NotRendered(id),
    }
}
