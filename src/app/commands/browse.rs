//! Interactive session input handling.
//!
//! Each line typed in the session is one UI event. Plain text is the search
//! box, `:`-prefixed words are the other controls.

use std::time::Instant;

use crate::app::commands::activate::{self, Activation};
use crate::domain::{FilterState, Page, RecordId, Target};
use crate::ports::ClipboardWriter;

pub const HELP: &str = "\
Type text to search titles, bodies, tags and code.
  :tag NAME    show only cards tagged NAME (:tag alone opens a picker)
  :clear       clear search text and tag
  :expand      open every card's code
  :collapse    close every card's code
  :open ID     open or close one card's code
  :copy ID     copy one card's code to the clipboard
  :help        show this help
  :quit        leave
Start a search with '::' to search for text beginning with ':'.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseCommand {
    /// New search box contents. Empty clears the text filter.
    Query(String),
    /// Select a tag; `None` asks for a picker.
    Tag(Option<String>),
    Clear,
    Activate(Target),
    Help,
    Quit,
    Unknown(String),
}

/// What the session loop should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Filters changed and the cards were re-rendered.
    Rendered,
    Activated(Activation),
    PickTag,
    Help,
    Unknown(String),
    Quit,
}

pub fn parse(input: &str) -> BrowseCommand {
    let line = input.trim_end_matches(['\r', '\n']);

    if let Some(rest) = line.strip_prefix("::") {
        return BrowseCommand::Query(format!(":{}", rest));
    }
    let Some(command) = line.strip_prefix(':') else {
        return BrowseCommand::Query(line.to_string());
    };

    let command = command.trim();
    let (name, arg) = match command.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (command, ""),
    };
    let id_arg = |make: fn(RecordId) -> Target| {
        if arg.is_empty() {
            BrowseCommand::Unknown(format!(":{} needs a record id", name))
        } else {
            BrowseCommand::Activate(make(RecordId::new(arg)))
        }
    };

    match name {
        "tag" | "t" if arg.is_empty() => BrowseCommand::Tag(None),
        "tag" | "t" => BrowseCommand::Tag(Some(arg.to_string())),
        "clear" => BrowseCommand::Clear,
        "expand" => BrowseCommand::Activate(Target::ExpandAll),
        "collapse" => BrowseCommand::Activate(Target::CollapseAll),
        "open" | "o" => id_arg(Target::Toggle),
        "copy" | "c" => id_arg(Target::Copy),
        "help" | "h" | "?" => BrowseCommand::Help,
        "quit" | "q" | "exit" => BrowseCommand::Quit,
        _ => BrowseCommand::Unknown(format!("unknown command ':{}'", name)),
    }
}

/// Apply one command to the page.
pub fn apply<C: ClipboardWriter>(
    page: &mut Page,
    clipboard: &mut C,
    command: BrowseCommand,
    now: Instant,
) -> Step {
    match command {
        BrowseCommand::Query(query) => {
            page.set_query(query);
            Step::Rendered
        }
        BrowseCommand::Tag(Some(tag)) => {
            page.set_tag(tag);
            Step::Rendered
        }
        BrowseCommand::Tag(None) => Step::PickTag,
        BrowseCommand::Clear => {
            page.set_filter(FilterState::default());
            Step::Rendered
        }
        BrowseCommand::Activate(target) => {
            Step::Activated(activate::execute(page, clipboard, target, now))
        }
        BrowseCommand::Help => Step::Help,
        BrowseCommand::Quit => Step::Quit,
        BrowseCommand::Unknown(message) => Step::Unknown(message),
    }
}

/// Entries for the tag picker: "all tags" first, then the tag options.
pub fn tag_choices(page: &Page) -> Vec<String> {
    std::iter::once(ALL_TAGS.to_string()).chain(page.tag_options().iter().cloned()).collect()
}

/// Tag value for a picker selection; index 0 clears the tag.
pub fn tag_for_choice(page: &Page, index: usize) -> String {
    index
        .checked_sub(1)
        .and_then(|i| page.tag_options().get(i))
        .cloned()
        .unwrap_or_default()
}

const ALL_TAGS: &str = "(all tags)";
