//! Static HTML rendering of a page using minijinja.

use minijinja::{Environment, UndefinedBehavior, context};
use serde::Serialize;

use crate::domain::{AppError, BodyMode, Page};

// The `.html` suffix turns on minijinja's HTML auto-escaping.
const TEMPLATE_NAME: &str = "catalog.html";
const TEMPLATE: &str = include_str!("../assets/export/catalog.html");

pub const DEFAULT_TITLE: &str = "Prompt catalog";

#[derive(Debug, Serialize)]
struct CardContext<'a> {
    id: &'a str,
    title: &'a str,
    body: &'a str,
    tags: &'a [String],
    code: &'a str,
    open: bool,
}

/// Render the page's current cards and empty state as a standalone HTML document.
pub fn render_html(page: &Page, body: BodyMode, title: &str) -> Result<String, AppError> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.add_template(TEMPLATE_NAME, TEMPLATE)?;

    let cards: Vec<CardContext<'_>> = page
        .cards()
        .map(|card| CardContext {
            id: card.record.id.as_str(),
            title: &card.record.title,
            body: &card.record.body,
            tags: &card.record.tags,
            code: &card.record.code,
            open: card.open,
        })
        .collect();

    let empty = page.empty_state();
    let ctx = context! {
        title => title,
        query => page.filter().query.as_str(),
        tag => page.filter().tag.as_str(),
        empty => context! { visible => empty.visible, message => empty.message.as_str() },
        cards => cards,
        trusted_body => body == BodyMode::Trusted,
    };

    Ok(env.get_template(TEMPLATE_NAME)?.render(ctx)?)
}
