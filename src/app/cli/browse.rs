//! Interactive browse session.

use std::io::{self, Write};
use std::time::Instant;

use dialoguer::{Input, Select};

use crate::app::api::{self, SessionOptions};
use crate::app::cli::view;
use crate::app::commands::activate::Activation;
use crate::app::commands::browse::{self, HELP, Step};
use crate::domain::{AppError, FilterState, Page};

pub(super) fn run_browse(session: &SessionOptions, filter: FilterState) -> Result<(), AppError> {
    let (mut ctx, mut page) = api::open_session(session)?;
    if !filter.is_unfiltered() {
        page.set_filter(filter);
    }

    if !page.load_failed() {
        println!(
            "{} prompt(s), {} tag(s). Type :help for commands.",
            page.catalog().len(),
            page.tag_options().len()
        );
    }
    draw(&page)?;

    loop {
        let line: String = Input::new()
            .with_prompt(prompt_for(page.filter()))
            .allow_empty(true)
            .interact_text()
            .map_err(|err| AppError::Prompt(err.to_string()))?;

        let now = Instant::now();
        page.tick(now);
        let step = browse::apply(&mut page, ctx.clipboard_mut(), browse::parse(&line), now);

        match step {
            Step::Rendered => draw(&page)?,
            Step::Activated(Activation::Copy { id, label }) => {
                println!("[{}] {}", view::sanitize(id.as_str()), label.as_str());
            }
            Step::Activated(Activation::NotRendered(id)) => {
                eprintln!("⚠️  No card '{}' is shown", view::sanitize(id.as_str()));
            }
            Step::Activated(_) => draw(&page)?,
            Step::PickTag => {
                if let Some(tag) = pick_tag(&page)? {
                    page.set_tag(tag);
                    draw(&page)?;
                }
            }
            Step::Help => println!("{}", HELP),
            Step::Unknown(message) => eprintln!("⚠️  {}", message),
            Step::Quit => break,
        }
    }

    Ok(())
}

fn draw(page: &Page) -> Result<(), AppError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out)?;
    view::write_page(&mut out, page)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

fn prompt_for(filter: &FilterState) -> String {
    match (filter.query.is_empty(), filter.tag.is_empty()) {
        (true, true) => "search".to_string(),
        (false, true) => format!("search \"{}\"", filter.query),
        (true, false) => format!("search #{}", filter.tag),
        (false, false) => format!("search \"{}\" #{}", filter.query, filter.tag),
    }
}

fn pick_tag(page: &Page) -> Result<Option<String>, AppError> {
    let choices = browse::tag_choices(page);
    let current = page
        .tag_options()
        .iter()
        .position(|t| t == &page.filter().tag)
        .map_or(0, |i| i + 1);

    let selection = Select::new()
        .with_prompt("Select tag")
        .items(&choices)
        .default(current)
        .interact_opt()
        .map_err(|err| AppError::Prompt(format!("Failed to select tag: {}", err)))?;

    Ok(selection.map(|index| browse::tag_for_choice(page, index)))
}
