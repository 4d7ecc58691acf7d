//! CLI Adapter.

mod browse;
pub mod view;

use std::fs;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::app::api::{self, ExportOptions, ListOptions, SessionOptions};
use crate::domain::{AppError, CopyLabel, FilterState};
use crate::services::html_export::DEFAULT_TITLE;

/// Environment variable holding a tracing filter directive.
pub const LOG_ENV: &str = "PROMPTDECK_LOG";

#[derive(Parser)]
#[command(name = "promptdeck")]
#[command(version)]
#[command(
    about = "Browse a prompt catalog, filter its cards and copy prompt code",
    long_about = None
)]
struct Cli {
    /// Catalog location: file path, file:// URL or http(s):// URL
    #[arg(short, long, global = true)]
    source: Option<String>,
    /// Config file (defaults to ./promptdeck.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Log debug details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug, Clone, Default)]
struct FilterArgs {
    /// Text searched case-insensitively in title, body, tags and code
    #[arg(short, long, default_value = "")]
    query: String,
    /// Show only cards carrying exactly this tag
    #[arg(short, long, default_value = "")]
    tag: String,
}

impl From<FilterArgs> for FilterState {
    fn from(args: FilterArgs) -> Self {
        FilterState::new(args.query, args.tag)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print the cards matching the filters
    #[clap(visible_alias = "ls")]
    List {
        #[command(flatten)]
        filter: FilterArgs,
        /// Show every card's code
        #[arg(short, long)]
        expand: bool,
    },
    /// Print the distinct tags, one per line
    Tags,
    /// Copy one prompt's code to the clipboard
    #[clap(visible_alias = "c")]
    Copy {
        /// Record id
        id: String,
    },
    /// Write the cards matching the filters as a static HTML page
    Export {
        #[command(flatten)]
        filter: FilterArgs,
        /// Open every card's code section
        #[arg(short, long)]
        expand: bool,
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Page title
        #[arg(long)]
        title: Option<String>,
    },
    /// Search, filter and copy interactively
    #[clap(visible_alias = "b")]
    Browse {
        #[command(flatten)]
        filter: FilterArgs,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let session =
        SessionOptions { source: cli.source.clone(), config: cli.config.clone(), dir: None };

    let result: Result<i32, AppError> = match cli.command {
        Commands::List { filter, expand } => run_list(&session, filter, expand),
        Commands::Tags => run_tags(&session).map(|_| 0),
        Commands::Copy { id } => run_copy(&session, &id),
        Commands::Export { filter, expand, output, title } => {
            run_export(&session, filter, expand, output, title).map(|_| 0)
        }
        Commands::Browse { filter } => browse::run_browse(&session, filter.into()).map(|_| 0),
    };

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "promptdeck=debug" } else { "promptdeck=warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

    // A subscriber may already be installed when the CLI is driven from tests.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_ansi(io::stderr().is_terminal())
                .with_target(false),
        )
        .try_init();
}

fn run_list(session: &SessionOptions, filter: FilterArgs, expand: bool) -> Result<i32, AppError> {
    let options = ListOptions { filter: filter.into(), expand };
    let page = api::list(session, &options)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    view::write_page(&mut out, &page)?;
    out.flush()?;

    Ok(if page.load_failed() { 1 } else { 0 })
}

fn run_tags(session: &SessionOptions) -> Result<(), AppError> {
    for tag in api::tags(session)? {
        println!("{}", view::sanitize(&tag));
    }
    Ok(())
}

fn run_copy(session: &SessionOptions, id: &str) -> Result<i32, AppError> {
    let label = api::copy(session, id)?;
    println!("{}", label.as_str());
    Ok(if label == CopyLabel::Failed { 1 } else { 0 })
}

fn run_export(
    session: &SessionOptions,
    filter: FilterArgs,
    expand: bool,
    output: Option<PathBuf>,
    title: Option<String>,
) -> Result<(), AppError> {
    let options = ExportOptions {
        list: ListOptions { filter: filter.into(), expand },
        title: title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
    };

    let html = api::export(session, &options)?;
    match output {
        Some(path) => {
            fs::write(&path, html)?;
            println!("✅ Exported catalog to {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            out.write_all(html.as_bytes())?;
            out.flush()?;
        }
    }
    Ok(())
}
