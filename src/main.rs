mod cli;

use crate::cli::app::App;
use crate::cli::source::{demo_items, load_items};
use anyhow::{Context, Result};
use clap::Parser;
use rustpager::PaginationConfig;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "rustpager")]
#[command(about = "Page through the lines of a file in the terminal")]
struct Cli {
    /// Input file, one item per line (a generated stock list when omitted)
    file: Option<PathBuf>,
    /// Treat the input as a JSON array, one item per element
    #[arg(long)]
    json: bool,
    #[arg(long)]
    page_size: Option<i64>,
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    page: i64,
    /// JSON pagination config
    #[arg(long)]
    config: Option<PathBuf>,
    /// Interpret the filter as a regular expression
    #[arg(long)]
    regex: bool,
    /// Write logs here; the terminal itself belongs to the UI
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let config = match &cli.config {
        Some(path) => PaginationConfig::load(path)
            .with_context(|| format!("Failed to load config '{}'", path.display()))?,
        None => PaginationConfig::default(),
    };

    let items = match &cli.file {
        Some(path) => load_items(path, cli.json)
            .with_context(|| format!("Failed to read items from '{}'", path.display()))?,
        None => demo_items(),
    };
    info!(items = items.len(), "Loaded collection");

    let mut app = App::new(items, &config, cli.regex);
    if let Some(page_size) = cli.page_size {
        app.view.set_page_size(page_size);
    }
    app.view.set_page(cli.page);

    app.run()
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file '{}'", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}
