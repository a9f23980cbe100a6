pub mod config;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use class_notes_dashboard::render::render_results;
use class_notes_dashboard::results::ResultRow;
use class_notes_dashboard::ResultsView;
use class_notes_doc_model::Catalog;
use class_notes_viewer_core::{PageLocation, ViewerAction, ViewerPage, ViewerPanel};
use config::PortalConfig;
use serde::Serialize;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "class-notes")]
#[command(about = "Class notes portal tools")]
pub struct Cli {
    /// JSON settings file; environment variables override it.
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search the resource catalog.
    Search {
        #[arg(value_name = "QUERY")]
        query: String,
        #[arg(long, value_name = "FILE")]
        catalog: Option<PathBuf>,
        /// Print results as JSON.
        #[arg(long, conflicts_with = "html")]
        json: bool,
        /// Print the rendered result panel.
        #[arg(long)]
        html: bool,
    },
    /// Open a slide viewer URL, apply navigation steps and print the final frame.
    Viewer {
        #[arg(value_name = "URL")]
        url: String,
        /// `next`, `prev` or `goto:N`; repeatable.
        #[arg(long = "step", value_name = "STEP", value_parser = parse_step)]
        steps: Vec<ViewerAction>,
    },
    /// List thumbnail image URLs for a slide viewer URL.
    Thumbs {
        #[arg(value_name = "URL")]
        url: String,
    },
    /// Print the resource catalog as JSON.
    Catalog {
        #[arg(long, value_name = "FILE")]
        catalog: Option<PathBuf>,
    },
    /// Print CLI version.
    Version,
}

#[derive(Debug, Serialize)]
struct ViewerOutput<'a> {
    panel: &'a ViewerPanel,
    download: Option<&'a str>,
    current: u32,
    total: u32,
    frame: class_notes_viewer_core::ViewerFrame,
}

pub fn run<I, T>(args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::parse_from(args);
    init_logging();

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Search { query, catalog, json, html } => {
            run_search(&config, &query, catalog.as_deref(), json, html)
        }
        Commands::Viewer { url, steps } => run_viewer(&config, &url, &steps),
        Commands::Thumbs { url } => run_thumbs(&config, &url),
        Commands::Catalog { catalog } => {
            let catalog = load_catalog(catalog.as_deref())?;
            println!("{}", serde_json::to_string_pretty(&catalog)?);
            Ok(())
        }
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn load_config(path: Option<&Path>) -> Result<PortalConfig> {
    let mut config = match path {
        Some(path) => PortalConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => PortalConfig::default(),
    };

    config.apply_env().context("invalid environment override")?;
    tracing::debug!(?config, "configuration loaded");
    Ok(config)
}

fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(path) => Catalog::load(path)
            .with_context(|| format!("failed to load catalog from {}", path.display())),
        None => Ok(Catalog::builtin()),
    }
}

fn run_search(
    config: &PortalConfig,
    query: &str,
    catalog: Option<&Path>,
    json: bool,
    html: bool,
) -> Result<()> {
    let catalog = load_catalog(catalog)?;
    let mut dashboard = config.dashboard(catalog);

    // Replay one keystroke through the debounce and loading timers.
    dashboard.search.input(query, 0);
    let mut now = 0;
    while let Some(deadline) = dashboard.search.next_deadline() {
        now = deadline.max(now);
        dashboard.tick(now);
    }

    let view = dashboard.search.view();

    if html {
        println!("{}", render_results(&view));
        return Ok(());
    }

    let rows: &[ResultRow] = match &view {
        ResultsView::Results { rows, .. } => rows.as_slice(),
        _ => &[],
    };

    if json {
        println!("{}", serde_json::to_string_pretty(rows)?);
        return Ok(());
    }

    match &view {
        ResultsView::Results { header, .. } => {
            println!("{header}");
            for row in rows {
                let marker = if row.new_tab { " (new tab)" } else { "" };
                println!("{}\t{}\t{}{marker}", row.title, row.subtitle, row.url);
            }
        }
        ResultsView::NoResults { query } => println!("No results found for \"{query}\""),
        ResultsView::Hidden | ResultsView::Loading => {}
    }

    Ok(())
}

fn run_viewer(config: &PortalConfig, url: &str, steps: &[ViewerAction]) -> Result<()> {
    let mut page = open_viewer(config, url)?;

    for step in steps {
        if !page.state.apply(*step) {
            tracing::info!(?step, current = page.state.current(), "step had no effect");
        }
    }

    let output = ViewerOutput {
        panel: &page.panel,
        download: page.state.download_button(),
        current: page.state.current(),
        total: page.state.total(),
        frame: page.state.frame_with_radius(config.preload_radius),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn run_thumbs(config: &PortalConfig, url: &str) -> Result<()> {
    let page = open_viewer(config, url)?;

    if let ViewerPanel::Message { text } = &page.panel {
        anyhow::bail!("{text}");
    }

    for thumb in page.state.thumbnails() {
        println!("{}\t{}", thumb.number, thumb.src);
    }

    Ok(())
}

fn open_viewer(config: &PortalConfig, url: &str) -> Result<ViewerPage> {
    let location = PageLocation::parse(url).context("failed to parse viewer URL")?;
    Ok(ViewerPage::load_with_segment(&location, &config.base_segment))
}

fn parse_step(raw: &str) -> Result<ViewerAction, String> {
    match raw {
        "next" => Ok(ViewerAction::Next),
        "prev" | "previous" => Ok(ViewerAction::Previous),
        other => other
            .strip_prefix("goto:")
            .and_then(|number| number.parse::<u32>().ok())
            .map(ViewerAction::GoTo)
            .ok_or_else(|| format!("expected next, prev or goto:N, got {other:?}")),
    }
}
