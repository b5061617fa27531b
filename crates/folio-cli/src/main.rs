//! Folio - a portfolio notebook for the terminal
//!
//! Browses a tabbed portfolio site with:
//! - Wheel scrolling that flows from one tab into the next
//! - Shareable `#tab/heading` locations with back/forward history
//! - Markdown pages and a profile cover

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use ratatui::style::Color;

use folio_core::nav::decode;
use folio_core::{paths, FolioConfig, Site, TabContent};

mod tui;

use tui::markdown::render_markdown;
use tui::state::load_saved_location;
use tui::themes::Theme;

/// Wrap width used when checking headings outside the TUI
const CHECK_WIDTH: usize = 80;

/// Folio - portfolio notebook
#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "A portfolio notebook for the terminal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Content directory containing a site.toml (defaults to the built-in sample)
    #[arg(short, long)]
    content: Option<PathBuf>,

    /// Location to open, e.g. "projects/project-beta"
    #[arg(short, long)]
    open: Option<String>,

    /// Config file (defaults to ~/.folio/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the site's tabs in navigation order
    Tabs,

    /// Decode a location fragment against the site
    Check { fragment: String },
}

/// Restore terminal state - called on panic or unexpected exit
fn restore_terminal() {
    use crossterm::{
        event::DisableMouseCapture,
        execute,
        terminal::{disable_raw_mode, LeaveAlternateScreen},
    };
    let _ = disable_raw_mode();
    let _ = execute!(std::io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
}

fn init_logging() {
    let log_dir = paths::logs_dir();
    std::fs::create_dir_all(&log_dir).ok();

    #[cfg(unix)]
    let null_device = "/dev/null";
    #[cfg(windows)]
    let null_device = "NUL";

    let log_file = match std::fs::File::create(log_dir.join("folio.log"))
        .or_else(|_| std::fs::File::create(null_device))
    {
        Ok(file) => file,
        Err(_) => return,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false)
        .init();
}

fn load_site(cli: &Cli, config: &FolioConfig) -> Result<Site> {
    match cli.content.as_ref().or(config.content_dir.as_ref()) {
        Some(dir) => {
            Site::load(dir).with_context(|| format!("Failed to load site from {}", dir.display()))
        }
        None => Site::demo().context("Failed to load the built-in site"),
    }
}

fn print_tabs(site: &Site) {
    println!("Tabs ({}):", site.tabs.len());
    for tab in site.tabs.iter() {
        println!("  {:<12} {}", tab.id, tab.display_name());
    }
}

fn check_fragment(site: &Site, raw: &str) -> Result<()> {
    let fragment = decode(raw).with_context(|| format!("Invalid location '{}'", raw))?;
    let Some(tab) = site
        .tabs
        .index_of(&fragment.tab_id)
        .map(|i| &site.tabs[i])
    else {
        bail!(
            "Unknown tab '{}' (the viewer would ignore this location)",
            fragment.tab_id
        );
    };
    println!("  ✓ tab {} ({})", tab.id, tab.display_name());

    let Some(heading) = fragment.heading_id else {
        return Ok(());
    };
    let found = match site.content(&tab.id) {
        Some(TabContent::Markdown(text)) => {
            render_markdown(text, CHECK_WIDTH, Color::Reset, &Theme::default())
                .heading(&heading)
                .is_some()
        }
        Some(TabContent::Cover) | None => false,
    };
    if found {
        println!("  ✓ heading {}", heading);
    } else {
        println!("  ⚠ heading {} not found; the tab opens at the top", heading);
    }
    Ok(())
}

fn config_path(cli: &Cli) -> PathBuf {
    cli.config.clone().unwrap_or_else(paths::config_file)
}

fn initial_fragment(cli: &Cli, location_file: &Path) -> String {
    cli.open
        .clone()
        .or_else(|| load_saved_location(location_file))
        .unwrap_or_default()
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Set up panic hook to restore terminal state
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();
        original_hook(panic_info);
    }));

    // Log to a file; the terminal belongs to the TUI
    init_logging();

    let cli = Cli::parse();

    let config_file = config_path(&cli);
    let config = FolioConfig::load(&config_file)
        .with_context(|| format!("Failed to load config {}", config_file.display()))?;
    let site = load_site(&cli, &config)?;

    match cli.command {
        Some(Commands::Tabs) => print_tabs(&site),
        Some(Commands::Check { ref fragment }) => check_fragment(&site, fragment)?,
        None => {
            let location_file = paths::location_file();
            let fragment = initial_fragment(&cli, &location_file);
            tracing::info!(fragment = %fragment, "Starting viewer");

            let mut app = tui::App::new(site, &config, &fragment, Some(location_file))?;
            app.run().await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_fragment_against_demo_site() {
        let site = Site::demo().unwrap();
        assert!(check_fragment(&site, "#projects/project-beta").is_ok());
        assert!(check_fragment(&site, "about").is_ok());
        assert!(check_fragment(&site, "#nowhere").is_err());
        assert!(check_fragment(&site, "#").is_err());
    }

    #[test]
    fn test_open_flag_beats_saved_location() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("location");
        std::fs::write(&file, "career\n").unwrap();

        let cli = Cli::parse_from(["folio", "--open", "skills"]);
        assert_eq!(initial_fragment(&cli, &file), "skills");

        let cli = Cli::parse_from(["folio"]);
        assert_eq!(initial_fragment(&cli, &file), "career");

        let cli = Cli::parse_from(["folio"]);
        assert_eq!(initial_fragment(&cli, &dir.path().join("missing")), "");
    }

    #[test]
    fn test_subcommands_parse() {
        let cli = Cli::parse_from(["folio", "check", "projects/project-alpha"]);
        assert!(matches!(cli.command, Some(Commands::Check { .. })));
        let cli = Cli::parse_from(["folio", "-c", "/tmp/site", "tabs"]);
        assert_eq!(cli.content, Some(PathBuf::from("/tmp/site")));
    }
}
