#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::{bail, Context};
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use folio_core::{content, RevealConfig, RevealMode};
use tracing_subscriber::EnvFilter;

/// Reveal settings, set from command line and config file
static REVEAL_CONFIG: OnceLock<RevealConfig> = OnceLock::new();

/// Section to scroll to on launch, set from command line
static INITIAL_SECTION: OnceLock<String> = OnceLock::new();

/// Get the reveal settings (set at launch or default)
pub fn get_reveal_config() -> RevealConfig {
    REVEAL_CONFIG.get().copied().unwrap_or_default()
}

/// Get the section requested with --section, if any
pub fn get_initial_section() -> Option<String> {
    INITIAL_SECTION.get().cloned()
}

/// Folio - scroll-revealed personal portfolio
#[derive(Parser, Debug)]
#[command(name = "folio-desktop")]
#[command(about = "Folio - single-page portfolio with scroll-revealed sections")]
struct Args {
    /// Reveal config file (JSON). Defaults to <config dir>/folio/reveal.json when present
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Visible fraction at which a section reveals, in (0, 1]
    #[arg(short, long)]
    threshold: Option<f64>,

    /// Keep sections revealed after they first scroll into view
    #[arg(long)]
    once: bool,

    /// Open the page scrolled to this section (e.g. "projects")
    #[arg(short, long)]
    section: Option<String>,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 1200.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 900.0)]
    height: f64,
}

/// Default config file location, if the platform has a config directory.
fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("folio").join("reveal.json"))
}

/// Merge the config file (explicit, or default when present) with CLI overrides.
fn resolve_reveal_config(args: &Args) -> anyhow::Result<RevealConfig> {
    let mut config = match &args.config {
        Some(path) => RevealConfig::load(path)
            .with_context(|| format!("failed to load reveal config {}", path.display()))?,
        None => match default_config_path().filter(|path| path.exists()) {
            Some(path) => RevealConfig::load(&path)
                .with_context(|| format!("failed to load reveal config {}", path.display()))?,
            None => RevealConfig::default(),
        },
    };

    if let Some(threshold) = args.threshold {
        config.threshold = threshold;
    }
    if args.once {
        config.mode = RevealMode::Once;
    }
    config.validate().context("invalid reveal settings")?;
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let config = resolve_reveal_config(&args)?;
    let _ = REVEAL_CONFIG.set(config);

    let page = content::portfolio().context("built-in portfolio content is invalid")?;
    if let Some(section) = &args.section {
        if page.section(section).is_err() {
            bail!(
                "unknown section {:?}; available: {}",
                section,
                page.anchors().join(", ")
            );
        }
        let _ = INITIAL_SECTION.set(section.clone());
    }

    tracing::info!(
        sections = page.sections().len(),
        threshold = config.threshold,
        mode = ?config.mode,
        "Starting portfolio"
    );

    // Configure desktop window
    let window = Config::new().with_window(
        WindowBuilder::new()
            .with_title(page.hero.headline.as_str())
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window)
        .launch(app::App);

    Ok(())
}
