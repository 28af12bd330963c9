use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use gpui::Application;
use tracing::{debug, error, info};
use wine_core::navigation::{View, ViewState};
use wine_core::render::render;
use wine_core::{Dataset, StyleConfig};
use wine_ui::components::WindowPreferences;
use wine_ui::config::{DashboardConfig, LoggingConfig};
use wine_ui::logging::{self, Console};
use wine_ui::{open_dashboard_window, setup_app};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Wine quality dashboard.
///
/// Presents the UCI wine quality figures as a four-step story and an
/// overview page.
#[derive(Debug, Parser)]
#[command(name = "wine-dashboard", version)]
struct Cli {
    /// TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `info,wine_core=trace`.
    /// Overrides the configured level.
    #[arg(long)]
    log_level: Option<String>,

    /// View shown at start-up: `story` or `overview`.
    #[arg(long, value_parser = parse_view)]
    view: Option<View>,

    /// Story step shown at start-up (clamped to 1..=4).
    #[arg(long)]
    step: Option<usize>,

    /// Print the rendered dashboard as text and exit without a window.
    #[arg(long)]
    headless: bool,
}

fn parse_view(s: &str) -> Result<View, String> {
    View::parse(s).ok_or_else(|| format!("unknown view '{s}', expected 'story' or 'overview'"))
}

// ─── logging ─────────────────────────────────────────────────────────────────

fn apply_logging_config(
    config: &LoggingConfig,
    cli_level: Option<&str>,
) -> Result<()> {
    if let Some(level) = cli_level.or(config.level.as_deref()) {
        logging::set_log_level(level)?;
    }
    logging::set_stdout_enabled(config.stdout)?;
    if let Some(path) = &config.file {
        logging::enable_file_logging(path)?;
    }
    Ok(())
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init_logging(if cli.headless {
        Console::Stderr
    } else {
        Console::Stdout
    });

    let config = match &cli.config {
        Some(path) => DashboardConfig::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => DashboardConfig::default(),
    };
    apply_logging_config(&config.logging, cli.log_level.as_deref())?;
    debug!(?config.window, ?config.startup, "configuration loaded");

    let dataset = Dataset::uci_wine_quality();
    dataset
        .validate()
        .context("built-in dataset failed validation")?;

    let state = ViewState::new(
        cli.view.unwrap_or(config.startup.view),
        cli.step.unwrap_or(config.startup.step),
    );

    if cli.headless {
        let scene = render(&state, &dataset, &config.style);
        println!("{scene}");
        return Ok(());
    }

    let prefs = WindowPreferences::from(config.window);
    let dataset = Arc::new(dataset);
    let style: Arc<StyleConfig> = Arc::new(config.style);

    info!(view = %state.selected_view(), step = state.current_step(), "Starting dashboard");
    Application::new()
        .with_assets(gpui_component_assets::Assets)
        .run(move |cx| {
            setup_app(&style, cx);
            if let Err(e) = open_dashboard_window(prefs, state, dataset, style, cx) {
                error!("{e:#}");
                cx.quit();
            }
        });

    Ok(())
}
