//! # Pulso Nacional
//!
//! A static-page renderer for the Pulso Nacional election dashboard. Each
//! run fetches the curated recommended-reading list from a Google Sheet,
//! combines it with the page's editorial datasets (poll average, recent
//! polls, analysis, most-read ranking), and writes the rendered HTML page
//! plus a JSON data file.
//!
//! ## Features
//!
//! - Reads news rows from one tab of a Google Sheet (Sheets v4 REST API)
//! - Falls back to a built-in recommendations list whenever live data
//!   cannot be obtained, so the page always renders
//! - Outputs a self-contained HTML page and a JSON API file per edition
//! - Maintains an archive index of previously generated editions
//!
//! ## Usage
//!
//! ```sh
//! pulso_nacional -o ./public -j ./json
//! ```
//!
//! ## Architecture
//!
//! The application follows a linear pipeline:
//! 1. **Configure**: CLI/env values layered over an optional YAML file
//! 2. **Fetch**: one best-effort Sheets read with built-in fallback
//! 3. **Assemble**: build the [`models::DashboardPage`] for today
//! 4. **Output**: write JSON, write HTML (snapshot + index.html), update archive

use chrono::Local;
use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

mod cli;
mod config;
mod content;
mod models;
mod outputs;
mod sheets;
mod utils;

use cli::Cli;
use config::DashboardConfig;
use models::DashboardPage;
use outputs::{archive, html, json};
use utils::{days_until_election, ensure_writable_dir};

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("pulso_nacional starting up");

    // Parse CLI
    let args = Cli::parse();
    debug!(?args.html_output_dir, ?args.json_output_dir, "Parsed CLI arguments");

    // Early check: ensure both output dirs are writable
    for dir in [&args.html_output_dir, &args.json_output_dir] {
        if let Err(e) = ensure_writable_dir(dir).await {
            error!(
                path = %dir,
                error = %e,
                "Output directory is not writable (fix perms or choose a different path)"
            );
            return Err(e);
        }
    }

    // ---- Resolve configuration ----
    let file_config = match &args.config {
        Some(path) => config::load_file(path).await?,
        None => config::FileConfig::default(),
    };
    let dashboard_config = DashboardConfig::resolve(&args, file_config);
    info!(
        sheet_tab = %dashboard_config.sheet_tab,
        election_date = %dashboard_config.election_date,
        live_source = dashboard_config.has_sheet_credentials(),
        "Configuration resolved"
    );

    // ---- Fetch recommended reading ----
    let news = sheets::fetch_news(&dashboard_config).await;
    info!(count = news.len(), "News items ready");

    // ---- Assemble the page ----
    let today = Local::now().date_naive();
    let page = DashboardPage {
        local_date: today.to_string(),
        days_until_election: days_until_election(today, dashboard_config.election_date),
        poll_average: content::poll_average(),
        recent_polls: content::recent_polls(),
        analysis: content::analysis_pieces(),
        news,
        most_read: content::most_read(),
    };
    info!(
        local_date = %page.local_date,
        days_until_election = page.days_until_election,
        "DashboardPage assembled"
    );

    // ---- JSON output ----
    if let Err(e) = json::write_dashboard(&page, &args.json_output_dir).await {
        error!(error = %e, "Failed to write JSON output");
    }

    // ---- HTML output: dated snapshot + index.html ----
    let rendered = html::render_page(&page);
    let edition_filename = format!("{}.html", page.local_date);
    let snapshot_path = format!("{}/{}", args.html_output_dir, edition_filename);
    let index_path = format!("{}/index.html", args.html_output_dir);

    info!(path = %snapshot_path, "Writing HTML snapshot");
    if let Err(e) = tokio::fs::write(&snapshot_path, &rendered).await {
        error!(path = %snapshot_path, error = %e, "Failed writing HTML snapshot");
    }

    info!(path = %index_path, "Writing index.html");
    if let Err(e) = tokio::fs::write(&index_path, &rendered).await {
        error!(path = %index_path, error = %e, "Failed writing index.html");
    }

    // ---- Archive index ----
    if let Err(e) = archive::update_archive(&args.html_output_dir, &page, &edition_filename).await {
        error!(error = %e, "Failed to update archive index");
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );

    Ok(())
}
