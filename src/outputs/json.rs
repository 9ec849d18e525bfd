//! JSON output generation for the API.
//!
//! This module serializes the assembled page data to JSON format for
//! consumption by external clients.
//!
//! # Output Structure
//!
//! Files are organized by edition date:
//! ```text
//! json_output_dir/
//! └── 2025-08-05/
//!     └── dashboard.json
//! ```
//!
//! Re-running on the same date overwrites that date's file; the JSON
//! mirrors exactly what the HTML page was rendered from.

use crate::models::DashboardPage;
use std::error::Error;
use tokio::fs;
use tracing::{error, info, instrument};

/// Write a [`DashboardPage`] to a JSON file with date-based directory structure.
///
/// Creates the necessary directory structure and writes the serialized
/// page as JSON. The file path is determined by the edition date.
///
/// # Arguments
///
/// * `page` - The assembled page data to serialize
/// * `json_output_dir` - Base directory for JSON output
///
/// # Output Path
///
/// The file is written to: `{json_output_dir}/{date}/dashboard.json`
#[instrument(level = "info", skip_all, fields(json_output_dir = %json_output_dir))]
pub async fn write_dashboard(
    page: &DashboardPage,
    json_output_dir: &str,
) -> Result<(), Box<dyn Error>> {
    let json = serde_json::to_string(page)?;

    let full_json_dir = format!("{}/{}", json_output_dir, page.local_date);
    info!(%full_json_dir, "Ensuring JSON directory exists");
    if let Err(e) = fs::create_dir_all(&full_json_dir).await {
        error!(%full_json_dir, error = %e, "Failed to create JSON dir");
        return Err(e.into());
    }

    let output_json_filename = format!("{full_json_dir}/dashboard.json");
    info!(path = %output_json_filename, "Writing JSON");
    fs::write(&output_json_filename, json).await?;
    info!(path = %output_json_filename, "Wrote JSON API file");

    Ok(())
}
