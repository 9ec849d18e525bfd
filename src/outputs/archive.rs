//! Archive index management.
//!
//! Each run writes a dated snapshot of the page (`2025-08-05.html`); this
//! module keeps `archivo.html` pointing at every snapshot generated so
//! far. The file is seeded on first run and updated in place afterwards
//! with line-based insertion so repeated runs on the same date stay
//! idempotent.

use crate::models::DashboardPage;
use std::error::Error;
use std::path::Path;
use tokio::fs;
use tracing::{info, instrument};

const ARCHIVE_SEED: &str = "<!doctype html>\n<html lang=\"es\">\n<head>\n<meta charset=\"utf-8\">\n<title>Pulso Nacional | Ediciones anteriores</title>\n</head>\n<body>\n<h1>Ediciones anteriores</h1>\n<ul>\n</ul>\n</body>\n</html>\n";

/// Update the archive index with a link to this edition's snapshot.
///
/// Creates `{html_output_dir}/archivo.html` if it doesn't exist, then
/// inserts a link to `edition_filename` at the top of the edition list
/// (newest first). Inserting an edition that is already listed is a
/// no-op.
#[instrument(level = "info", skip_all, fields(%html_output_dir, date = %page.local_date, file = %edition_filename))]
pub async fn update_archive(
    html_output_dir: &str,
    page: &DashboardPage,
    edition_filename: &str,
) -> Result<(), Box<dyn Error>> {
    let archive_path = format!("{html_output_dir}/archivo.html");

    let content = if Path::new(&archive_path).exists() {
        fs::read_to_string(&archive_path).await?
    } else {
        ARCHIVE_SEED.to_string()
    };

    let entry = format!(
        "  <li><a href=\"./{}\">{}</a></li>",
        edition_filename, page.local_date
    );

    let lines: Vec<String> = content.lines().map(|l| l.to_string()).collect();
    let lines = insert_edition(lines, &entry);

    fs::write(&archive_path, lines.join("\n")).await?;
    info!(path = %archive_path, "Updated archive index");
    Ok(())
}

/// Insert `entry` right after the `<ul>` line unless it is already present.
///
/// Missing `<ul>` (hand-edited file) falls back to appending at the end
/// rather than dropping the entry.
fn insert_edition(mut lines: Vec<String>, entry: &str) -> Vec<String> {
    if lines.iter().any(|l| l.trim() == entry.trim()) {
        return lines;
    }

    if let Some(pos) = lines.iter().position(|l| l.trim() == "<ul>") {
        lines.insert(pos + 1, entry.to_string());
    } else {
        lines.push(entry.to_string());
    }
    lines
}
