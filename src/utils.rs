//! Utility functions for date arithmetic, string handling, and file system checks.
//!
//! This module provides helper functions used throughout the application:
//! - Election-countdown arithmetic for the header counter
//! - HTML entity escaping for interpolated page text
//! - String truncation for bounded log previews
//! - File system validation for output directories

use chrono::NaiveDate;
use std::error::Error;
use std::fs as stdfs;
use tokio::fs;
use tracing::{info, instrument};

/// Whole days from `today` until `election`, signed.
///
/// Drives the "Días hasta Primera Vuelta" counter in the page header.
/// The count goes negative once the election date has passed; the page
/// renders whatever number it is given.
///
/// # Arguments
///
/// * `today` - The date of the current run
/// * `election` - The first-round election date
///
/// # Examples
///
/// ```ignore
/// let today = NaiveDate::from_ymd_opt(2025, 8, 5).unwrap();
/// let election = NaiveDate::from_ymd_opt(2025, 11, 16).unwrap();
/// assert_eq!(days_until_election(today, election), 103);
/// ```
pub fn days_until_election(today: NaiveDate, election: NaiveDate) -> i64 {
    (election - today).num_days()
}

/// Escape text for safe interpolation into HTML.
///
/// Replaces the five characters with meaning in markup or attribute
/// context. Everything the renderer interpolates from sheet data or
/// static content goes through this.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(escape_html("a < b & c"), "a &lt; b &amp; c");
/// ```
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Truncate a string for logging purposes.
///
/// Long strings are truncated to `max` characters with an ellipsis and
/// byte count indicator appended.
///
/// # Arguments
///
/// * `s` - The string to potentially truncate
/// * `max` - Maximum number of characters to keep
///
/// # Returns
///
/// The original string if shorter than `max`, otherwise a truncated version
/// with `"…(+N bytes)"` appended.
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.len() <= max {
        s.to_string()
    } else {
        format!("{}…(+{} bytes)", &s[..max], s.len() - max)
    }
}

/// Ensure a directory exists and is writable.
///
/// This function creates the directory if it doesn't exist, then performs
/// a write test by creating and immediately deleting a probe file.
///
/// # Arguments
///
/// * `path` - The directory path to validate
///
/// # Errors
///
/// Returns an error if:
/// - The directory cannot be created
/// - The directory is not writable (permission denied, read-only filesystem, etc.)
#[instrument(level = "info", skip_all, fields(path = %path))]
pub async fn ensure_writable_dir(path: &str) -> Result<(), Box<dyn Error>> {
    if let Err(e) = fs::create_dir_all(path).await {
        return Err(Box::new(e));
    }
    // Try a small sync write using std fs (simpler error surface)
    let probe_path = format!("{}/..__probe_write__", path.trim_end_matches('/'));
    match stdfs::File::create(&probe_path) {
        Ok(_) => {
            let _ = stdfs::remove_file(&probe_path);
            info!("Output directory is writable");
            Ok(())
        }
        Err(e) => Err(Box::new(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_days_until_election() {
        let today = NaiveDate::from_ymd_opt(2025, 8, 5).unwrap();
        let election = NaiveDate::from_ymd_opt(2025, 11, 16).unwrap();
        assert_eq!(days_until_election(today, election), 103);
    }

    #[test]
    fn test_days_until_election_same_day() {
        let day = NaiveDate::from_ymd_opt(2025, 11, 16).unwrap();
        assert_eq!(days_until_election(day, day), 0);
    }

    #[test]
    fn test_days_until_election_past() {
        let today = NaiveDate::from_ymd_opt(2025, 11, 20).unwrap();
        let election = NaiveDate::from_ymd_opt(2025, 11, 16).unwrap();
        assert_eq!(days_until_election(today, election), -4);
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a < b & c"), "a &lt; b &amp; c");
        assert_eq!(escape_html("\"quoted\""), "&quot;quoted&quot;");
        assert_eq!(escape_html("O'Higgins"), "O&#39;Higgins");
        assert_eq!(escape_html("sin cambios"), "sin cambios");
    }

    #[test]
    fn test_escape_html_preserves_accents() {
        assert_eq!(escape_html("Análisis y Opinión"), "Análisis y Opinión");
    }

    #[test]
    fn test_truncate_for_log_short_string() {
        let s = "Hello, world!";
        assert_eq!(truncate_for_log(s, 100), "Hello, world!");
    }

    #[test]
    fn test_truncate_for_log_long_string() {
        let s = "a".repeat(500);
        let result = truncate_for_log(&s, 100);
        assert!(result.starts_with(&"a".repeat(100)));
        assert!(result.contains("…(+400 bytes)"));
    }
}
