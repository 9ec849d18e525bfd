//! Command-line interface definitions for Pulso Nacional.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! Credentials and the election date can be provided via command-line flags
//! or environment variables.

use chrono::NaiveDate;
use clap::Parser;

/// Command-line arguments for the Pulso Nacional dashboard renderer.
///
/// This struct defines all configuration options that can be passed to the
/// application at runtime. Options include output directories, Google Sheets
/// credentials, and an override for the election date.
///
/// # Examples
///
/// ```sh
/// # Basic usage with required arguments
/// pulso_nacional -o ./public -j ./json
///
/// # With live recommended reading from a Google Sheet
/// pulso_nacional -o ./public -j ./json \
///     --sheet-id YOUR_SHEET --api-key YOUR_KEY
///
/// # With a config file supplying credentials
/// pulso_nacional -o ./public -j ./json -c pulso.yaml
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Output directory for the rendered HTML page
    #[arg(short = 'o', long)]
    pub html_output_dir: String,

    /// Output directory for the JSON API file
    #[arg(short, long)]
    pub json_output_dir: String,

    /// Optional path to a YAML config file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Google Sheet identifier holding the recommended-reading rows
    #[arg(long, env = "GOOGLE_SHEET_ID")]
    pub sheet_id: Option<String>,

    /// Google Sheets API key
    #[arg(long, env = "GOOGLE_SHEETS_API_KEY")]
    pub api_key: Option<String>,

    /// Sheet tab to read news rows from (default: Recomendados)
    #[arg(long)]
    pub sheet_tab: Option<String>,

    /// First-round election date, YYYY-MM-DD (default: 2025-11-16)
    #[arg(long, env = "ELECTION_DATE")]
    pub election_date: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::parse_from([
            "pulso_nacional",
            "--html-output-dir",
            "./public",
            "--json-output-dir",
            "./json",
        ]);

        assert_eq!(cli.html_output_dir, "./public");
        assert_eq!(cli.json_output_dir, "./json");
        assert!(cli.sheet_tab.is_none());
    }

    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from(["pulso_nacional", "-o", "/tmp/public", "-j", "/tmp/json"]);

        assert_eq!(cli.html_output_dir, "/tmp/public");
        assert_eq!(cli.json_output_dir, "/tmp/json");
    }

    #[test]
    fn test_cli_election_date() {
        let cli = Cli::parse_from([
            "pulso_nacional",
            "-o",
            "./public",
            "-j",
            "./json",
            "--election-date",
            "2025-11-16",
        ]);

        assert_eq!(
            cli.election_date,
            Some(NaiveDate::from_ymd_opt(2025, 11, 16).unwrap())
        );
    }
}
