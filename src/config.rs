//! Layered runtime configuration.
//!
//! Configuration values arrive from three places, highest precedence first:
//!
//! 1. Command-line flags and their environment fallbacks ([`crate::cli::Cli`])
//! 2. An optional YAML config file passed with `-c`/`--config`
//! 3. Built-in defaults (tab `Recomendados`, election date 2025-11-16)
//!
//! Missing Sheets credentials are not an error at this layer: the fetcher
//! degrades to the built-in recommendations when either value is absent.

use crate::cli::Cli;
use chrono::NaiveDate;
use serde::Deserialize;
use std::error::Error;
use tokio::fs;
use tracing::{info, instrument};

/// Default sheet tab holding the recommended-reading rows.
pub const DEFAULT_SHEET_TAB: &str = "Recomendados";

/// Default first-round election date.
pub const DEFAULT_ELECTION_DATE: &str = "2025-11-16";

/// Values read from the optional YAML config file.
///
/// Every field is optional; anything absent falls through to the CLI
/// value or the built-in default.
///
/// ```yaml
/// sheet_id: 1AbCdEf...
/// api_key: AIza...
/// sheet_tab: Recomendados
/// election_date: 2025-11-16
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct FileConfig {
    pub sheet_id: Option<String>,
    pub api_key: Option<String>,
    pub sheet_tab: Option<String>,
    pub election_date: Option<NaiveDate>,
}

/// Fully resolved configuration for one run.
#[derive(Debug)]
pub struct DashboardConfig {
    /// Google Sheet identifier; `None` means render with fallback news.
    pub sheet_id: Option<String>,
    /// Google Sheets API key; `None` means render with fallback news.
    pub api_key: Option<String>,
    /// Sheet tab the news rows live in.
    pub sheet_tab: String,
    /// First-round election date for the header countdown.
    pub election_date: NaiveDate,
}

impl DashboardConfig {
    /// Merge CLI/env values over file values over defaults.
    pub fn resolve(args: &Cli, file: FileConfig) -> Self {
        let election_default: NaiveDate = DEFAULT_ELECTION_DATE
            .parse()
            .expect("default election date is a valid date");

        Self {
            sheet_id: args.sheet_id.clone().or(file.sheet_id),
            api_key: args.api_key.clone().or(file.api_key),
            sheet_tab: args
                .sheet_tab
                .clone()
                .or(file.sheet_tab)
                .unwrap_or_else(|| DEFAULT_SHEET_TAB.to_string()),
            election_date: args
                .election_date
                .or(file.election_date)
                .unwrap_or(election_default),
        }
    }

    /// Whether both Sheets credentials are present.
    pub fn has_sheet_credentials(&self) -> bool {
        self.sheet_id.is_some() && self.api_key.is_some()
    }
}

/// Load the YAML config file at `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid YAML.
/// An explicitly passed config file that fails to load is a hard error;
/// running without `--config` skips this entirely.
#[instrument(level = "info", skip_all, fields(path = %path))]
pub async fn load_file(path: &str) -> Result<FileConfig, Box<dyn Error>> {
    let raw = fs::read_to_string(path).await?;
    let parsed: FileConfig = serde_yaml::from_str(&raw)?;
    info!("Loaded configuration file");
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn base_args() -> Cli {
        Cli::parse_from(["pulso_nacional", "-o", "./public", "-j", "./json"])
    }

    #[test]
    fn test_resolve_defaults() {
        let config = DashboardConfig::resolve(&base_args(), FileConfig::default());

        assert_eq!(config.sheet_tab, "Recomendados");
        assert_eq!(
            config.election_date,
            NaiveDate::from_ymd_opt(2025, 11, 16).unwrap()
        );
        assert!(!config.has_sheet_credentials());
    }

    #[test]
    fn test_resolve_cli_over_file() {
        let args = Cli::parse_from([
            "pulso_nacional",
            "-o",
            "./public",
            "-j",
            "./json",
            "--sheet-id",
            "cli-sheet",
        ]);
        let file = FileConfig {
            sheet_id: Some("file-sheet".to_string()),
            api_key: Some("file-key".to_string()),
            sheet_tab: Some("Portada".to_string()),
            election_date: None,
        };

        let config = DashboardConfig::resolve(&args, file);
        assert_eq!(config.sheet_id.as_deref(), Some("cli-sheet"));
        assert_eq!(config.api_key.as_deref(), Some("file-key"));
        assert_eq!(config.sheet_tab, "Portada");
        assert!(config.has_sheet_credentials());
    }

    #[test]
    fn test_file_config_yaml() {
        let yaml = r#"
sheet_id: 1AbC
api_key: AIza
election_date: 2025-12-14
"#;
        let parsed: FileConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(parsed.sheet_id.as_deref(), Some("1AbC"));
        assert_eq!(
            parsed.election_date,
            Some(NaiveDate::from_ymd_opt(2025, 12, 14).unwrap())
        );
        assert!(parsed.sheet_tab.is_none());
    }

    #[test]
    fn test_partial_credentials_are_not_enough() {
        let file = FileConfig {
            sheet_id: Some("1AbC".to_string()),
            ..FileConfig::default()
        };
        let config = DashboardConfig::resolve(&base_args(), file);
        assert!(!config.has_sheet_credentials());
    }
}
