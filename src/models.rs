//! Data models for the dashboard page and its datasets.
//!
//! This module defines the core data structures used throughout the application:
//! - [`NewsItem`]: One entry in the recommended-reading sidebar
//! - [`PollAverage`]: One candidate row of the aggregated poll average
//! - [`RecentPoll`]: One pollster row of the recent-polls table
//! - [`AnalysisPiece`]: One analysis/opinion blurb
//! - [`MostRead`]: One entry of the most-read ranking
//! - [`DashboardPage`]: Everything needed to render a single edition
//!
//! Every run of the application assembles one [`DashboardPage`] from scratch;
//! nothing here is cached or persisted between runs.

use serde::{Deserialize, Serialize};

/// One entry in the recommended-reading sidebar.
///
/// News items come either from the configured Google Sheet or from the
/// built-in fallback list. Sheet rows are mapped positionally
/// (title, author, source, url, time, category, paywall flag) with the
/// defaults documented on each field.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NewsItem {
    /// Headline. Rows with a blank title are discarded during mapping.
    pub title: String,
    /// Byline, empty when the sheet cell is blank.
    pub author: String,
    /// Publishing outlet, empty when the sheet cell is blank.
    pub source: String,
    /// Link target; `"#"` when the sheet cell is blank.
    pub url: String,
    /// Free-text relative timestamp such as "Hace 2 horas". Never parsed.
    pub time: String,
    /// Section label; `"General"` when the sheet cell is blank.
    pub category: String,
    /// Whether the article sits behind a paywall.
    pub paywall: bool,
}

/// One candidate row of the aggregated poll average panel.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PollAverage {
    /// Candidate name.
    pub candidate: String,
    /// Party or coalition shown next to the name.
    pub party: String,
    /// Aggregated percentage, one decimal.
    pub percentage: f64,
    /// Signed change against the previous average.
    pub change: f64,
    /// CSS color used for the candidate's bar and swatch.
    pub color: String,
}

/// One pollster row of the recent-polls table.
///
/// The column set is fixed to the five tracked candidates; percentages
/// are whole numbers as published by each pollster.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RecentPoll {
    /// Polling firm.
    pub pollster: String,
    /// Field dates as published, e.g. "13-15 Ene".
    pub date: String,
    pub boric: u32,
    pub kast: u32,
    pub matthei: u32,
    pub provoste: u32,
    pub parisi: u32,
}

/// One analysis/opinion blurb in the main column.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnalysisPiece {
    /// Kind badge: "Análisis", "Opinión" or "Investigación".
    pub kind: String,
    pub title: String,
    pub author: String,
    pub outlet: String,
    /// Free-text relative timestamp.
    pub time: String,
    /// One-or-two sentence teaser.
    pub teaser: String,
}

/// One entry of the most-read ranking in the sidebar.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MostRead {
    /// 1-based position in the ranking.
    pub rank: u32,
    pub title: String,
    pub outlet: String,
    /// Display label such as "15.2k lecturas".
    pub reads: String,
}

/// All data needed to render one edition of the dashboard.
///
/// Serialized as-is to the JSON output so external clients consume the
/// same data the HTML page was rendered from.
#[derive(Debug, Deserialize, Serialize)]
pub struct DashboardPage {
    /// The date of the edition in `YYYY-MM-DD` format.
    pub local_date: String,
    /// Signed whole days until the first-round election date.
    pub days_until_election: i64,
    /// Aggregated poll average rows, ordered by percentage.
    pub poll_average: Vec<PollAverage>,
    /// Recent individual polls, newest first.
    pub recent_polls: Vec<RecentPoll>,
    /// Analysis and opinion blurbs.
    pub analysis: Vec<AnalysisPiece>,
    /// Recommended-reading items, sheet order. The page shows at most 7.
    pub news: Vec<NewsItem>,
    /// Most-read ranking.
    pub most_read: Vec<MostRead>,
}
