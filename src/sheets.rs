//! Recommended-reading fetcher backed by the Google Sheets API.
//!
//! The editorial team curates news links in one tab of a Google Sheet.
//! This module reads a fixed range of that tab (rows 2-20, columns A-G)
//! through the Sheets v4 `values` endpoint and maps each row positionally
//! into a [`NewsItem`]:
//!
//! | Column | Field    | Blank cell becomes |
//! |--------|----------|--------------------|
//! | A      | title    | row is dropped     |
//! | B      | author   | `""`               |
//! | C      | source   | `""`               |
//! | D      | url      | `"#"`              |
//! | E      | time     | `""`               |
//! | F      | category | `"General"`        |
//! | G      | paywall  | `false`            |
//!
//! # Degrade-to-demo-content
//!
//! [`fetch_news`] never fails. Missing credentials, transport errors,
//! non-success statuses, malformed payloads, and empty result sets all
//! collapse to the same outcome: one diagnostic log line and the built-in
//! [`fallback_news`] list. The page always renders.

use crate::config::DashboardConfig;
use crate::models::NewsItem;
use crate::utils::truncate_for_log;
use once_cell::sync::Lazy;
use reqwest::header::CACHE_CONTROL;
use serde::Deserialize;
use std::error::Error;
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};
use url::Url;

/// Base URL of the Sheets v4 spreadsheets API.
const SHEETS_API_BASE: &str = "https://sheets.googleapis.com/v4/spreadsheets/";

/// Cell range read from the configured tab: up to 19 rows, 7 columns.
const NEWS_RANGE: &str = "A2:G20";

/// Freshness hint forwarded to any cache between us and the API.
const REVALIDATE_HINT: &str = "max-age=300";

/// One attempt, bounded: the page render should never hang on the sheet.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

static HTTP: Lazy<reqwest::Client> = Lazy::new(|| {
    reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .expect("reqwest client")
});

/// The `values` payload returned by the Sheets API for a range read.
///
/// Google omits the `values` key entirely when the range is empty.
#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<String>>,
}

/// Fetch the recommended-reading list, in sheet row order.
///
/// Issues at most one request per call. Returns the built-in fallback
/// list when credentials are missing, the request fails in any way, or
/// the sheet yields no usable rows. This function is total: the caller
/// never sees an error.
#[instrument(level = "info", skip_all)]
pub async fn fetch_news(config: &DashboardConfig) -> Vec<NewsItem> {
    let (Some(sheet_id), Some(api_key)) = (&config.sheet_id, &config.api_key) else {
        info!("Sheets credentials not configured; using built-in recommendations");
        return fallback_news();
    };

    match fetch_live(sheet_id, api_key, &config.sheet_tab).await {
        Ok(items) if !items.is_empty() => {
            info!(count = items.len(), "Fetched recommended reading from sheet");
            items
        }
        Ok(_) => {
            warn!("Sheet returned no usable rows; using built-in recommendations");
            fallback_news()
        }
        Err(e) => {
            error!(error = %e, "Google Sheets error; using built-in recommendations");
            fallback_news()
        }
    }
}

/// Single best-effort read of the configured range. No retry.
async fn fetch_live(
    sheet_id: &str,
    api_key: &str,
    sheet_tab: &str,
) -> Result<Vec<NewsItem>, Box<dyn Error>> {
    let endpoint = news_endpoint(sheet_id, api_key, sheet_tab)?;
    debug!(path = %endpoint.path(), "Requesting sheet range");

    let response = HTTP
        .get(endpoint)
        .header(CACHE_CONTROL, REVALIDATE_HINT)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(format!("sheet request failed with status {status}").into());
    }

    let body = response.text().await?;
    let range: ValueRange = serde_json::from_str(&body).map_err(|e| {
        warn!(
            error = %e,
            body_preview = %truncate_for_log(&body, 300),
            "Sheets payload did not parse"
        );
        e
    })?;

    Ok(range
        .values
        .iter()
        .filter_map(|row| parse_row(row))
        .collect())
}

/// Build the range-read endpoint, range percent-encoded, key as a query pair.
fn news_endpoint(sheet_id: &str, api_key: &str, sheet_tab: &str) -> Result<Url, Box<dyn Error>> {
    let base = Url::parse(SHEETS_API_BASE)?;
    let range = format!("{sheet_tab}!{NEWS_RANGE}");
    let mut endpoint = base.join(&format!(
        "{}/values/{}",
        sheet_id,
        urlencoding::encode(&range)
    ))?;
    endpoint.query_pairs_mut().append_pair("key", api_key);
    Ok(endpoint)
}

/// Map one sheet row to a [`NewsItem`], positionally.
///
/// Returns `None` for rows whose title cell is blank. Short rows are
/// fine; missing trailing cells take the documented defaults.
fn parse_row(row: &[String]) -> Option<NewsItem> {
    let title = cell(row, 0);
    if title.trim().is_empty() {
        return None;
    }

    Some(NewsItem {
        title,
        author: cell(row, 1),
        source: cell(row, 2),
        url: non_blank_or(cell(row, 3), "#"),
        time: cell(row, 4),
        category: non_blank_or(cell(row, 5), "General"),
        paywall: cell(row, 6).trim().eq_ignore_ascii_case("true"),
    })
}

fn cell(row: &[String], index: usize) -> String {
    row.get(index).cloned().unwrap_or_default()
}

fn non_blank_or(value: String, default: &str) -> String {
    if value.is_empty() {
        default.to_string()
    } else {
        value
    }
}

/// The built-in recommended-reading list.
///
/// Shown whenever live data cannot be obtained. Built fresh on each call;
/// content is fixed.
pub fn fallback_news() -> Vec<NewsItem> {
    vec![
        NewsItem {
            title: "Los desafíos de Jara para romper su techo electoral".to_string(),
            author: "Francisca Castillo".to_string(),
            source: "El Mostrador".to_string(),
            url: "https://www.elmostrador.cl/politica/2025/08/06/los-desafios-de-jara-para-romper-su-techo-electoral/".to_string(),
            time: "Hace 1 hora".to_string(),
            category: "Análisis".to_string(),
            paywall: false,
        },
        NewsItem {
            title: "Dupla Sutil-Coloma hace fuerte reestructuración de la campaña de Matthei bajo el lema 'Levantar Chile'".to_string(),
            author: "Equipo Ex-Ante".to_string(),
            source: "Ex-Ante".to_string(),
            url: "https://www.ex-ante.cl/dupla-sutil-coloma-hace-fuerte-reestructuracion-de-la-campana-de-matthei-bajo-el-lema-levantar-chile/".to_string(),
            time: "Hace 1 hora".to_string(),
            category: "Campaña".to_string(),
            paywall: false,
        },
        NewsItem {
            title: "La candidata que no se quiere encasillar".to_string(),
            author: "Columnista".to_string(),
            source: "El Líbero".to_string(),
            url: "https://ellibero.cl/columnas-de-opinion/la-candidata-que-no-se-quiere-encasillar/".to_string(),
            time: "Hace 2 horas".to_string(),
            category: "Opinión".to_string(),
            paywall: false,
        },
        NewsItem {
            title: "El tabú en las presidenciales: la posibilidad de que Franco Parisi pase a segunda vuelta".to_string(),
            author: "Redacción".to_string(),
            source: "Interferencia".to_string(),
            url: "https://interferencia.cl/articulos/el-tabu-en-las-presidenciales-la-posibilidad-de-que-franco-parisi-pase-segunda-vuelta".to_string(),
            time: "Hace 3 horas".to_string(),
            category: "Análisis".to_string(),
            paywall: false,
        },
        NewsItem {
            title: "Análisis: Las claves del debate presidencial y su impacto en las encuestas".to_string(),
            author: "María José Hoffmann".to_string(),
            source: "La Tercera".to_string(),
            url: "#".to_string(),
            time: "Hace 4 horas".to_string(),
            category: "Análisis".to_string(),
            paywall: true,
        },
        NewsItem {
            title: "Encuesta Cadem: Boric mantiene ventaja pero se estrecha la diferencia".to_string(),
            author: "Carlos Peña".to_string(),
            source: "Emol".to_string(),
            url: "#".to_string(),
            time: "Hace 5 horas".to_string(),
            category: "Encuestas".to_string(),
            paywall: false,
        },
        NewsItem {
            title: "Kast presenta nueva propuesta económica para enfrentar la inflación".to_string(),
            author: "Rodrigo Álvarez".to_string(),
            source: "El Mercurio".to_string(),
            url: "#".to_string(),
            time: "Hace 6 horas".to_string(),
            category: "Economía".to_string(),
            paywall: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_parse_row_full() {
        let item = parse_row(&row(&[
            "Titular",
            "Autora",
            "El Mostrador",
            "https://example.cl/nota",
            "Hace 1 hora",
            "Encuestas",
            "false",
        ]))
        .unwrap();

        assert_eq!(item.title, "Titular");
        assert_eq!(item.author, "Autora");
        assert_eq!(item.source, "El Mostrador");
        assert_eq!(item.url, "https://example.cl/nota");
        assert_eq!(item.time, "Hace 1 hora");
        assert_eq!(item.category, "Encuestas");
        assert!(!item.paywall);
    }

    #[test]
    fn test_parse_row_defaults() {
        let item = parse_row(&row(&["Solo titular"])).unwrap();

        assert_eq!(item.author, "");
        assert_eq!(item.source, "");
        assert_eq!(item.url, "#");
        assert_eq!(item.time, "");
        assert_eq!(item.category, "General");
        assert!(!item.paywall);
    }

    #[test]
    fn test_parse_row_blank_title_dropped() {
        assert!(parse_row(&row(&["", "Autora", "Fuente"])).is_none());
        assert!(parse_row(&row(&["   ", "Autora", "Fuente"])).is_none());
        assert!(parse_row(&[]).is_none());
    }

    #[test]
    fn test_parse_row_paywall_variants() {
        let paywall = |v: &str| {
            parse_row(&row(&["t", "", "", "", "", "", v]))
                .unwrap()
                .paywall
        };

        assert!(paywall("true"));
        assert!(paywall("TRUE"));
        assert!(paywall(" True "));
        assert!(!paywall("false"));
        assert!(!paywall("yes"));
        assert!(!paywall("1"));
        assert!(!paywall(""));
    }

    #[test]
    fn test_value_range_without_values_key() {
        let range: ValueRange = serde_json::from_str(
            r#"{"range": "Recomendados!A2:G20", "majorDimension": "ROWS"}"#,
        )
        .unwrap();
        assert!(range.values.is_empty());
    }

    #[test]
    fn test_value_range_rows_preserve_order() {
        let range: ValueRange = serde_json::from_str(
            r#"{"values": [["Primera"], ["Segunda"], [""], ["Tercera"]]}"#,
        )
        .unwrap();

        let titles: Vec<String> = range
            .values
            .iter()
            .filter_map(|r| parse_row(r))
            .map(|i| i.title)
            .collect();
        assert_eq!(titles, ["Primera", "Segunda", "Tercera"]);
    }

    #[test]
    fn test_news_endpoint_encodes_range() {
        let endpoint = news_endpoint("1AbC", "secret-key", "Recomendados").unwrap();
        let s = endpoint.as_str();

        assert!(s.starts_with("https://sheets.googleapis.com/v4/spreadsheets/1AbC/values/"));
        assert!(s.contains("Recomendados%21A2%3AG20"));
        assert!(s.contains("key=secret-key"));
    }

    #[test]
    fn test_fallback_news_fixed_records() {
        let fallback = fallback_news();

        assert_eq!(fallback.len(), 7);
        assert_eq!(
            fallback[0].title,
            "Los desafíos de Jara para romper su techo electoral"
        );
        assert_eq!(fallback[0].source, "El Mostrador");
        assert!(!fallback[0].paywall);
        assert_eq!(fallback[4].author, "María José Hoffmann");
        assert!(fallback[4].paywall);
        assert_eq!(fallback[6].category, "Economía");
        assert!(fallback[6].paywall);
        assert!(fallback.iter().all(|i| !i.title.trim().is_empty()));
    }

    #[test]
    fn test_fallback_news_is_stable() {
        assert_eq!(fallback_news(), fallback_news());
    }

    #[tokio::test]
    async fn test_fetch_news_without_credentials_uses_fallback() {
        let config = DashboardConfig {
            sheet_id: None,
            api_key: Some("key-without-sheet".to_string()),
            sheet_tab: "Recomendados".to_string(),
            election_date: chrono::NaiveDate::from_ymd_opt(2025, 11, 16).unwrap(),
        };

        let news = fetch_news(&config).await;
        assert_eq!(news, fallback_news());
    }
}
