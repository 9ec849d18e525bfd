//! HTML rendering of the dashboard page.
//!
//! Builds the whole page as one string: header with navigation, the
//! tabbed poll-average panel, the recent-polls table, analysis blurbs,
//! the recommended-reading sidebar, and the most-read ranking. The
//! output is self-contained (embedded stylesheet, one small script for
//! tab switching) so it can be served as a static file.
//!
//! All interpolated text passes through [`escape_html`]; sheet content
//! is untrusted.

use crate::content::{nav_links, ELECTION_LABEL, POLL_AVERAGE_UPDATED};
use crate::models::{AnalysisPiece, DashboardPage, MostRead, NewsItem, PollAverage, RecentPoll};
use crate::utils::escape_html;
use itertools::Itertools;
use std::fmt::Write;

/// The sidebar shows at most this many news items.
pub const MAX_SIDEBAR_NEWS: usize = 7;

const STYLE: &str = r#"
    :root { color-scheme: light; }
    * { box-sizing: border-box; }
    body { margin: 0; font-family: system-ui, -apple-system, sans-serif; background: #f9fafb; color: #111827; }
    a { color: inherit; text-decoration: none; }
    a:hover { color: #2563eb; }
    header { position: sticky; top: 0; z-index: 50; background: #fff; border-bottom: 1px solid #e5e7eb; }
    .container { max-width: 72rem; margin: 0 auto; padding: 1rem; }
    .brand { display: flex; align-items: center; gap: .5rem; }
    .brand-mark { width: 2rem; height: 2rem; border-radius: .25rem; background: #dc2626; color: #fff; display: flex; align-items: center; justify-content: center; font-weight: 700; font-size: .85rem; }
    .brand h1 { font-size: 1.35rem; margin: 0; }
    .topbar { display: flex; align-items: center; justify-content: space-between; }
    nav a { margin-left: 1.5rem; color: #4b5563; font-weight: 500; }
    .grid { display: grid; grid-template-columns: 2fr 1fr; gap: 2rem; }
    @media (max-width: 56rem) { .grid { grid-template-columns: 1fr; } }
    .card { background: #fff; border: 1px solid #e5e7eb; border-radius: .5rem; padding: 1.25rem; margin-bottom: 1.5rem; }
    .card h2 { margin: 0 0 .25rem; font-size: 1.2rem; }
    .card .sub { color: #6b7280; font-size: .85rem; margin: 0 0 1rem; }
    .countdown { text-align: right; }
    .countdown .days { color: #dc2626; font-size: 1.5rem; font-weight: 700; }
    .countdown .label { color: #6b7280; font-size: .75rem; }
    .panel-top { display: flex; justify-content: space-between; align-items: flex-start; gap: 1rem; }
    .tabs { display: grid; grid-template-columns: 1fr 1fr; gap: .25rem; background: #f3f4f6; border-radius: .375rem; padding: .25rem; margin-bottom: 1.25rem; }
    .tab-trigger { border: 0; background: transparent; padding: .4rem; border-radius: .25rem; cursor: pointer; font-size: .85rem; }
    .tab-trigger.active { background: #fff; font-weight: 600; }
    .hidden { display: none; }
    .candidate-row { margin-bottom: 1rem; }
    .candidate-line { display: flex; justify-content: space-between; align-items: center; margin-bottom: .4rem; }
    .candidate-name { display: flex; align-items: center; gap: .5rem; }
    .swatch { width: .8rem; height: .8rem; border-radius: .2rem; display: inline-block; }
    .party { color: #6b7280; font-size: .85rem; }
    .pct { font-size: 1.3rem; font-weight: 700; }
    .badge { font-size: .7rem; border-radius: 9999px; padding: .1rem .5rem; background: #e5e7eb; }
    .badge.up { background: #111827; color: #fff; }
    .bar-track { background: #e5e7eb; border-radius: 9999px; height: .6rem; }
    .bar-fill { height: .6rem; border-radius: 9999px; }
    table { width: 100%; border-collapse: collapse; font-size: .875rem; }
    th, td { padding: .5rem .25rem; border-bottom: 1px solid #e5e7eb; }
    th { text-align: left; } th.num, td.num { text-align: center; font-weight: 600; }
    .placeholder { border: 2px dashed #d1d5db; border-radius: .5rem; padding: 2rem; text-align: center; background: #f9fafb; color: #6b7280; }
    .kind-badge { display: inline-block; border: 1px solid #d1d5db; border-radius: 9999px; font-size: .7rem; padding: .1rem .5rem; color: #374151; }
    .piece { padding: .75rem 0; border-bottom: 1px solid #e5e7eb; }
    .piece:last-child { border-bottom: 0; }
    .piece h4 { margin: .4rem 0 .25rem; font-size: .9rem; }
    .meta { color: #6b7280; font-size: .75rem; }
    .teaser { color: #4b5563; font-size: .8rem; margin: .25rem 0 0; }
    .news-item { padding: .5rem 0; border-bottom: 1px solid #e5e7eb; }
    .news-item:last-child { border-bottom: 0; }
    .news-item h4 { margin: 0 0 .25rem; font-size: .8rem; line-height: 1.3; }
    .news-meta { display: flex; justify-content: space-between; color: #6b7280; font-size: .72rem; }
    .lock { color: #9ca3af; font-size: .7rem; }
    .rank { color: #dc2626; font-size: 1.1rem; font-weight: 700; min-width: 1.25rem; display: inline-block; }
"#;

const TAB_SCRIPT: &str = r#"
    function showTab(name) {
      document.querySelectorAll('.tab-pane').forEach(function (pane) {
        pane.classList.toggle('hidden', pane.id !== 'tab-' + name);
      });
      document.querySelectorAll('.tab-trigger').forEach(function (btn) {
        btn.classList.toggle('active', btn.dataset.tab === name);
      });
    }
"#;

/// Render the full page for one edition.
///
/// Pure string builder; safe to call with an empty news list (the
/// sidebar card simply renders without entries).
pub fn render_page(page: &DashboardPage) -> String {
    let mut out = String::with_capacity(32 * 1024);

    out.push_str("<!doctype html>\n<html lang=\"es\">\n<head>\n");
    out.push_str("<meta charset=\"utf-8\">\n");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    writeln!(
        out,
        "<title>Pulso Nacional | Elección Presidencial 2025</title>"
    )
    .unwrap();
    out.push_str("<style>");
    out.push_str(STYLE);
    out.push_str("</style>\n</head>\n<body>\n");

    render_header(&mut out);

    out.push_str("<div class=\"container\">\n<div class=\"grid\">\n<main>\n");
    render_poll_average(&mut out, page);
    render_recent_polls(&mut out, &page.recent_polls);
    render_analysis(&mut out, &page.analysis);
    out.push_str("</main>\n<aside>\n");
    render_news_sidebar(&mut out, &page.news);
    render_most_read(&mut out, &page.most_read);
    out.push_str("</aside>\n</div>\n</div>\n");

    out.push_str("<script>");
    out.push_str(TAB_SCRIPT);
    out.push_str("</script>\n</body>\n</html>\n");
    out
}

fn render_header(out: &mut String) {
    out.push_str("<header>\n<div class=\"container topbar\">\n");
    out.push_str("<div class=\"brand\"><span class=\"brand-mark\">PN</span><h1>Pulso Nacional</h1></div>\n");

    let links = nav_links()
        .iter()
        .map(|label| format!("<a href=\"#\">{}</a>", escape_html(label)))
        .join("");
    writeln!(out, "<nav>{links}</nav>").unwrap();
    out.push_str("</div>\n</header>\n");
}

fn render_poll_average(out: &mut String, page: &DashboardPage) {
    out.push_str("<section class=\"card\">\n<div class=\"panel-top\">\n<div>\n");
    out.push_str("<h2>MetaEncuesta</h2>\n");
    out.push_str("<p class=\"sub\">Elección Presidencial 2025</p>\n");
    out.push_str("</div>\n<div class=\"countdown\">\n");
    writeln!(
        out,
        "<div class=\"days\">{}</div>",
        page.days_until_election
    )
    .unwrap();
    writeln!(out, "<div class=\"label\">{ELECTION_LABEL}</div>").unwrap();
    out.push_str("</div>\n</div>\n");

    out.push_str("<div class=\"tabs\">\n");
    out.push_str("<button class=\"tab-trigger active\" data-tab=\"current\" onclick=\"showTab('current')\">Promedio Actual</button>\n");
    out.push_str("<button class=\"tab-trigger\" data-tab=\"evolution\" onclick=\"showTab('evolution')\">Evolución</button>\n");
    out.push_str("</div>\n");

    out.push_str("<div id=\"tab-current\" class=\"tab-pane\">\n");
    writeln!(
        out,
        "<p class=\"sub\">Promedio Agregado de Encuestas más recientes (Actualizado: {POLL_AVERAGE_UPDATED})</p>"
    )
    .unwrap();
    for candidate in &page.poll_average {
        render_candidate_row(out, candidate);
    }
    out.push_str("</div>\n");

    // Evolution chart is not built yet; the tab shows a placeholder pane.
    out.push_str("<div id=\"tab-evolution\" class=\"tab-pane hidden\">\n");
    out.push_str("<p class=\"sub\">Gráfico de evolución próximamente</p>\n");
    out.push_str("<div class=\"placeholder\">\n<h3>Gráfico de Evolución</h3>\n");
    out.push_str("<p>Próximamente: Gráfico interactivo mostrando la evolución de las encuestas en el tiempo</p>\n");
    out.push_str("</div>\n</div>\n</section>\n");
}

fn render_candidate_row(out: &mut String, candidate: &PollAverage) {
    let badge_class = if candidate.change > 0.0 { "badge up" } else { "badge" };
    let sign = if candidate.change > 0.0 { "+" } else { "" };

    out.push_str("<div class=\"candidate-row\">\n<div class=\"candidate-line\">\n");
    writeln!(
        out,
        "<span class=\"candidate-name\"><span class=\"swatch\" style=\"background:{}\"></span><strong>{}</strong> <span class=\"party\">({})</span></span>",
        escape_html(&candidate.color),
        escape_html(&candidate.candidate),
        escape_html(&candidate.party),
    )
    .unwrap();
    writeln!(
        out,
        "<span><span class=\"pct\">{}%</span> <span class=\"{badge_class}\">{sign}{}%</span></span>",
        candidate.percentage, candidate.change,
    )
    .unwrap();
    out.push_str("</div>\n");
    writeln!(
        out,
        "<div class=\"bar-track\"><div class=\"bar-fill\" style=\"width:{}%;background:{}\"></div></div>",
        candidate.percentage,
        escape_html(&candidate.color),
    )
    .unwrap();
    out.push_str("</div>\n");
}

fn render_recent_polls(out: &mut String, polls: &[RecentPoll]) {
    out.push_str("<section class=\"card\">\n<h2>Encuestas Recientes</h2>\n");
    out.push_str("<p class=\"sub\">Desglose detallado de las encuestas más recientes</p>\n");
    out.push_str("<table>\n<thead>\n<tr><th>Encuestadora</th><th>Fecha</th>");
    out.push_str("<th class=\"num\">Boric</th><th class=\"num\">Kast</th><th class=\"num\">Matthei</th><th class=\"num\">Provoste</th><th class=\"num\">Parisi</th></tr>\n");
    out.push_str("</thead>\n<tbody>\n");

    for poll in polls {
        let numbers = [poll.boric, poll.kast, poll.matthei, poll.provoste, poll.parisi]
            .iter()
            .map(|n| format!("<td class=\"num\">{n}%</td>"))
            .join("");
        writeln!(
            out,
            "<tr><td>{}</td><td>{}</td>{numbers}</tr>",
            escape_html(&poll.pollster),
            escape_html(&poll.date),
        )
        .unwrap();
    }

    out.push_str("</tbody>\n</table>\n</section>\n");
}

fn render_analysis(out: &mut String, pieces: &[AnalysisPiece]) {
    out.push_str("<section class=\"card\">\n<h2>Más Análisis y Opinión</h2>\n");
    out.push_str("<p class=\"sub\">Enlaces de interés de todo el espectro político</p>\n");

    for piece in pieces {
        out.push_str("<div class=\"piece\">\n");
        writeln!(
            out,
            "<span class=\"kind-badge\">{}</span>",
            escape_html(&piece.kind)
        )
        .unwrap();
        writeln!(out, "<h4>{}</h4>", escape_html(&piece.title)).unwrap();
        writeln!(
            out,
            "<div class=\"meta\">Por {} • {} • {}</div>",
            escape_html(&piece.author),
            escape_html(&piece.outlet),
            escape_html(&piece.time),
        )
        .unwrap();
        writeln!(out, "<p class=\"teaser\">{}</p>", escape_html(&piece.teaser)).unwrap();
        out.push_str("</div>\n");
    }

    out.push_str("</section>\n");
}

fn render_news_sidebar(out: &mut String, news: &[NewsItem]) {
    out.push_str("<section class=\"card\">\n<h2>Recomendados</h2>\n");

    for item in news.iter().take(MAX_SIDEBAR_NEWS) {
        let lock = if item.paywall {
            " <span class=\"lock\">🔒</span>"
        } else {
            ""
        };

        out.push_str("<div class=\"news-item\">\n");
        writeln!(
            out,
            "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\"><h4>{}{lock}</h4></a>",
            escape_html(&item.url),
            escape_html(&item.title),
        )
        .unwrap();
        writeln!(
            out,
            "<div class=\"news-meta\"><span>{}, {}</span><span>{}</span></div>",
            escape_html(&item.author),
            escape_html(&item.source),
            escape_html(&item.time),
        )
        .unwrap();
        out.push_str("</div>\n");
    }

    out.push_str("</section>\n");
}

fn render_most_read(out: &mut String, entries: &[MostRead]) {
    out.push_str("<section class=\"card\">\n<h2>Lo más Leído</h2>\n");
    out.push_str("<p class=\"sub\">Artículos más populares de la semana</p>\n");

    for entry in entries {
        out.push_str("<div class=\"news-item\">\n");
        writeln!(
            out,
            "<h4><span class=\"rank\">{}</span> {}</h4>",
            entry.rank,
            escape_html(&entry.title),
        )
        .unwrap();
        writeln!(
            out,
            "<div class=\"news-meta\"><span>{} • {}</span></div>",
            escape_html(&entry.outlet),
            escape_html(&entry.reads),
        )
        .unwrap();
        out.push_str("</div>\n");
    }

    out.push_str("</section>\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content;
    use crate::sheets::fallback_news;

    fn page_with_news(news: Vec<NewsItem>) -> DashboardPage {
        DashboardPage {
            local_date: "2025-08-05".to_string(),
            days_until_election: 103,
            poll_average: content::poll_average(),
            recent_polls: content::recent_polls(),
            analysis: content::analysis_pieces(),
            news,
            most_read: content::most_read(),
        }
    }

    #[test]
    fn test_render_page_with_fallback_news() {
        let html = render_page(&page_with_news(fallback_news()));

        assert!(html.contains("Pulso Nacional"));
        assert!(html.contains("MetaEncuesta"));
        assert!(html.contains("Encuestas Recientes"));
        assert!(html.contains("Recomendados"));
        assert!(html.contains("Lo más Leído"));
        assert!(html.contains("Los desafíos de Jara"));
        assert!(html.contains(">103<"));
    }

    #[test]
    fn test_render_page_with_no_news_does_not_panic() {
        let html = render_page(&page_with_news(vec![]));

        assert!(html.contains("Recomendados"));
        assert!(!html.contains("news-item\">\n<a"));
    }

    #[test]
    fn test_sidebar_caps_at_seven_items() {
        let item = NewsItem {
            title: "Titular repetido".to_string(),
            author: "Autora".to_string(),
            source: "Fuente".to_string(),
            url: "#".to_string(),
            time: "Hace 1 hora".to_string(),
            category: "General".to_string(),
            paywall: false,
        };
        let html = render_page(&page_with_news(vec![item; 12]));

        assert_eq!(html.matches("Titular repetido").count(), MAX_SIDEBAR_NEWS);
    }

    #[test]
    fn test_paywalled_items_show_lock() {
        let html = render_page(&page_with_news(fallback_news()));
        // Two fallback records are paywalled.
        assert_eq!(html.matches("🔒").count(), 2);
    }

    #[test]
    fn test_untrusted_text_is_escaped() {
        let item = NewsItem {
            title: "<script>alert('x')</script>".to_string(),
            author: "a & b".to_string(),
            source: "Fuente".to_string(),
            url: "\"><script>".to_string(),
            time: "".to_string(),
            category: "General".to_string(),
            paywall: false,
        };
        let html = render_page(&page_with_news(vec![item]));

        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;alert"));
        assert!(html.contains("a &amp; b"));
        assert!(html.contains("href=\"&quot;&gt;&lt;script&gt;\""));
    }

    #[test]
    fn test_positive_change_gets_plus_sign() {
        let html = render_page(&page_with_news(vec![]));

        assert!(html.contains("+1.2%"));
        assert!(html.contains("-0.8%"));
        assert!(!html.contains("+-0.8%"));
    }

    #[test]
    fn test_evolution_tab_renders_placeholder() {
        let html = render_page(&page_with_news(vec![]));

        assert!(html.contains("id=\"tab-evolution\""));
        assert!(html.contains("Gráfico de Evolución"));
        assert!(html.contains("tab-pane hidden"));
    }
}
