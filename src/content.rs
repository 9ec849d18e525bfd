//! Static datasets for the dashboard page.
//!
//! Everything here is editorial content that changes by hand between
//! deployments: the aggregated poll average, the recent-polls table, the
//! analysis blurbs, the most-read ranking, and the header navigation.
//! Pure constructors, no I/O. The only dataset fetched at runtime is the
//! recommended-reading list (see [`crate::sheets`]).

use crate::models::{AnalysisPiece, MostRead, PollAverage, RecentPoll};

/// Label shown under the countdown in the header.
pub const ELECTION_LABEL: &str = "Días hasta Primera Vuelta";

/// Last manual update of the aggregated average, shown above the bars.
pub const POLL_AVERAGE_UPDATED: &str = "15 de enero, 2024";

/// Header navigation labels. Placeholder links, no routing behind them.
pub fn nav_links() -> Vec<&'static str> {
    vec!["Encuestas", "Noticias", "Análisis", "Elecciones"]
}

/// Aggregated poll average, ordered by percentage.
pub fn poll_average() -> Vec<PollAverage> {
    vec![
        PollAverage {
            candidate: "Gabriel Boric".to_string(),
            party: "Frente Amplio".to_string(),
            percentage: 38.2,
            change: 1.2,
            color: "#ef4444".to_string(),
        },
        PollAverage {
            candidate: "José Antonio Kast".to_string(),
            party: "Partido Republicano".to_string(),
            percentage: 32.7,
            change: -0.8,
            color: "#2563eb".to_string(),
        },
        PollAverage {
            candidate: "Evelyn Matthei".to_string(),
            party: "UDI".to_string(),
            percentage: 15.4,
            change: 2.1,
            color: "#9333ea".to_string(),
        },
        PollAverage {
            candidate: "Yasna Provoste".to_string(),
            party: "Partido Socialista".to_string(),
            percentage: 8.4,
            change: -0.3,
            color: "#16a34a".to_string(),
        },
        PollAverage {
            candidate: "Franco Parisi".to_string(),
            party: "Partido de la Gente".to_string(),
            percentage: 5.3,
            change: 0.5,
            color: "#f97316".to_string(),
        },
    ]
}

/// Recent individual polls, newest first.
pub fn recent_polls() -> Vec<RecentPoll> {
    vec![
        RecentPoll {
            pollster: "Cadem".to_string(),
            date: "13-15 Ene".to_string(),
            boric: 39,
            kast: 33,
            matthei: 16,
            provoste: 8,
            parisi: 4,
        },
        RecentPoll {
            pollster: "Criteria".to_string(),
            date: "10-12 Ene".to_string(),
            boric: 38,
            kast: 32,
            matthei: 15,
            provoste: 9,
            parisi: 6,
        },
        RecentPoll {
            pollster: "Activa Research".to_string(),
            date: "8-10 Ene".to_string(),
            boric: 37,
            kast: 34,
            matthei: 15,
            provoste: 8,
            parisi: 6,
        },
        RecentPoll {
            pollster: "MORI".to_string(),
            date: "6-8 Ene".to_string(),
            boric: 39,
            kast: 31,
            matthei: 16,
            provoste: 9,
            parisi: 5,
        },
        RecentPoll {
            pollster: "Ipsos".to_string(),
            date: "3-5 Ene".to_string(),
            boric: 38,
            kast: 33,
            matthei: 14,
            provoste: 8,
            parisi: 7,
        },
    ]
}

/// Analysis and opinion blurbs for the main column.
pub fn analysis_pieces() -> Vec<AnalysisPiece> {
    vec![
        AnalysisPiece {
            kind: "Análisis".to_string(),
            title: "\"La estrategia de Boric para mantener el liderazgo\"".to_string(),
            author: "Carlos Peña".to_string(),
            outlet: "El Mostrador".to_string(),
            time: "Hace 2 horas".to_string(),
            teaser: "Un análisis sobre las tácticas de campaña del candidato oficialista y cómo busca consolidar su ventaja en las encuestas...".to_string(),
        },
        AnalysisPiece {
            kind: "Opinión".to_string(),
            title: "\"El factor Parisi: ¿sorpresa electoral o espejismo?\"".to_string(),
            author: "María Olivia Mönckeberg".to_string(),
            outlet: "La Tercera".to_string(),
            time: "Hace 4 horas".to_string(),
            teaser: "La candidatura del economista genera expectación, pero ¿tiene realmente posibilidades de llegar a segunda vuelta?".to_string(),
        },
        AnalysisPiece {
            kind: "Investigación".to_string(),
            title: "\"Encuestas vs. realidad: lecciones de elecciones pasadas\"".to_string(),
            author: "Axel Callís".to_string(),
            outlet: "Ciper Chile".to_string(),
            time: "Hace 6 horas".to_string(),
            teaser: "Un repaso histórico sobre la precisión de las encuestas en Chile y qué esperar para noviembre...".to_string(),
        },
    ]
}

/// Most-read ranking for the sidebar.
pub fn most_read() -> Vec<MostRead> {
    vec![
        MostRead {
            rank: 1,
            title: "Encuesta CEP: Boric lidera con 43% de las preferencias".to_string(),
            outlet: "El Mercurio".to_string(),
            reads: "15.2k lecturas".to_string(),
        },
        MostRead {
            rank: 2,
            title: "Kast presenta plan económico para combatir la inflación".to_string(),
            outlet: "La Tercera".to_string(),
            reads: "12.8k lecturas".to_string(),
        },
        MostRead {
            rank: 3,
            title: "Análisis: ¿Puede Provoste llegar a segunda vuelta?".to_string(),
            outlet: "CNN Chile".to_string(),
            reads: "9.4k lecturas".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poll_average_ordered_by_percentage() {
        let average = poll_average();
        assert_eq!(average.len(), 5);
        for pair in average.windows(2) {
            assert!(pair[0].percentage >= pair[1].percentage);
        }
    }

    #[test]
    fn test_recent_polls_cover_all_candidates() {
        let polls = recent_polls();
        assert_eq!(polls.len(), 5);
        assert_eq!(polls[0].pollster, "Cadem");
        assert!(polls.iter().all(|p| p.boric > 0 && p.parisi > 0));
    }

    #[test]
    fn test_analysis_kinds() {
        let kinds: Vec<String> = analysis_pieces().into_iter().map(|p| p.kind).collect();
        assert_eq!(kinds, ["Análisis", "Opinión", "Investigación"]);
    }

    #[test]
    fn test_most_read_ranks_are_sequential() {
        let ranks: Vec<u32> = most_read().into_iter().map(|m| m.rank).collect();
        assert_eq!(ranks, [1, 2, 3]);
    }

    #[test]
    fn test_nav_links() {
        assert_eq!(nav_links().len(), 4);
    }
}
