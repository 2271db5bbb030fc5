//! Turning ranked groups into the text report.

use crate::ranking::{RankOrder, ScoredMovie};
use data_loader::{AnalysisError, DataSet, GroupKey, Result};

/// Ranked movies for one group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupRanking {
    pub key: GroupKey,
    pub movies: Vec<ScoredMovie>,
}

/// Render all groups, in the order given, as one newline-joined block.
///
/// Each group gets a blank line, a header naming the order and the group,
/// another blank line, then one `<Title> - total rating <Total>` line per movie.
/// Every ranked movie must be present in `data`.
pub fn build_report(data: &DataSet, order: RankOrder, rankings: &[GroupRanking]) -> Result<String> {
    let mut lines: Vec<String> = Vec::new();

    for ranking in rankings {
        lines.push(String::new());
        lines.push(format!(
            "{} ranked movies for group: {}",
            order.title(),
            ranking.key.label()
        ));
        lines.push(String::new());

        for scored in &ranking.movies {
            let movie = data
                .get_movie(scored.movie_id)
                .ok_or_else(|| AnalysisError::MissingReference {
                    entity: "Movie".to_string(),
                    id: scored.movie_id,
                })?;
            lines.push(format!("{} - total rating {}", movie.title, scored.total));
        }
    }

    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::{Gender, Movie};

    #[test]
    fn test_report_layout() {
        let mut data = DataSet::new();
        data.insert_movie(Movie { id: 1, title: "Toy Story (1995)".to_string() });
        data.insert_movie(Movie { id: 2, title: "Heat (1995)".to_string() });

        let rankings = vec![
            GroupRanking {
                key: GroupKey::Gender(Gender::Female),
                movies: vec![],
            },
            GroupRanking {
                key: GroupKey::Gender(Gender::Male),
                movies: vec![
                    ScoredMovie { movie_id: 2, total: 9 },
                    ScoredMovie { movie_id: 1, total: 8 },
                ],
            },
        ];

        let report = build_report(&data, RankOrder::Top, &rankings).unwrap();
        let expected = [
            "",
            "Top ranked movies for group: Female",
            "",
            "",
            "Top ranked movies for group: Male",
            "",
            "Heat (1995) - total rating 9",
            "Toy Story (1995) - total rating 8",
        ]
        .join("\n");
        assert_eq!(report, expected);
    }

    #[test]
    fn test_empty_report() {
        let data = DataSet::new();
        assert_eq!(build_report(&data, RankOrder::Bottom, &[]).unwrap(), "");
    }

    #[test]
    fn test_ranked_movie_without_title_is_an_error() {
        let data = DataSet::new();
        let rankings = vec![GroupRanking {
            key: GroupKey::Gender(Gender::Male),
            movies: vec![ScoredMovie { movie_id: 7, total: -1 }],
        }];

        let err = build_report(&data, RankOrder::Top, &rankings).unwrap_err();
        assert!(matches!(err, AnalysisError::MissingReference { id: 7, .. }));
    }
}
