//! Percentile ranks and similar-player lookup.

use std::collections::BTreeMap;

use crate::calculate::{mean, percentile_rank, round_to};
use crate::leaders::is_ascending;
use crate::models::{Player, PlayerComparison};

/// Similar players listed per comparison.
pub const MAX_SIMILAR: usize = 3;

fn values(player: &Player, stats: &[&str]) -> Vec<Option<f64>> {
    let line = player.stat_line();
    stats.iter().map(|s| line.get(s)).collect()
}

fn same_position(a: &Player, b: &Player) -> bool {
    a.position.trim().eq_ignore_ascii_case(b.position.trim())
}

/// Compare `player` against the rest of its sport roster on `stats`.
///
/// A stat a player doesn't report is left out of that stat's population
/// rather than counted as zero. The player's own percentile for a stat it
/// lacks is 0, and similarity only looks at stats both players report.
pub fn compare(player: &Player, roster: &[Player], stats: &[&str]) -> PlayerComparison {
    let own = values(player, stats);
    let population: Vec<Vec<Option<f64>>> = roster.iter().map(|p| values(p, stats)).collect();

    let percentiles: BTreeMap<String, f64> = stats
        .iter()
        .enumerate()
        .map(|(i, stat)| {
            let pct = own[i].map_or(0.0, |value| {
                let column: Vec<f64> = population.iter().filter_map(|row| row[i]).collect();
                percentile_rank(value, &column, is_ascending(stat))
            });
            (stat.to_string(), round_to(pct, 1))
        })
        .collect();

    // Scale each stat by its roster maximum so no one stat dominates
    let scale: Vec<f64> = (0..stats.len())
        .map(|i| {
            population
                .iter()
                .filter_map(|row| row[i])
                .map(f64::abs)
                .fold(0.0, f64::max)
        })
        .collect();
    let distance = |other: &[Option<f64>]| -> Option<f64> {
        let squares: Vec<f64> = own
            .iter()
            .zip(other)
            .zip(&scale)
            .filter_map(|((a, b), s)| match (a, b) {
                (Some(a), Some(b)) if *s > 0.0 => Some(((a - b) / s).powi(2)),
                _ => None,
            })
            .collect();
        mean(&squares).map(f64::sqrt)
    };

    let mut peers: Vec<(&Player, f64)> = roster
        .iter()
        .zip(&population)
        .filter(|(other, _)| other.id != player.id && same_position(other, player))
        .filter_map(|(other, row)| distance(row.as_slice()).map(|d| (other, d)))
        .collect();
    peers.sort_by(|a, b| a.1.total_cmp(&b.1));

    PlayerComparison {
        similar_players: peers
            .into_iter()
            .take(MAX_SIMILAR)
            .map(|(p, _)| p.name.clone())
            .collect(),
        percentiles,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::stat_map;
    use serde_json::json;

    fn skater(id: &str, position: &str, goals: i64, points: i64) -> Player {
        Player::new(id, format!("Player {}", id), "T", position)
            .with_stats(stat_map(json!({"goals": goals, "points": points})))
    }

    fn roster() -> Vec<Player> {
        vec![
            skater("a", "C", 50, 130),
            skater("b", "C", 45, 120),
            skater("c", "C", 10, 30),
            skater("d", "D", 48, 125),
            skater("e", "C", 20, 50),
            skater("f", "C", 30, 70),
        ]
    }

    #[test]
    fn test_percentiles_within_roster() {
        let roster = roster();
        let comparison = compare(&roster[0], &roster, &["goals", "points"]);
        assert_eq!(comparison.percentiles["goals"], 100.0);
        assert_eq!(comparison.percentiles["points"], 100.0);

        let low = compare(&roster[2], &roster, &["goals"]);
        assert_eq!(low.percentiles["goals"], 16.7);
    }

    #[test]
    fn test_similar_players_same_position_closest_first() {
        let roster = roster();
        let comparison = compare(&roster[0], &roster, &["goals", "points"]);
        assert_eq!(
            comparison.similar_players,
            vec!["Player b".to_string(), "Player f".to_string(), "Player e".to_string()]
        );
    }

    #[test]
    fn test_ascending_stat_percentile_inverted() {
        let roster = vec![
            Player::new("x", "X", "T", "G").with_stats(stat_map(json!({"turnovers": 1}))),
            Player::new("y", "Y", "T", "G").with_stats(stat_map(json!({"turnovers": 4}))),
        ];
        let comparison = compare(&roster[0], &roster, &["turnovers"]);
        assert_eq!(comparison.percentiles["turnovers"], 100.0);
    }

    #[test]
    fn test_absent_stat_left_out_of_population() {
        let roster = vec![
            Player::new("a", "A", "T", "C").with_stats(stat_map(json!({"goals": 50, "points": 100}))),
            Player::new("b", "B", "T", "C").with_stats(stat_map(json!({"goals": 10, "points": 40}))),
            Player::new("c", "C", "T", "C").with_stats(stat_map(json!({"assists": 30}))),
        ];

        let comparison = compare(&roster[1], &roster, &["goals", "points"]);
        // 1 of 2 reported values at or below 10, not 2 of 3 with a zero
        assert_eq!(comparison.percentiles["goals"], 50.0);
        // "C" shares no stat with "B", so only "A" is similar
        assert_eq!(comparison.similar_players, vec!["A".to_string()]);

        let missing = compare(&roster[2], &roster, &["goals", "points"]);
        assert_eq!(missing.percentiles["goals"], 0.0);
        assert!(missing.similar_players.is_empty());
    }
}
