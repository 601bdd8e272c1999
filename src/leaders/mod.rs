//! Leaderboard building.
//!
//! For each (sport, category, stat) triple in the taxonomy, every player of
//! that sport is scanned for a numeric value, ranked, cut to the top N and
//! formatted for display. A stat no player has is left out of the output.

pub mod extract;
pub mod format;
pub mod rules;

use std::collections::BTreeMap;

use tracing::{debug, info};

use crate::models::{
    leaderboard_count, LeaderboardEntry, Leaderboards, Player, Roster, StatLeaders, StatTaxonomy,
};

pub use extract::{StatGroup, StatSources};
pub use format::format_value;
pub use rules::{is_ascending, RankingRules, SortDirection, ASCENDING_STATS};

/// Players of one sport with their lookup snapshots, in roster order.
pub struct Candidates<'a> {
    players: Vec<(&'a Player, StatSources)>,
}

impl<'a> Candidates<'a> {
    pub fn new(players: &'a [Player]) -> Self {
        Self {
            players: players
                .iter()
                .map(|p| (p, StatSources::from_player(p)))
                .collect(),
        }
    }

    /// Ranked top-N entries for `stat`. Empty when no player has a usable
    /// value.
    pub fn rank(&self, stat: &str, rules: &RankingRules) -> Vec<LeaderboardEntry> {
        let mut values: Vec<(&Player, f64)> = self
            .players
            .iter()
            .filter_map(|(player, sources)| sources.numeric(stat).map(|v| (*player, v)))
            .collect();

        // sort_by is stable, so ties keep roster order
        let direction = rules.direction(stat);
        values.sort_by(|a, b| direction.compare(a.1, b.1));
        values.truncate(rules.size);

        values
            .into_iter()
            .enumerate()
            .map(|(i, (player, raw))| {
                LeaderboardEntry::new(player, raw, format_value(stat, raw), i as u32 + 1)
            })
            .collect()
    }
}

/// Build every leaderboard named by `taxonomy`.
///
/// Sport and category maps are always present for the taxonomy's sports
/// and categories; only stats with no eligible player are omitted.
pub fn build_leaders(roster: &Roster, taxonomy: &StatTaxonomy, rules: &RankingRules) -> Leaderboards {
    let mut leaders = Leaderboards::new();

    for (sport, categories) in taxonomy.sports() {
        let players = roster.get(sport).map(Vec::as_slice).unwrap_or(&[]);
        let candidates = Candidates::new(players);
        let mut by_category = BTreeMap::new();

        for (category, stats) in categories {
            let mut boards = StatLeaders::new();
            for stat in stats {
                let entries = candidates.rank(stat, rules);
                if entries.is_empty() {
                    debug!("No eligible {} players for {}/{}", sport, category, stat);
                    continue;
                }
                boards.insert(stat.clone(), entries);
            }
            by_category.insert(category.clone(), boards);
        }

        leaders.insert(sport.to_string(), by_category);
    }

    info!("Built {} leaderboards", leaderboard_count(&leaders));
    leaders
}

/// One leaderboard outside the taxonomy walk.
pub fn leaderboard_for(
    roster: &Roster,
    sport: &str,
    stat: &str,
    rules: &RankingRules,
) -> Vec<LeaderboardEntry> {
    let players = roster.get(sport).map(Vec::as_slice).unwrap_or(&[]);
    Candidates::new(players).rank(stat, rules)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{stat_map, CategoryMap, FormattedValue};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn taxonomy(sport: &str, category: &str, stats: &[&str]) -> StatTaxonomy {
        let mut categories = CategoryMap::new();
        categories.insert(
            category.to_string(),
            stats.iter().map(|s| s.to_string()).collect(),
        );
        let mut sports = BTreeMap::new();
        sports.insert(sport.to_string(), categories);
        StatTaxonomy::new(sports)
    }

    fn nba_roster(second_points: serde_json::Value) -> Roster {
        let mut roster = Roster::new();
        roster.insert(
            "NBA".to_string(),
            vec![
                Player::new("1", "X", "LAL", "G").with_stats(stat_map(json!({"points": 30}))),
                Player::new("2", "Y", "BOS", "C")
                    .with_stats(stat_map(json!({ "points": second_points }))),
            ],
        );
        roster
    }

    #[test]
    fn test_points_leaderboard() {
        let roster = nba_roster(json!(10));
        let leaders = build_leaders(
            &roster,
            &taxonomy("NBA", "scoring", &["points"]),
            &RankingRules::default(),
        );

        let board = &leaders["NBA"]["scoring"]["points"];
        let summary: Vec<(&str, u32, FormattedValue)> = board
            .iter()
            .map(|e| (e.player_id.as_str(), e.rank, e.value.clone()))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("1", 1, FormattedValue::Integer(30)),
                ("2", 2, FormattedValue::Integer(10)),
            ]
        );
    }

    #[test]
    fn test_string_value_is_coerced() {
        let roster = nba_roster(json!("10 pts"));
        let board = leaderboard_for(&roster, "NBA", "points", &RankingRules::default());
        assert_eq!(board.len(), 2);
        assert_eq!(board[1].raw_value, 10.0);
        assert_eq!(board[1].value, FormattedValue::Integer(10));
    }

    #[test]
    fn test_unparseable_value_is_dropped() {
        let roster = nba_roster(json!("N/A"));
        let board = leaderboard_for(&roster, "NBA", "points", &RankingRules::default());
        assert_eq!(board.len(), 1);
        assert_eq!(board[0].player_id.as_str(), "1");
    }

    #[test]
    fn test_ascending_stat_ranks_low_first() {
        let mut roster = Roster::new();
        roster.insert(
            "MLB".to_string(),
            vec![
                Player::new("a", "A", "NYY", "SP").with_stats(stat_map(json!({"era": 3.5}))),
                Player::new("b", "B", "LAD", "SP").with_stats(stat_map(json!({"era": 2.1}))),
            ],
        );
        let board = leaderboard_for(&roster, "MLB", "era", &RankingRules::default());
        assert_eq!(board[0].player_id.as_str(), "b");
        assert_eq!(board[0].value, FormattedValue::Text("2.10".into()));
        assert_eq!(board[1].rank, 2);
    }

    #[test]
    fn test_missing_stat_is_omitted_but_category_kept() {
        let roster = nba_roster(json!(10));
        let leaders = build_leaders(
            &roster,
            &taxonomy("NBA", "scoring", &["points", "dunks"]),
            &RankingRules::default(),
        );
        let scoring = &leaders["NBA"]["scoring"];
        assert!(scoring.contains_key("points"));
        assert!(!scoring.contains_key("dunks"));
    }

    #[test]
    fn test_sport_without_roster_has_empty_categories() {
        let leaders = build_leaders(
            &Roster::new(),
            &taxonomy("NHL", "goalie", &["savePercentage"]),
            &RankingRules::default(),
        );
        assert!(leaders["NHL"]["goalie"].is_empty());
    }

    #[test]
    fn test_truncation_and_stable_ties() {
        let players: Vec<Player> = (0..15)
            .map(|i| {
                let points = if i < 3 { 50 } else { i };
                Player::new(format!("p{}", i), format!("P{}", i), "T", "G")
                    .with_stats(stat_map(json!({ "points": points })))
            })
            .collect();
        let mut roster = Roster::new();
        roster.insert("NBA".to_string(), players);

        let board = leaderboard_for(&roster, "NBA", "points", &RankingRules::default());
        assert_eq!(board.len(), 10);
        let ids: Vec<&str> = board.iter().take(3).map(|e| e.player_id.as_str()).collect();
        assert_eq!(ids, vec!["p0", "p1", "p2"]);
        let ranks: Vec<u32> = board.iter().map(|e| e.rank).collect();
        assert_eq!(ranks, (1..=10).collect::<Vec<u32>>());

        let short = leaderboard_for(&roster, "NBA", "points", &RankingRules::with_size(4));
        assert_eq!(short.len(), 4);
    }
}
