//! Recent-form trend labels.

use crate::calculate::per_game;
use crate::models::{Player, StatLine, StatTrends, TrendDirection};

/// Relative change in per-game output that counts as a trend.
pub const TREND_THRESHOLD: f64 = 0.10;

/// Per-game value of `stat`. `None` unless the window reports a positive
/// games count.
fn rate(line: &StatLine<'_>, stat: &str) -> Option<f64> {
    let games = line.games().filter(|g| *g > 0.0)?;
    per_game(line.get(stat)?, games)
}

/// Classify recent per-game output against the season baseline.
pub fn direction(season: Option<f64>, recent: Option<f64>) -> TrendDirection {
    let (Some(season), Some(recent)) = (season, recent) else {
        return TrendDirection::Stable;
    };
    if season <= 0.0 {
        return TrendDirection::Stable;
    }
    let change = (recent - season) / season;
    if change > TREND_THRESHOLD {
        TrendDirection::Up
    } else if change < -TREND_THRESHOLD {
        TrendDirection::Down
    } else {
        TrendDirection::Stable
    }
}

/// Trend for each of `stats`. A missing player is stable on every stat.
pub fn player_trends(player: Option<&Player>, stats: &[&str]) -> StatTrends {
    let season = StatLine::new(player.and_then(|p| p.stats.as_ref()));
    let recent = StatLine::new(player.and_then(|p| p.recent_stats.as_ref()));

    stats
        .iter()
        .map(|stat| {
            let trend = direction(rate(&season, stat), rate(&recent, stat));
            (stat.to_string(), trend)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::stat_map;
    use serde_json::json;

    #[test]
    fn test_direction_threshold() {
        assert_eq!(direction(Some(10.0), Some(11.5)), TrendDirection::Up);
        assert_eq!(direction(Some(10.0), Some(10.5)), TrendDirection::Stable);
        assert_eq!(direction(Some(10.0), Some(8.0)), TrendDirection::Down);
        assert_eq!(direction(None, Some(8.0)), TrendDirection::Stable);
        assert_eq!(direction(Some(0.0), Some(8.0)), TrendDirection::Stable);
    }

    #[test]
    fn test_player_trends_per_game() {
        let player = Player::new("1", "X", "LAL", "F")
            .with_stats(stat_map(json!({"points": 1500, "assists": 500, "gamesPlayed": 60})))
            .with_recent_stats(stat_map(json!({"points": 300, "assists": 60, "gamesPlayed": 10})));

        let trends = player_trends(Some(&player), &["points", "assists", "rebounds"]);
        // 30 vs 25 per game
        assert_eq!(trends["points"], TrendDirection::Up);
        // 6 vs 8.3 per game
        assert_eq!(trends["assists"], TrendDirection::Down);
        assert_eq!(trends["rebounds"], TrendDirection::Stable);
    }

    #[test]
    fn test_window_without_games_is_stable() {
        let season_only = Player::new("1", "X", "LAL", "F")
            .with_stats(stat_map(json!({"points": 1500, "gamesPlayed": 60})))
            .with_recent_stats(stat_map(json!({"points": 300})));
        assert_eq!(
            player_trends(Some(&season_only), &["points"])["points"],
            TrendDirection::Stable
        );

        let recent_only = Player::new("2", "Y", "BOS", "G")
            .with_stats(stat_map(json!({"points": 1500})))
            .with_recent_stats(stat_map(json!({"points": 300, "gamesPlayed": 10})));
        assert_eq!(
            player_trends(Some(&recent_only), &["points"])["points"],
            TrendDirection::Stable
        );

        let zero_games = Player::new("3", "Z", "NYK", "C")
            .with_stats(stat_map(json!({"points": 1500, "gamesPlayed": 60})))
            .with_recent_stats(stat_map(json!({"points": 300, "gamesPlayed": 0})));
        assert_eq!(
            player_trends(Some(&zero_games), &["points"])["points"],
            TrendDirection::Stable
        );
    }

    #[test]
    fn test_missing_player_is_stable() {
        let trends = player_trends(None, &["goals"]);
        assert_eq!(trends["goals"], TrendDirection::Stable);
    }
}
