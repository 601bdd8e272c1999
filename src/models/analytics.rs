//! Composite and contextual analytics.
//!
//! Unlike advanced stats these are mostly nested objects (projections,
//! shot-chart buckets, zone starts). Every percentage leaf is a plain number
//! in 0–100.

use serde::Serialize;

/// Analytics for one player, tagged by sport.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Analytics {
    Nfl(NflAnalytics),
    Nba(NbaAnalytics),
    Nhl(NhlAnalytics),
    Mlb(MlbAnalytics),
}

// ── NFL ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NflAnalytics {
    /// PPR fantasy points per game
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fantasy_points_per_game: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub season_projection: Option<NflProjection>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<NflUsage>,
}

/// Full-season pace.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NflProjection {
    pub fantasy_points: f64,
    pub total_yards: f64,
    pub total_touchdowns: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NflUsage {
    pub touches_per_game: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub targets_per_game: Option<f64>,
}

// ── NBA ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NbaAnalytics {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shot_chart: Option<ShotChart>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub projection: Option<NbaProjection>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub impact: Option<NbaImpact>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShotChart {
    pub two_point: ShotBucket,
    pub three_point: ShotBucket,
    pub free_throw: ShotBucket,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShotBucket {
    pub made: u32,
    pub attempted: u32,
    /// 0–100, one decimal; 0 when nothing was attempted
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NbaProjection {
    pub points_per_game: f64,
    pub rebounds_per_game: f64,
    pub assists_per_game: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NbaImpact {
    /// Steals plus blocks per game
    pub stocks_per_game: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub turnovers_per_game: Option<f64>,
}

// ── NHL ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NhlAnalytics {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scoring_rates: Option<NhlRates>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone_starts: Option<ZoneStarts>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub goaltending: Option<NhlGoalieSplits>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub projection: Option<NhlProjection>,
}

/// Per-60-minute rates.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NhlRates {
    pub goals_per60: f64,
    pub points_per60: f64,
    pub shots_per60: f64,
}

/// Share of shifts started in each zone; the three buckets sum to 100.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneStarts {
    pub offensive: f64,
    pub neutral: f64,
    pub defensive: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NhlGoalieSplits {
    pub save_percentage: f64,
    pub goals_saved_above_average: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shots_against_per60: Option<f64>,
}

/// 82-game pace.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NhlProjection {
    pub goals: f64,
    pub points: f64,
}

// ── MLB ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MlbAnalytics {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batted_ball: Option<BattedBall>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub projection: Option<MlbHitterProjection>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pitching_projection: Option<MlbPitcherProjection>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BattedBall {
    /// Batting average on balls in play, three decimals
    pub babip: f64,
}

/// 162-game pace.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MlbHitterProjection {
    pub hits: f64,
    pub home_runs: f64,
    pub rbi: f64,
    pub stolen_bases: f64,
}

/// 32-start pace.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MlbPitcherProjection {
    pub innings: f64,
    pub strikeouts: f64,
    pub wins: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nba_shot_chart_shape() {
        let analytics = Analytics::Nba(NbaAnalytics {
            shot_chart: Some(ShotChart {
                two_point: ShotBucket {
                    made: 5,
                    attempted: 10,
                    percentage: 50.0,
                },
                three_point: ShotBucket {
                    made: 0,
                    attempted: 0,
                    percentage: 0.0,
                },
                free_throw: ShotBucket {
                    made: 3,
                    attempted: 4,
                    percentage: 75.0,
                },
            }),
            ..Default::default()
        });

        let value = serde_json::to_value(&analytics).unwrap();
        assert_eq!(
            value["shotChart"]["twoPoint"],
            json!({"made": 5, "attempted": 10, "percentage": 50.0})
        );
        assert!(value.get("projection").is_none());
    }

    #[test]
    fn test_nfl_scalar_is_top_level() {
        let analytics = Analytics::Nfl(NflAnalytics {
            fantasy_points_per_game: Some(18.4),
            ..Default::default()
        });
        let value = serde_json::to_value(&analytics).unwrap();
        assert_eq!(value, json!({"fantasyPointsPerGame": 18.4}));
    }
}
