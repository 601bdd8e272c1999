//! Derived (advanced) statistics.
//!
//! Each sport has its own shape. Position-gated metrics live in optional
//! groups that are flattened on output, so a receiver's JSON carries
//! `catchRate` and a quarterback's does not.

use serde::Serialize;

use super::{Measure, Percentage};

/// Advanced stats for one player, tagged by sport.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AdvancedStats {
    Nfl(NflAdvancedStats),
    Nba(NbaAdvancedStats),
    Nhl(NhlAdvancedStats),
    Mlb(MlbAdvancedStats),
}

// ── NFL ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NflAdvancedStats {
    #[serde(flatten)]
    pub passing: Option<NflPassing>,

    #[serde(flatten)]
    pub rushing: Option<NflRushing>,

    #[serde(flatten)]
    pub receiving: Option<NflReceiving>,

    #[serde(flatten)]
    pub blocking: Option<NflBlocking>,

    #[serde(flatten)]
    pub defense: Option<NflDefense>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_speed: Option<Measure>,
}

/// Quarterbacks with at least one attempt.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NflPassing {
    pub completion_percentage: Percentage,
    pub yards_per_attempt: f64,
    pub touchdown_percentage: Percentage,
    pub interception_percentage: Percentage,
    pub passer_rating: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NflRushing {
    pub yards_per_carry: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yards_per_touch: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NflReceiving {
    pub catch_rate: Percentage,
    pub yards_per_target: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yards_per_reception: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_depth_of_target: Option<Measure>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NflBlocking {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pass_block_win_rate: Option<Percentage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_block_win_rate: Option<Percentage>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NflDefense {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tackles_per_game: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pressure_rate: Option<Percentage>,
}

// ── NBA ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NbaAdvancedStats {
    #[serde(flatten)]
    pub shooting: Option<NbaShooting>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub three_point_percentage: Option<Percentage>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub free_throw_percentage: Option<Percentage>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub points_per36: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub player_efficiency: Option<f64>,

    #[serde(flatten)]
    pub playmaking: Option<NbaPlaymaking>,

    #[serde(flatten)]
    pub interior: Option<NbaInterior>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NbaShooting {
    pub true_shooting_percentage: Percentage,
    pub effective_field_goal_percentage: Percentage,
    pub three_point_rate: Percentage,
}

/// Guards.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NbaPlaymaking {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assist_to_turnover_ratio: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assists_per36: Option<f64>,
}

/// Forwards and centers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NbaInterior {
    pub rebounds_per36: f64,
    pub blocks_per36: f64,
}

// ── NHL ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NhlAdvancedStats {
    #[serde(flatten)]
    pub skater: Option<NhlSkater>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub faceoff_percentage: Option<Percentage>,

    #[serde(flatten)]
    pub goaltending: Option<NhlGoaltending>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NhlSkater {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shooting_percentage: Option<Percentage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points_per_game: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_on_ice_per_game: Option<Measure>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points_per60: Option<f64>,
}

/// Goaltenders with at least one shot faced.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NhlGoaltending {
    pub save_percentage: Percentage,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goals_against_average: Option<f64>,
    pub goals_saved_above_average: f64,
}

// ── MLB ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MlbAdvancedStats {
    #[serde(flatten)]
    pub hitting: Option<MlbHitting>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub stolen_base_success_rate: Option<Percentage>,

    #[serde(flatten)]
    pub pitching: Option<MlbPitching>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fastball_velocity: Option<Measure>,
}

/// Position players with at least one plate appearance.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MlbHitting {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batting_average: Option<f64>,
    pub on_base_percentage: Percentage,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slugging: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ops: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub isolated_power: Option<f64>,
    pub walk_rate: Percentage,
    pub strikeout_rate: Percentage,
}

/// Pitchers with at least one out recorded.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MlbPitching {
    pub era: f64,
    pub whip: f64,
    pub fip: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xfip: Option<f64>,
    pub strikeouts_per_nine: f64,
    pub walks_per_nine: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strikeout_to_walk_ratio: Option<f64>,
}
