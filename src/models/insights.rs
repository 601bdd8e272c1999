//! Output shapes of the auxiliary generators.
//!
//! All four are keyed sport → player name → attribute bag, and keep the same
//! keys whether or not the player was found in the roster.

use std::collections::BTreeMap;

use serde::Serialize;

use super::{Dollars, Percentage, Rating};

/// Sport → player name → `T`.
pub type BySportPlayer<T> = BTreeMap<String, BTreeMap<String, T>>;

/// Direction of a player's recent form on one stat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Down,
    Stable,
}

/// Stat name → trend.
pub type StatTrends = BTreeMap<String, TrendDirection>;

pub type Trends = BySportPlayer<StatTrends>;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerComparison {
    /// Up to three closest same-position players, closest first
    pub similar_players: Vec<String>,

    /// Stat name → percentile rank (0–100) within the sport roster
    pub percentiles: BTreeMap<String, f64>,
}

impl PlayerComparison {
    /// Neutral comparison for a player missing from the roster.
    pub fn empty(stats: &[&str]) -> Self {
        Self {
            similar_players: Vec::new(),
            percentiles: stats.iter().map(|s| (s.to_string(), 0.0)).collect(),
        }
    }
}

pub type Comparisons = BySportPlayer<PlayerComparison>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
    Unknown,
}

impl RiskLevel {
    /// Classify a 0–100 risk score.
    pub fn from_score(score: u8) -> Self {
        if score < 30 {
            RiskLevel::Low
        } else if score < 60 {
            RiskLevel::Moderate
        } else {
            RiskLevel::High
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InjuryProfile {
    pub risk_level: RiskLevel,
    /// 0–100
    pub risk_score: u8,
    pub games_played: u32,
    /// Share of the season's games played
    pub availability: Percentage,
    pub durability: Rating,
}

impl InjuryProfile {
    pub fn unknown() -> Self {
        Self {
            risk_level: RiskLevel::Unknown,
            risk_score: 0,
            games_played: 0,
            availability: Percentage::new(0.0),
            durability: Rating::new(5),
        }
    }
}

pub type InjuryAnalytics = BySportPlayer<InjuryProfile>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueTier {
    Elite,
    Starter,
    Rotation,
    Depth,
    Unknown,
}

impl ValueTier {
    pub fn from_percentile(percentile: f64) -> Self {
        if percentile >= 90.0 {
            ValueTier::Elite
        } else if percentile >= 70.0 {
            ValueTier::Starter
        } else if percentile >= 40.0 {
            ValueTier::Rotation
        } else {
            ValueTier::Depth
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketProfile {
    pub estimated_value: Dollars,
    pub production_percentile: f64,
    pub value_tier: ValueTier,
}

impl MarketProfile {
    pub fn unknown() -> Self {
        Self {
            estimated_value: Dollars(0.0),
            production_percentile: 0.0,
            value_tier: ValueTier::Unknown,
        }
    }
}

pub type MarketAnalytics = BySportPlayer<MarketProfile>;
