//! Ranked leaderboard entries.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Player, PlayerId};

/// Display-ready leaderboard value.
///
/// Whole-number stats stay JSON integers; percentages, money and
/// fixed-decimal values are text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FormattedValue {
    Integer(i64),
    Text(String),
}

impl fmt::Display for FormattedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormattedValue::Integer(n) => write!(f, "{}", n),
            FormattedValue::Text(s) => write!(f, "{}", s),
        }
    }
}

/// One player's rank for one stat.
///
/// Player fields are copied at build time; there is no live reference back
/// to the roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub player_id: PlayerId,
    pub player_name: String,
    pub player_team: String,
    pub player_position: String,
    pub value: FormattedValue,
    /// 1-based
    pub rank: u32,
    /// Numeric value the entry was ranked by
    #[serde(skip)]
    pub raw_value: f64,
}

impl LeaderboardEntry {
    pub fn new(player: &Player, raw_value: f64, value: FormattedValue, rank: u32) -> Self {
        Self {
            player_id: player.id.clone(),
            player_name: player.name.clone(),
            player_team: player.team.clone(),
            player_position: player.position.clone(),
            value,
            rank,
            raw_value,
        }
    }
}

/// Stat name → ranked entries. A stat with no eligible players has no key.
pub type StatLeaders = BTreeMap<String, Vec<LeaderboardEntry>>;

/// Sport → category → stat → ranked entries.
pub type Leaderboards = BTreeMap<String, BTreeMap<String, StatLeaders>>;

/// Count the stat leaderboards held in a [`Leaderboards`] tree.
pub fn leaderboard_count(leaders: &Leaderboards) -> usize {
    leaders
        .values()
        .flat_map(|categories| categories.values())
        .map(|stats| stats.len())
        .sum()
}
