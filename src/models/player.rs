//! Player records and rosters.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{coerce_number, AdvancedStats, Analytics, PlayerId, SubjectiveStats};

/// Raw stat name → value, as supplied by the roster feed.
///
/// Values are usually numbers but may be pre-formatted strings (`"10 pts"`).
pub type StatMap = BTreeMap<String, Value>;

/// Sport name → players. Keys are kept verbatim, including unknown sports.
pub type Roster = BTreeMap<String, Vec<Player>>;

/// One athlete in one sport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,

    pub name: String,

    pub team: String,

    /// Sport-specific position tag (e.g., "QB", "C", "G")
    pub position: String,

    /// Season totals from the upstream feed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<StatMap>,

    /// Same stat names over a recent window, including its own `gamesPlayed`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recent_stats: Option<StatMap>,

    #[serde(default, skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub advanced_stats: Option<AdvancedStats>,

    #[serde(default, skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub subjective_stats: Option<SubjectiveStats>,

    #[serde(default, skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub analytics: Option<Analytics>,
}

impl Player {
    /// Create a new player with no stats.
    pub fn new(
        id: impl Into<PlayerId>,
        name: impl Into<String>,
        team: impl Into<String>,
        position: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            team: team.into(),
            position: position.into(),
            stats: None,
            recent_stats: None,
            advanced_stats: None,
            subjective_stats: None,
            analytics: None,
        }
    }

    /// Builder method to set raw stats.
    pub fn with_stats(mut self, stats: StatMap) -> Self {
        self.stats = Some(stats);
        self
    }

    /// Builder method to set recent-window stats.
    pub fn with_recent_stats(mut self, stats: StatMap) -> Self {
        self.recent_stats = Some(stats);
        self
    }

    /// Numeric view over the raw season stats.
    pub fn stat_line(&self) -> StatLine<'_> {
        StatLine::new(self.stats.as_ref())
    }

    /// Whether any of the three enrichment groups has been attached.
    pub fn is_enriched(&self) -> bool {
        self.advanced_stats.is_some() || self.subjective_stats.is_some() || self.analytics.is_some()
    }
}

/// Read-only numeric access to a [`StatMap`].
///
/// Every lookup coerces through [`coerce_number`], so `"10 pts"` reads as 10
/// and non-numeric entries read as absent.
#[derive(Debug, Clone, Copy)]
pub struct StatLine<'a> {
    stats: Option<&'a StatMap>,
}

impl<'a> StatLine<'a> {
    pub fn new(stats: Option<&'a StatMap>) -> Self {
        Self { stats }
    }

    pub fn is_present(&self) -> bool {
        self.stats.is_some()
    }

    /// The stat as a number, if present and numeric.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.stats?.get(name).and_then(coerce_number)
    }

    /// The stat as a number, or 0 when absent.
    pub fn get_or_zero(&self, name: &str) -> f64 {
        self.get(name).unwrap_or(0.0)
    }

    /// First present stat among `names`.
    pub fn first_of(&self, names: &[&str]) -> Option<f64> {
        names.iter().find_map(|name| self.get(name))
    }

    /// Games played, if the feed reported it.
    pub fn games(&self) -> Option<f64> {
        self.first_of(&["gamesPlayed", "games"])
    }
}

/// Build a [`StatMap`] from a JSON object literal.
///
/// Non-object values produce an empty map.
pub fn stat_map(value: Value) -> StatMap {
    match value {
        Value::Object(map) => map.into_iter().collect(),
        _ => StatMap::new(),
    }
}
