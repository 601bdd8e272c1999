//! Stat lookup across a player's attribute groups.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::models::{coerce_number, Player};

/// Attribute groups in lookup priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatGroup {
    Stats,
    Advanced,
    Subjective,
    Analytics,
}

impl StatGroup {
    pub const PRIORITY: [StatGroup; 4] = [
        StatGroup::Stats,
        StatGroup::Advanced,
        StatGroup::Subjective,
        StatGroup::Analytics,
    ];
}

/// One player's four attribute groups flattened to JSON objects.
///
/// Built once per player so every stat in the taxonomy reads from the same
/// snapshot.
#[derive(Debug, Clone, Default)]
pub struct StatSources {
    groups: [Option<Map<String, Value>>; 4],
}

fn as_object<T: Serialize>(group: Option<&T>) -> Option<Map<String, Value>> {
    match serde_json::to_value(group?).ok()? {
        Value::Object(map) => Some(map),
        _ => None,
    }
}

impl StatSources {
    pub fn from_player(player: &Player) -> Self {
        let stats = player
            .stats
            .as_ref()
            .map(|s| {
                s.iter()
                    .map(|(k, v)| (k.clone(), v.clone()))
                    .collect::<Map<String, Value>>()
            });

        Self {
            groups: [
                stats,
                as_object(player.advanced_stats.as_ref()),
                as_object(player.subjective_stats.as_ref()),
                as_object(player.analytics.as_ref()),
            ],
        }
    }

    /// The value from the first group holding `stat`.
    ///
    /// Groups are not merged. A later group is never consulted once an
    /// earlier one has the key, even if its value is unusable.
    pub fn lookup(&self, stat: &str) -> Option<(StatGroup, &Value)> {
        StatGroup::PRIORITY
            .iter()
            .zip(self.groups.iter())
            .find_map(|(group, map)| map.as_ref()?.get(stat).map(|v| (*group, v)))
    }

    /// Numeric value of `stat`, or `None` if absent or not numeric.
    pub fn numeric(&self, stat: &str) -> Option<f64> {
        self.lookup(stat).and_then(|(_, value)| coerce_number(value))
    }
}
