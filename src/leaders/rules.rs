//! Ranking direction and leaderboard size.

use std::cmp::Ordering;

/// Stats where a lower value ranks higher.
///
/// Matched by exact name. Membership does not depend on sport or
/// category.
pub const ASCENDING_STATS: &[&str] = &[
    "era",
    "whip",
    "goalsAgainstAverage",
    "interceptions",
    "turnovers",
    "errors",
    "earnedRunAverage",
    "fip",
    "xfip",
    "siera",
];

/// Entries kept per leaderboard.
pub const DEFAULT_LEADERBOARD_SIZE: usize = 10;

pub fn is_ascending(stat: &str) -> bool {
    ASCENDING_STATS.contains(&stat)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn for_stat(stat: &str) -> Self {
        if is_ascending(stat) {
            SortDirection::Ascending
        } else {
            SortDirection::Descending
        }
    }

    /// Ordering that puts the better value first.
    pub fn compare(&self, a: f64, b: f64) -> Ordering {
        match self {
            SortDirection::Ascending => a.total_cmp(&b),
            SortDirection::Descending => b.total_cmp(&a),
        }
    }
}

/// Rules the builder ranks with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankingRules {
    /// Top-N cut-off
    pub size: usize,
}

impl Default for RankingRules {
    fn default() -> Self {
        Self {
            size: DEFAULT_LEADERBOARD_SIZE,
        }
    }
}

impl RankingRules {
    pub fn with_size(size: usize) -> Self {
        Self { size }
    }

    pub fn direction(&self, stat: &str) -> SortDirection {
        SortDirection::for_stat(stat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascending_set_is_exact() {
        for stat in ASCENDING_STATS {
            assert!(is_ascending(stat));
        }
        assert!(!is_ascending("ERA"));
        assert!(!is_ascending("goalsAgainst"));
        assert!(!is_ascending("points"));
        assert_eq!(ASCENDING_STATS.len(), 10);
    }

    #[test]
    fn test_direction_compare() {
        let mut values = vec![3.5, 2.1, 4.0];
        values.sort_by(|a, b| SortDirection::Ascending.compare(*a, *b));
        assert_eq!(values, vec![2.1, 3.5, 4.0]);

        values.sort_by(|a, b| SortDirection::Descending.compare(*a, *b));
        assert_eq!(values, vec![4.0, 3.5, 2.1]);
    }

    #[test]
    fn test_default_rules() {
        let rules = RankingRules::default();
        assert_eq!(rules.size, 10);
        assert_eq!(rules.direction("era"), SortDirection::Ascending);
        assert_eq!(rules.direction("points"), SortDirection::Descending);
    }
}
