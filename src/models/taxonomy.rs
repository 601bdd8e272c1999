//! Stat taxonomy: which stats exist per sport and category.
//!
//! The taxonomy drives leaderboard iteration. It is static configuration,
//! never derived from player data.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::digest_hex;

/// Category name → ordered stat names.
pub type CategoryMap = BTreeMap<String, Vec<String>>;

/// Sport → category → ordered stat names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatTaxonomy(BTreeMap<String, CategoryMap>);

const NFL_CATALOG: &[(&str, &[&str])] = &[
    (
        "passing",
        &[
            "passingYards",
            "passingTDs",
            "completionPercentage",
            "yardsPerAttempt",
            "passerRating",
            "touchdownPercentage",
            "interceptions",
        ],
    ),
    (
        "rushing",
        &["rushingYards", "rushingTDs", "yardsPerCarry", "yardsPerTouch"],
    ),
    (
        "receiving",
        &[
            "receptions",
            "receivingYards",
            "receivingTDs",
            "catchRate",
            "yardsPerTarget",
            "yardsPerReception",
        ],
    ),
    ("blocking", &["passBlockWinRate", "runBlockWinRate"]),
    (
        "defense",
        &["tackles", "sacks", "tacklesPerGame", "pressureRate", "forcedFumbles"],
    ),
    ("fantasy", &["fantasyPointsPerGame"]),
    (
        "intangibles",
        &["leadership", "clutchFactor", "durability", "pocketPresence", "routeRunning"],
    ),
];

const NBA_CATALOG: &[(&str, &[&str])] = &[
    (
        "scoring",
        &[
            "points",
            "trueShootingPercentage",
            "effectiveFieldGoalPercentage",
            "threePointPercentage",
            "freeThrowPercentage",
            "pointsPer36",
        ],
    ),
    (
        "playmaking",
        &["assists", "assistToTurnoverRatio", "assistsPer36", "turnovers"],
    ),
    ("rebounding", &["rebounds", "reboundsPer36"]),
    ("defense", &["steals", "blocks", "blocksPer36"]),
    ("efficiency", &["playerEfficiency"]),
    (
        "intangibles",
        &["leadership", "clutchFactor", "durability", "courtVision", "rimProtection"],
    ),
];

const NHL_CATALOG: &[(&str, &[&str])] = &[
    (
        "scoring",
        &[
            "goals",
            "assists",
            "points",
            "shootingPercentage",
            "pointsPerGame",
            "pointsPer60",
        ],
    ),
    (
        "skating",
        &["plusMinus", "hits", "timeOnIcePerGame", "faceoffPercentage"],
    ),
    (
        "goalie",
        &[
            "savePercentage",
            "goalsAgainstAverage",
            "goalsSavedAboveAverage",
            "wins",
            "shutouts",
        ],
    ),
    (
        "intangibles",
        &["leadership", "clutchFactor", "durability", "hockeySense"],
    ),
];

const MLB_CATALOG: &[(&str, &[&str])] = &[
    (
        "batting",
        &[
            "battingAverage",
            "homeRuns",
            "rbi",
            "ops",
            "slugging",
            "isolatedPower",
            "walkRate",
            "stolenBases",
            "stolenBaseSuccessRate",
        ],
    ),
    (
        "pitching",
        &[
            "era",
            "whip",
            "fip",
            "xfip",
            "strikeoutsPerNine",
            "strikeoutToWalkRatio",
            "wins",
            "saves",
        ],
    ),
    ("fielding", &["errors", "fieldingPercentage"]),
    (
        "intangibles",
        &["leadership", "clutchFactor", "durability", "command", "plateDiscipline"],
    ),
];

fn build_categories(catalog: &[(&str, &[&str])]) -> CategoryMap {
    catalog
        .iter()
        .map(|(category, stats)| {
            (
                category.to_string(),
                stats.iter().map(|s| s.to_string()).collect(),
            )
        })
        .collect()
}

impl StatTaxonomy {
    pub fn new(sports: BTreeMap<String, CategoryMap>) -> Self {
        Self(sports)
    }

    /// The built-in catalog for NFL, NBA, NHL and MLB.
    pub fn builtin() -> Self {
        let mut sports = BTreeMap::new();
        sports.insert("NFL".to_string(), build_categories(NFL_CATALOG));
        sports.insert("NBA".to_string(), build_categories(NBA_CATALOG));
        sports.insert("NHL".to_string(), build_categories(NHL_CATALOG));
        sports.insert("MLB".to_string(), build_categories(MLB_CATALOG));
        Self(sports)
    }

    pub fn sports(&self) -> impl Iterator<Item = (&str, &CategoryMap)> {
        self.0.iter().map(|(sport, categories)| (sport.as_str(), categories))
    }

    pub fn categories(&self, sport: &str) -> Option<&CategoryMap> {
        self.0.get(sport)
    }

    pub fn stats(&self, sport: &str, category: &str) -> Option<&[String]> {
        self.0
            .get(sport)
            .and_then(|categories| categories.get(category))
            .map(|stats| stats.as_slice())
    }

    /// Whether `stat` is listed anywhere in the catalog.
    pub fn contains_stat(&self, stat: &str) -> bool {
        self.0
            .values()
            .flat_map(|categories| categories.values())
            .any(|stats| stats.iter().any(|s| s == stat))
    }

    /// Total number of (sport, category, stat) triples.
    pub fn triple_count(&self) -> usize {
        self.0
            .values()
            .flat_map(|categories| categories.values())
            .map(|stats| stats.len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Version fingerprint: first 16 hex chars of the SHA256 of the catalog's
    /// canonical JSON. Any change to a sport, category or stat changes it.
    pub fn fingerprint(&self) -> String {
        let canonical = serde_json::to_string(&self.0).unwrap_or_default();
        digest_hex(&[&canonical])
    }
}

impl Default for StatTaxonomy {
    fn default() -> Self {
        Self::builtin()
    }
}
