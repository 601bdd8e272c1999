//! The persisted output bundle.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{Comparisons, InjuryAnalytics, Leaderboards, MarketAnalytics, StatTaxonomy, Trends};

/// Everything one pipeline run produces.
///
/// Rebuilt from scratch on every run and written over any previous bundle.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputBundle {
    pub categories: StatTaxonomy,
    pub leaders: Leaderboards,
    pub trends: Trends,
    pub comparisons: Comparisons,
    pub injury_analytics: InjuryAnalytics,
    pub market_analytics: MarketAnalytics,
    /// When this bundle was computed (ISO-8601)
    pub last_updated: DateTime<Utc>,
}
