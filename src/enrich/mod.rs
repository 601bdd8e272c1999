//! Player enrichment.
//!
//! Attaches three derived groups to each player:
//! - `advancedStats`: rates and percentages computed from `stats`
//! - `subjectiveStats`: 1–10 ratings, base plus position-specific
//! - `analytics`: nested projections, splits and buckets
//!
//! Dispatch is by exact sport name. A roster key that is not one of the
//! four supported sports is left untouched.

pub mod mlb;
pub mod nba;
pub mod nfl;
pub mod nhl;
pub mod ratings;

use tracing::{debug, info};

use crate::models::{AdvancedStats, Analytics, Player, Roster, Sport};

/// Counts from [`enrich_roster`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnrichSummary {
    /// Players that received enrichment groups
    pub enriched: usize,
    /// Players without `stats` (advanced step skipped)
    pub without_stats: usize,
    /// Roster keys that matched no supported sport
    pub skipped_sports: Vec<String>,
}

/// Enrich one player in place.
///
/// The advanced group needs raw `stats`; without them it is left unset
/// while subjective ratings and analytics are still attached. Returns
/// `false` when `sport` is not recognized and the player was not touched.
pub fn enrich(player: &mut Player, sport: &str) -> bool {
    let Some(sport) = Sport::from_name(sport) else {
        return false;
    };

    let view: &Player = player;
    let has_stats = view.stats.is_some();
    let (advanced, subjective, analytics) = match sport {
        Sport::Nfl => (
            has_stats.then(|| AdvancedStats::Nfl(nfl::advanced(view))),
            nfl::subjective(view),
            Analytics::Nfl(nfl::analytics(view)),
        ),
        Sport::Nba => (
            has_stats.then(|| AdvancedStats::Nba(nba::advanced(view))),
            nba::subjective(view),
            Analytics::Nba(nba::analytics(view)),
        ),
        Sport::Nhl => (
            has_stats.then(|| AdvancedStats::Nhl(nhl::advanced(view))),
            nhl::subjective(view),
            Analytics::Nhl(nhl::analytics(view)),
        ),
        Sport::Mlb => (
            has_stats.then(|| AdvancedStats::Mlb(mlb::advanced(view))),
            mlb::subjective(view),
            Analytics::Mlb(mlb::analytics(view)),
        ),
    };

    player.advanced_stats = advanced;
    player.subjective_stats = Some(subjective);
    player.analytics = Some(analytics);
    true
}

/// Enrich every player of every sport in the roster.
pub fn enrich_roster(roster: &mut Roster) -> EnrichSummary {
    let mut summary = EnrichSummary::default();

    for (sport, players) in roster.iter_mut() {
        if Sport::from_name(sport).is_none() {
            debug!("Leaving {} players of unknown sport '{}' untouched", players.len(), sport);
            summary.skipped_sports.push(sport.clone());
            continue;
        }

        let mut count = 0;
        for player in players.iter_mut() {
            if player.stats.is_none() {
                summary.without_stats += 1;
            }
            if enrich(player, sport) {
                count += 1;
            }
        }
        info!("Enriched {} {} players", count, sport);
        summary.enriched += count;
    }

    summary
}
