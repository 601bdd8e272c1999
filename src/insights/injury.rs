//! Availability-based injury risk.

use crate::calculate::round_to;
use crate::models::{InjuryProfile, Percentage, Player, Rating, RiskLevel, Sport};

/// Age after which risk starts climbing.
const AGE_THRESHOLD: f64 = 30.0;
const RISK_PER_YEAR: f64 = 5.0;
const MAX_AGE_RISK: f64 = 20.0;
/// Risk carried by a fully missed season.
const MISSED_GAMES_WEIGHT: f64 = 80.0;

/// Risk score 0–100 from the share of games played and age.
pub fn risk_score(availability: f64, age: Option<f64>) -> u8 {
    let missed = (1.0 - availability.clamp(0.0, 1.0)) * MISSED_GAMES_WEIGHT;
    let aging = age
        .map(|a| ((a - AGE_THRESHOLD) * RISK_PER_YEAR).clamp(0.0, MAX_AGE_RISK))
        .unwrap_or(0.0);
    (missed + aging).round().clamp(0.0, 100.0) as u8
}

/// Injury profile for a player; neutral when absent or without games data.
pub fn injury_profile(player: Option<&Player>, sport: Sport) -> InjuryProfile {
    let Some(player) = player else {
        return InjuryProfile::unknown();
    };
    let line = player.stat_line();
    let Some(games) = line.games() else {
        return InjuryProfile::unknown();
    };

    let availability = (games / sport.season_games()).clamp(0.0, 1.0);
    let score = risk_score(availability, line.get("age"));
    let durability = player
        .subjective_stats
        .as_ref()
        .map(|s| s.base.durability)
        .unwrap_or_else(|| Rating::scaled(availability, 0.5, 1.0));

    InjuryProfile {
        risk_level: RiskLevel::from_score(score),
        risk_score: score,
        games_played: games.max(0.0).round() as u32,
        availability: Percentage::new(round_to(availability * 100.0, 1)),
        durability,
    }
}
