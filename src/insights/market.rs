//! Production-based market value estimates.

use crate::calculate::{mean, round_to};
use crate::models::{Dollars, MarketProfile, PlayerComparison, Sport, ValueTier};

/// League salary range in millions of dollars.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SalaryBand {
    pub floor: f64,
    pub cap: f64,
}

impl SalaryBand {
    pub fn for_sport(sport: Sport) -> Self {
        let (floor, cap) = match sport {
            Sport::Nfl => (0.9, 55.0),
            Sport::Nba => (1.1, 55.0),
            Sport::Nhl => (0.8, 13.0),
            Sport::Mlb => (0.74, 43.0),
        };
        Self { floor, cap }
    }

    /// Value for a production percentile. Convex, so only top producers
    /// approach the cap.
    pub fn value_at(&self, percentile: f64) -> f64 {
        let share = (percentile / 100.0).clamp(0.0, 1.0);
        self.floor + (self.cap - self.floor) * share * share
    }
}

/// Market profile from a player's roster percentiles.
///
/// `None` (player not in the roster) gives the neutral profile.
pub fn market_profile(comparison: Option<&PlayerComparison>, sport: Sport) -> MarketProfile {
    let percentiles: Vec<f64> = match comparison {
        Some(c) => c.percentiles.values().copied().collect(),
        None => return MarketProfile::unknown(),
    };
    let Some(production) = mean(&percentiles) else {
        return MarketProfile::unknown();
    };

    MarketProfile {
        estimated_value: Dollars(round_to(SalaryBand::for_sport(sport).value_at(production), 1)),
        production_percentile: round_to(production, 1),
        value_tier: ValueTier::from_percentile(production),
    }
}
