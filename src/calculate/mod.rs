//! Statistics calculation helpers.
//!
//! Shared math for the enrichers and the auxiliary generators:
//! - Guarded ratios and per-game / per-minute rates
//! - Fixed-decimal rounding
//! - Baseball innings notation
//! - Percentile ranks within a roster

/// Round `value` to `places` decimals.
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

/// `num / den`, or `None` when the denominator is not positive.
pub fn ratio(num: f64, den: f64) -> Option<f64> {
    if den > 0.0 {
        Some(num / den)
    } else {
        None
    }
}

/// Average per game played.
pub fn per_game(total: f64, games: f64) -> Option<f64> {
    ratio(total, games)
}

/// Rate scaled to a `window` of minutes (per-36, per-60).
pub fn per_minutes(total: f64, minutes: f64, window: f64) -> Option<f64> {
    ratio(total, minutes).map(|r| r * window)
}

/// Pace over a full season of `season_games`.
pub fn season_pace(total: f64, games: f64, season_games: f64) -> Option<f64> {
    per_game(total, games).map(|r| r * season_games)
}

/// Convert baseball innings notation to true innings.
///
/// `180.1` means 180 and one third; `180.2` means 180 and two thirds.
pub fn innings_from_notation(ip: f64) -> f64 {
    if ip <= 0.0 {
        return 0.0;
    }
    let whole = ip.trunc();
    let outs = ((ip - whole) * 10.0).round().min(2.0);
    whole + outs / 3.0
}

/// NFL passer rating on the 0–158.3 scale.
pub fn passer_rating(
    completions: f64,
    attempts: f64,
    yards: f64,
    touchdowns: f64,
    interceptions: f64,
) -> Option<f64> {
    if attempts <= 0.0 {
        return None;
    }
    let clamp = |v: f64| v.clamp(0.0, 2.375);
    let a = clamp((completions / attempts - 0.3) * 5.0);
    let b = clamp((yards / attempts - 3.0) * 0.25);
    let c = clamp(touchdowns / attempts * 20.0);
    let d = clamp(2.375 - interceptions / attempts * 25.0);
    Some((a + b + c + d) / 6.0 * 100.0)
}

/// Percentile rank (0–100) of `value` within `population`.
///
/// Counts the share of the population that `value` beats or ties. With
/// `lower_is_better` the comparison is inverted.
pub fn percentile_rank(value: f64, population: &[f64], lower_is_better: bool) -> f64 {
    if population.is_empty() {
        return 0.0;
    }
    let at_or_below = population
        .iter()
        .filter(|&&other| {
            if lower_is_better {
                other >= value
            } else {
                other <= value
            }
        })
        .count();
    at_or_below as f64 / population.len() as f64 * 100.0
}

/// Arithmetic mean; `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(3.14159, 2), 3.14);
        assert_eq!(round_to(2.25, 1), 2.3);
        assert_eq!(round_to(7.0, 3), 7.0);
    }

    #[test]
    fn test_ratio_guards_zero() {
        assert_eq!(ratio(5.0, 0.0), None);
        assert_eq!(ratio(5.0, -1.0), None);
        assert_eq!(ratio(6.0, 3.0), Some(2.0));
    }

    #[test]
    fn test_per_minutes() {
        // 20 points in 24 minutes = 30 per 36
        assert!((per_minutes(20.0, 24.0, 36.0).unwrap() - 30.0).abs() < 1e-9);
        assert_eq!(per_minutes(20.0, 0.0, 36.0), None);
    }

    #[test]
    fn test_season_pace() {
        assert_eq!(season_pace(10.0, 5.0, 17.0), Some(34.0));
    }

    #[test]
    fn test_innings_from_notation() {
        assert!((innings_from_notation(180.1) - (180.0 + 1.0 / 3.0)).abs() < 1e-9);
        assert!((innings_from_notation(6.2) - (6.0 + 2.0 / 3.0)).abs() < 1e-9);
        assert_eq!(innings_from_notation(9.0), 9.0);
        assert_eq!(innings_from_notation(0.0), 0.0);
    }

    #[test]
    fn test_passer_rating_perfect() {
        // Perfect passer rating is 158.3
        let rating = passer_rating(20.0, 20.0, 400.0, 5.0, 0.0).unwrap();
        assert!((rating - 158.33).abs() < 0.01);
    }

    #[test]
    fn test_passer_rating_typical() {
        // 2023 Tua Tagovailoa: 388/560, 4624 yds, 29 TD, 14 INT -> 101.1
        let rating = passer_rating(388.0, 560.0, 4624.0, 29.0, 14.0).unwrap();
        assert!((rating - 101.1).abs() < 0.1);
        assert_eq!(passer_rating(0.0, 0.0, 0.0, 0.0, 0.0), None);
    }

    #[test]
    fn test_percentile_rank() {
        let pop = vec![10.0, 20.0, 30.0, 40.0];
        assert_eq!(percentile_rank(40.0, &pop, false), 100.0);
        assert_eq!(percentile_rank(20.0, &pop, false), 50.0);
        // Lower is better: 10 beats everyone
        assert_eq!(percentile_rank(10.0, &pop, true), 100.0);
        assert_eq!(percentile_rank(40.0, &pop, true), 25.0);
        assert_eq!(percentile_rank(1.0, &[], false), 0.0);
    }

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[1.0, 2.0, 3.0]), Some(2.0));
        assert_eq!(mean(&[]), None);
    }
}
