//! Rating helpers shared by the sport enrichers.
//!
//! A rating with a statistical signal is scaled from it. One without (e.g.
//! leadership on a rookie with no experience field) is drawn from a SHA256
//! seed of the player id and attribute name, inside the attribute's usual
//! band, so reruns on the same roster agree.

use crate::models::{stable_seed, BaseRatings, Player, Rating, Sport, StatLine};

/// Deterministic rating in `low..=high` for `attribute` on `player`.
pub fn seeded(player: &Player, attribute: &str, low: u8, high: u8) -> Rating {
    let (low, high) = if low <= high { (low, high) } else { (high, low) };
    let span = u64::from(high - low) + 1;
    let seed = stable_seed(&[player.id.as_str(), attribute]);
    Rating::new(i64::from(low) + (seed % span) as i64)
}

/// Scale `signal` if present, otherwise fall back to a seeded rating.
pub fn scaled_or_seeded(
    player: &Player,
    attribute: &str,
    signal: Option<f64>,
    worst: f64,
    best: f64,
    band: (u8, u8),
) -> Rating {
    match signal {
        Some(value) => Rating::scaled(value, worst, best),
        None => seeded(player, attribute, band.0, band.1),
    }
}

/// Ratings every player gets, independent of position.
pub fn base_ratings(player: &Player, sport: Sport) -> BaseRatings {
    let line = player.stat_line();

    let availability = line.games().map(|g| g / sport.season_games());
    let experience = line.first_of(&["yearsPro", "experience"]);

    BaseRatings {
        leadership: scaled_or_seeded(player, "leadership", experience, 0.0, 12.0, (5, 9)),
        clutch_factor: clutch(player, &line),
        durability: scaled_or_seeded(player, "durability", availability, 0.5, 1.0, (5, 8)),
        consistency: seeded(player, "consistency", 5, 9),
        work_ethic: seeded(player, "workEthic", 6, 10),
    }
}

/// Game-winning plays per season when the feed has them; seeded otherwise.
fn clutch(player: &Player, line: &StatLine<'_>) -> Rating {
    let signal = line.first_of(&["gameWinningGoals", "gameWinningDrives", "clutchPlays"]);
    scaled_or_seeded(player, "clutchFactor", signal, 0.0, 6.0, (4, 9))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::stat_map;
    use serde_json::json;

    #[test]
    fn test_seeded_is_deterministic_and_in_band() {
        let player = Player::new("p-1", "A", "T", "QB");
        let a = seeded(&player, "leadership", 5, 9);
        let b = seeded(&player, "leadership", 5, 9);
        assert_eq!(a, b);
        assert!((5..=9).contains(&a.value()));
    }

    #[test]
    fn test_seeded_band_order_does_not_matter() {
        let player = Player::new("p-2", "A", "T", "QB");
        let r = seeded(&player, "x", 9, 5);
        assert!((5..=9).contains(&r.value()));
    }

    #[test]
    fn test_seeded_bands_hold_across_many_ids() {
        for i in 0..200 {
            let player = Player::new(format!("id-{}", i), "A", "T", "G");
            let r = seeded(&player, "workEthic", 6, 10);
            assert!((6..=10).contains(&r.value()));
        }
    }

    #[test]
    fn test_durability_from_games_played() {
        let full = Player::new("1", "A", "T", "C").with_stats(stat_map(json!({"gamesPlayed": 82})));
        let half = Player::new("2", "B", "T", "C").with_stats(stat_map(json!({"gamesPlayed": 41})));

        assert_eq!(base_ratings(&full, Sport::Nba).durability.value(), 10);
        assert_eq!(base_ratings(&half, Sport::Nba).durability.value(), 1);
    }

    #[test]
    fn test_leadership_from_experience() {
        let vet = Player::new("1", "A", "T", "QB").with_stats(stat_map(json!({"yearsPro": 15})));
        assert_eq!(base_ratings(&vet, Sport::Nfl).leadership.value(), 10);
    }

    #[test]
    fn test_base_ratings_without_stats() {
        let player = Player::new("x", "A", "T", "QB");
        let ratings = base_ratings(&player, Sport::Nfl);
        assert!((5..=8).contains(&ratings.durability.value()));
        assert!((4..=9).contains(&ratings.clutch_factor.value()));
    }
}
