//! NHL enrichment.

use crate::calculate::{per_game, per_minutes, ratio, round_to, season_pace};
use crate::models::{
    in_family, Measure, NhlAdvancedStats, NhlAnalytics, NhlGoalieSplits, NhlGoaltending,
    NhlProjection, NhlRates, NhlSkater, Percentage, Player, Sport, StatLine, SubjectiveStats,
    Unit, ZoneStarts, NHL_CENTERS, NHL_GOALIES,
};

use super::ratings::{base_ratings, scaled_or_seeded};

/// League-average save rate used for goals saved above average.
pub const LEAGUE_SAVE_RATE: f64 = 0.905;

fn points(line: &StatLine<'_>) -> Option<f64> {
    line.get("points").or_else(|| {
        let goals = line.get("goals");
        let assists = line.get("assists");
        if goals.is_none() && assists.is_none() {
            None
        } else {
            Some(goals.unwrap_or(0.0) + assists.unwrap_or(0.0))
        }
    })
}

/// Total time on ice in minutes.
fn time_on_ice(line: &StatLine<'_>) -> Option<f64> {
    line.first_of(&["timeOnIce", "minutes"]).filter(|m| *m > 0.0)
}

fn skater(line: &StatLine<'_>) -> Option<NhlSkater> {
    let games = line.games().filter(|g| *g > 0.0);
    let toi = time_on_ice(line);
    let points = points(line);

    let skater = NhlSkater {
        shooting_percentage: line
            .get("goals")
            .and_then(|g| Percentage::of(g, line.get_or_zero("shots"))),
        points_per_game: points
            .zip(games)
            .and_then(|(p, g)| per_game(p, g))
            .map(|v| round_to(v, 2)),
        time_on_ice_per_game: toi
            .zip(games)
            .and_then(|(t, g)| per_game(t, g))
            .map(|v| Measure::new(v, Unit::Minutes)),
        points_per60: points
            .zip(toi)
            .and_then(|(p, t)| per_minutes(p, t, 60.0))
            .map(|v| round_to(v, 2)),
    };

    let empty = skater.shooting_percentage.is_none()
        && skater.points_per_game.is_none()
        && skater.time_on_ice_per_game.is_none()
        && skater.points_per60.is_none();
    (!empty).then_some(skater)
}

/// Saves, defaulting to shots against minus goals against.
fn saves(line: &StatLine<'_>, shots_against: f64) -> f64 {
    line.get("saves")
        .unwrap_or_else(|| shots_against - line.get_or_zero("goalsAgainst"))
}

fn goaltending(line: &StatLine<'_>) -> Option<NhlGoaltending> {
    let shots_against = line.get("shotsAgainst").filter(|s| *s > 0.0)?;
    let saves = saves(line, shots_against);

    Some(NhlGoaltending {
        save_percentage: Percentage::new(saves / shots_against * 100.0),
        goals_against_average: time_on_ice(line)
            .and_then(|m| per_minutes(line.get_or_zero("goalsAgainst"), m, 60.0))
            .map(|v| round_to(v, 2)),
        goals_saved_above_average: round_to(saves - shots_against * LEAGUE_SAVE_RATE, 1),
    })
}

pub fn advanced(player: &Player) -> NhlAdvancedStats {
    let line = player.stat_line();
    let pos = player.position.as_str();
    let is_goalie = in_family(pos, NHL_GOALIES);

    NhlAdvancedStats {
        skater: if is_goalie { None } else { skater(&line) },
        faceoff_percentage: in_family(pos, NHL_CENTERS)
            .then(|| {
                let wins = line.get("faceoffWins")?;
                Percentage::of(wins, wins + line.get_or_zero("faceoffLosses"))
            })
            .flatten(),
        goaltending: if is_goalie { goaltending(&line) } else { None },
    }
}

pub fn subjective(player: &Player) -> SubjectiveStats {
    let line = player.stat_line();
    let pos = player.position.as_str();
    let stats = SubjectiveStats::new(base_ratings(player, Sport::Nhl));

    if in_family(pos, NHL_GOALIES) {
        let goaltending = goaltending(&line);
        let save_pct = goaltending.as_ref().map(|g| g.save_percentage.value());
        let gaa = goaltending.as_ref().and_then(|g| g.goals_against_average);
        return stats
            .with(
                "reboundControl",
                scaled_or_seeded(player, "reboundControl", save_pct, 88.0, 93.0, (5, 9)),
            )
            .with(
                "positioning",
                scaled_or_seeded(player, "positioning", gaa, 3.5, 2.0, (5, 9)),
            );
    }

    let ppg = points(&line).zip(line.games()).and_then(|(p, g)| per_game(p, g));
    let stats = stats.with(
        "hockeySense",
        scaled_or_seeded(player, "hockeySense", ppg, 0.2, 1.3, (5, 9)),
    );
    if in_family(pos, NHL_CENTERS) {
        let faceoffs = line.get("faceoffWins").and_then(|wins| {
            ratio(wins * 100.0, wins + line.get_or_zero("faceoffLosses"))
        });
        return stats.with(
            "faceoffSkill",
            scaled_or_seeded(player, "faceoffSkill", faceoffs, 42.0, 58.0, (5, 9)),
        );
    }
    stats
}

fn zone_starts(line: &StatLine<'_>) -> Option<ZoneStarts> {
    let offensive = line.get_or_zero("offensiveZoneStarts");
    let neutral = line.get_or_zero("neutralZoneStarts");
    let defensive = line.get_or_zero("defensiveZoneStarts");
    let total = offensive + neutral + defensive;
    if total <= 0.0 {
        return None;
    }
    let offensive = round_to(offensive / total * 100.0, 1);
    let neutral = round_to(neutral / total * 100.0, 1);
    Some(ZoneStarts {
        offensive,
        neutral,
        defensive: round_to((100.0 - offensive - neutral).max(0.0), 1),
    })
}

pub fn analytics(player: &Player) -> NhlAnalytics {
    let line = player.stat_line();
    let is_goalie = in_family(player.position.as_str(), NHL_GOALIES);
    let toi = time_on_ice(&line);
    let games = line.games().filter(|g| *g > 0.0);
    let per60 = |total: f64| toi.and_then(|m| per_minutes(total, m, 60.0)).map(|v| round_to(v, 2));

    let scoring_rates = if is_goalie {
        None
    } else {
        match (per60(line.get_or_zero("goals")), points(&line).and_then(per60)) {
            (Some(goals_per60), Some(points_per60)) => Some(NhlRates {
                goals_per60,
                points_per60,
                shots_per60: per60(line.get_or_zero("shots")).unwrap_or(0.0),
            }),
            _ => None,
        }
    };

    let goaltending = if is_goalie {
        line.get("shotsAgainst").filter(|s| *s > 0.0).map(|sa| {
            let saves = saves(&line, sa);
            NhlGoalieSplits {
                save_percentage: round_to((saves / sa * 100.0).clamp(0.0, 100.0), 1),
                goals_saved_above_average: round_to(saves - sa * LEAGUE_SAVE_RATE, 1),
                shots_against_per60: per60(sa),
            }
        })
    } else {
        None
    };

    let season = Sport::Nhl.season_games();
    let projection = match (is_goalie, games) {
        (false, Some(g)) => {
            let pace = |total: f64| season_pace(total, g, season).map(|v| round_to(v, 0));
            match (pace(line.get_or_zero("goals")), points(&line).and_then(pace)) {
                (Some(goals), Some(points)) => Some(NhlProjection { goals, points }),
                _ => None,
            }
        }
        _ => None,
    };

    NhlAnalytics {
        scoring_rates,
        zone_starts: zone_starts(&line),
        goaltending,
        projection,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::stat_map;
    use serde_json::json;

    fn center() -> Player {
        Player::new("c-1", "Center", "EDM", "C").with_stats(stat_map(json!({
            "goals": 50,
            "assists": 80,
            "shots": 250,
            "timeOnIce": 1800,
            "gamesPlayed": 80,
            "faceoffWins": 550,
            "faceoffLosses": 450
        })))
    }

    fn goalie() -> Player {
        Player::new("g-1", "Goalie", "NYR", "G").with_stats(stat_map(json!({
            "shotsAgainst": 1800,
            "goalsAgainst": 144,
            "timeOnIce": 3600,
            "gamesPlayed": 60
        })))
    }

    #[test]
    fn test_skater_metrics() {
        let stats = advanced(&center());
        let skater = stats.skater.expect("skater");
        assert_eq!(skater.shooting_percentage.unwrap().to_string(), "20.0%");
        assert_eq!(skater.points_per_game, Some(1.63));
        assert_eq!(skater.time_on_ice_per_game.unwrap().to_string(), "22.5 min");
        assert_eq!(skater.points_per60, Some(4.33));
        assert_eq!(stats.faceoff_percentage.unwrap().to_string(), "55.0%");
        assert!(stats.goaltending.is_none());
    }

    #[test]
    fn test_goalie_metrics_only_for_g() {
        let stats = advanced(&goalie());
        let goaltending = stats.goaltending.expect("goaltending");
        assert_eq!(goaltending.save_percentage.to_string(), "92.0%");
        assert_eq!(goaltending.goals_against_average, Some(2.4));
        // 1656 - 1629
        assert_eq!(goaltending.goals_saved_above_average, 27.0);
        assert!(stats.skater.is_none());
        assert!(stats.faceoff_percentage.is_none());
    }

    #[test]
    fn test_zone_starts_sum_to_hundred() {
        let player = Player::new("w", "Wing", "T", "LW").with_stats(stat_map(json!({
            "offensiveZoneStarts": 1,
            "neutralZoneStarts": 1,
            "defensiveZoneStarts": 1
        })));
        let zones = analytics(&player).zone_starts.expect("zones");
        assert_eq!(zones.offensive, 33.3);
        assert_eq!(zones.defensive, 33.4);
    }

    #[test]
    fn test_goalie_analytics() {
        let analytics = analytics(&goalie());
        assert!(analytics.scoring_rates.is_none());
        assert!(analytics.projection.is_none());
        let splits = analytics.goaltending.expect("splits");
        assert_eq!(splits.save_percentage, 92.0);
        assert_eq!(splits.shots_against_per60, Some(30.0));
    }

    #[test]
    fn test_position_ratings() {
        let ratings = subjective(&center());
        assert!(ratings.get("faceoffSkill").is_some());
        assert!(ratings.get("hockeySense").is_some());
        assert!(subjective(&goalie()).get("positioning").is_some());
        assert!(subjective(&goalie()).get("hockeySense").is_none());
    }
}
