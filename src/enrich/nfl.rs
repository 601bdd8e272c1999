//! NFL enrichment.

use crate::calculate::{passer_rating, per_game, ratio, round_to, season_pace};
use crate::models::{
    in_family, Measure, NflAdvancedStats, NflAnalytics, NflBlocking, NflDefense, NflPassing,
    NflProjection, NflReceiving, NflRushing, NflUsage, Percentage, Player, Sport,
    StatLine, SubjectiveStats, NFL_DEFENDERS, NFL_LINEMEN, NFL_PASSERS, NFL_RECEIVERS,
    NFL_RUSHERS, Unit,
};

use super::ratings::{base_ratings, scaled_or_seeded, seeded};

pub fn advanced(player: &Player) -> NflAdvancedStats {
    let line = player.stat_line();
    let pos = player.position.as_str();

    NflAdvancedStats {
        passing: in_family(pos, NFL_PASSERS).then(|| passing(&line)).flatten(),
        rushing: in_family(pos, NFL_RUSHERS).then(|| rushing(&line)).flatten(),
        receiving: in_family(pos, NFL_RECEIVERS).then(|| receiving(&line)).flatten(),
        blocking: in_family(pos, NFL_LINEMEN).then(|| blocking(&line)).flatten(),
        defense: in_family(pos, NFL_DEFENDERS).then(|| defense(&line)).flatten(),
        top_speed: line.get("topSpeed").map(|mph| Measure::new(mph, Unit::Mph)),
    }
}

fn attempts(line: &StatLine<'_>) -> Option<f64> {
    line.first_of(&["passingAttempts", "attempts"]).filter(|a| *a > 0.0)
}

fn carries(line: &StatLine<'_>) -> Option<f64> {
    line.first_of(&["rushingAttempts", "carries"]).filter(|c| *c > 0.0)
}

fn passing(line: &StatLine<'_>) -> Option<NflPassing> {
    let att = attempts(line)?;
    let cmp = line.first_of(&["completions", "passingCompletions"]).unwrap_or(0.0);
    let yds = line.get_or_zero("passingYards");
    let td = line.get_or_zero("passingTDs");
    let int = line.get_or_zero("interceptions");

    Some(NflPassing {
        completion_percentage: Percentage::new(cmp / att * 100.0),
        yards_per_attempt: round_to(yds / att, 1),
        touchdown_percentage: Percentage::new(td / att * 100.0),
        interception_percentage: Percentage::new(int / att * 100.0),
        passer_rating: round_to(passer_rating(cmp, att, yds, td, int)?, 1),
    })
}

fn rushing(line: &StatLine<'_>) -> Option<NflRushing> {
    let carries = carries(line)?;
    let rush_yds = line.get_or_zero("rushingYards");
    let touches = carries + line.get_or_zero("receptions");
    let scrimmage = rush_yds + line.get_or_zero("receivingYards");

    Some(NflRushing {
        yards_per_carry: round_to(rush_yds / carries, 1),
        yards_per_touch: ratio(scrimmage, touches).map(|v| round_to(v, 1)),
    })
}

fn receiving(line: &StatLine<'_>) -> Option<NflReceiving> {
    let targets = line.get("targets").filter(|t| *t > 0.0)?;
    let rec = line.get_or_zero("receptions");
    let yds = line.get_or_zero("receivingYards");

    Some(NflReceiving {
        catch_rate: Percentage::new(rec / targets * 100.0),
        yards_per_target: round_to(yds / targets, 1),
        yards_per_reception: ratio(yds, rec).map(|v| round_to(v, 1)),
        average_depth_of_target: line
            .get("airYards")
            .map(|air| Measure::new(air / targets, Unit::Yards)),
    })
}

fn blocking(line: &StatLine<'_>) -> Option<NflBlocking> {
    let pass = line
        .get("passBlockSnaps")
        .and_then(|snaps| Percentage::of(snaps - line.get_or_zero("pressuresAllowed"), snaps));
    let run = line
        .get("runBlockWins")
        .and_then(|wins| Percentage::of(wins, line.get_or_zero("runBlockSnaps")));

    if pass.is_none() && run.is_none() {
        return None;
    }
    Some(NflBlocking {
        pass_block_win_rate: pass,
        run_block_win_rate: run,
    })
}

fn defense(line: &StatLine<'_>) -> Option<NflDefense> {
    let tackles_per_game = line
        .get("tackles")
        .and_then(|t| per_game(t, line.games()?))
        .map(|v| round_to(v, 1));
    let pressure_rate = line
        .get("pressures")
        .and_then(|p| Percentage::of(p, line.get_or_zero("passRushSnaps")));

    if tackles_per_game.is_none() && pressure_rate.is_none() {
        return None;
    }
    Some(NflDefense {
        tackles_per_game,
        pressure_rate,
    })
}

pub fn subjective(player: &Player) -> SubjectiveStats {
    let line = player.stat_line();
    let pos = player.position.as_str();
    let stats = SubjectiveStats::new(base_ratings(player, Sport::Nfl));

    if in_family(pos, NFL_PASSERS) {
        let att = attempts(&line);
        let sack_rate = att.and_then(|a| {
            let sacks = line.get("sacksTaken")?;
            ratio(sacks, a + sacks)
        });
        let int_rate = att.map(|a| line.get_or_zero("interceptions") / a * 100.0);
        stats
            .with(
                "pocketPresence",
                scaled_or_seeded(player, "pocketPresence", sack_rate, 0.10, 0.03, (5, 9)),
            )
            .with(
                "decisionMaking",
                scaled_or_seeded(player, "decisionMaking", int_rate, 4.0, 1.0, (5, 9)),
            )
    } else if in_family(pos, NFL_RECEIVERS) {
        let targets = line.get("targets");
        let per_target = targets.and_then(|t| ratio(line.get_or_zero("receivingYards"), t));
        let catch_rate = targets.and_then(|t| ratio(line.get_or_zero("receptions") * 100.0, t));
        stats
            .with(
                "routeRunning",
                scaled_or_seeded(player, "routeRunning", per_target, 5.0, 11.0, (5, 9)),
            )
            .with(
                "hands",
                scaled_or_seeded(player, "hands", catch_rate, 55.0, 80.0, (5, 9)),
            )
    } else if in_family(pos, NFL_RUSHERS) {
        let carries = carries(&line);
        let ypc = carries.and_then(|c| ratio(line.get_or_zero("rushingYards"), c));
        let broken = carries.and_then(|c| ratio(line.get("brokenTackles")?, c));
        stats
            .with("vision", scaled_or_seeded(player, "vision", ypc, 3.5, 5.5, (5, 9)))
            .with(
                "elusiveness",
                scaled_or_seeded(player, "elusiveness", broken, 0.05, 0.25, (5, 9)),
            )
    } else if in_family(pos, NFL_LINEMEN) {
        let blocking = blocking(&line);
        let pass = blocking
            .as_ref()
            .and_then(|b| b.pass_block_win_rate)
            .map(|p| p.value());
        let run = blocking
            .as_ref()
            .and_then(|b| b.run_block_win_rate)
            .map(|p| p.value());
        stats
            .with(
                "passProtection",
                scaled_or_seeded(player, "passProtection", pass, 80.0, 95.0, (5, 9)),
            )
            .with(
                "runBlocking",
                scaled_or_seeded(player, "runBlocking", run, 60.0, 80.0, (5, 9)),
            )
    } else if in_family(pos, NFL_DEFENDERS) {
        let tackles = line.get("tackles").and_then(|t| per_game(t, line.games()?));
        stats.with(
            "tackling",
            scaled_or_seeded(player, "tackling", tackles, 2.0, 8.0, (5, 9)),
        )
    } else {
        stats.with("footballIq", seeded(player, "footballIq", 5, 9))
    }
}

/// PPR fantasy points over the stat line.
pub fn fantasy_points(line: &StatLine<'_>) -> f64 {
    line.get_or_zero("passingYards") / 25.0 + line.get_or_zero("passingTDs") * 4.0
        - line.get_or_zero("interceptions") * 2.0
        + line.get_or_zero("rushingYards") / 10.0
        + line.get_or_zero("rushingTDs") * 6.0
        + line.get_or_zero("receptions")
        + line.get_or_zero("receivingYards") / 10.0
        + line.get_or_zero("receivingTDs") * 6.0
        - line.get_or_zero("fumblesLost") * 2.0
}

pub fn analytics(player: &Player) -> NflAnalytics {
    let line = player.stat_line();
    let Some(games) = line.games().filter(|g| *g > 0.0) else {
        return NflAnalytics::default();
    };
    let season = Sport::Nfl.season_games();

    let points = fantasy_points(&line);
    let yards = line.get_or_zero("passingYards")
        + line.get_or_zero("rushingYards")
        + line.get_or_zero("receivingYards");
    let touchdowns = line.get_or_zero("passingTDs")
        + line.get_or_zero("rushingTDs")
        + line.get_or_zero("receivingTDs");
    let pace = |total: f64| season_pace(total, games, season).map(|v| round_to(v, 1));

    let touches = carries(&line).unwrap_or(0.0) + line.get_or_zero("receptions");
    let usage = (touches > 0.0).then(|| NflUsage {
        touches_per_game: round_to(touches / games, 1),
        targets_per_game: line.get("targets").map(|t| round_to(t / games, 1)),
    });

    NflAnalytics {
        fantasy_points_per_game: Some(round_to(points / games, 1)),
        season_projection: match (pace(points), pace(yards), pace(touchdowns)) {
            (Some(fantasy_points), Some(total_yards), Some(total_touchdowns)) => {
                Some(NflProjection {
                    fantasy_points,
                    total_yards,
                    total_touchdowns,
                })
            }
            _ => None,
        },
        usage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::stat_map;
    use serde_json::json;

    fn qb() -> Player {
        Player::new("qb-1", "Tua Tagovailoa", "MIA", "QB").with_stats(stat_map(json!({
            "completions": 388,
            "attempts": 560,
            "passingYards": 4624,
            "passingTDs": 29,
            "interceptions": 14,
            "sacksTaken": 29,
            "gamesPlayed": 17
        })))
    }

    #[test]
    fn test_quarterback_gets_passing_only() {
        let stats = advanced(&qb());
        let passing = stats.passing.expect("passing group");
        assert_eq!(passing.completion_percentage.to_string(), "69.3%");
        assert_eq!(passing.yards_per_attempt, 8.3);
        assert_eq!(passing.passer_rating, 101.1);
        assert!(stats.receiving.is_none());
        assert!(stats.blocking.is_none());
    }

    #[test]
    fn test_receiver_gets_receiving_only() {
        let wr = Player::new("wr-1", "Receiver", "MIN", "WR").with_stats(stat_map(json!({
            "targets": 100,
            "receptions": 70,
            "receivingYards": 1000,
            "airYards": 1150
        })));
        let stats = advanced(&wr);
        let receiving = stats.receiving.expect("receiving group");
        assert_eq!(receiving.catch_rate.to_string(), "70.0%");
        assert_eq!(receiving.yards_per_target, 10.0);
        assert_eq!(receiving.yards_per_reception, Some(14.3));
        assert_eq!(
            receiving.average_depth_of_target.map(|m| m.to_string()),
            Some("11.5 yards".to_string())
        );
        assert!(stats.passing.is_none());
    }

    #[test]
    fn test_center_blocks_but_cornerback_does_not() {
        let stats = stat_map(json!({"passBlockSnaps": 600, "pressuresAllowed": 30}));
        let center = Player::new("c", "C", "T", "C").with_stats(stats.clone());
        let corner = Player::new("cb", "CB", "T", "CB").with_stats(stats);

        let blocking = advanced(&center).blocking.expect("blocking group");
        assert_eq!(blocking.pass_block_win_rate.map(|p| p.to_string()), Some("95.0%".into()));
        assert!(advanced(&corner).blocking.is_none());
    }

    #[test]
    fn test_zero_attempts_omits_passing() {
        let player = Player::new("qb-2", "Backup", "T", "QB")
            .with_stats(stat_map(json!({"attempts": 0, "completions": 0})));
        assert!(advanced(&player).passing.is_none());
    }

    #[test]
    fn test_fantasy_points_ppr() {
        let rb = Player::new("rb", "RB", "T", "RB").with_stats(stat_map(json!({
            "rushingYards": 100,
            "rushingTDs": 1,
            "receptions": 5,
            "receivingYards": 50,
            "fumblesLost": 1
        })));
        // 10 + 6 + 5 + 5 - 2
        assert_eq!(fantasy_points(&rb.stat_line()), 24.0);
    }

    #[test]
    fn test_analytics_needs_games() {
        let player = Player::new("x", "X", "T", "RB").with_stats(stat_map(json!({"rushingYards": 50})));
        assert_eq!(analytics(&player), NflAnalytics::default());

        let analytics = analytics(&qb());
        assert!(analytics.fantasy_points_per_game.unwrap() > 0.0);
        let projection = analytics.season_projection.unwrap();
        assert_eq!(projection.total_yards, 4624.0);
        assert_eq!(projection.total_touchdowns, 29.0);
    }

    #[test]
    fn test_position_ratings() {
        let stats = subjective(&qb());
        assert!(stats.get("pocketPresence").is_some());
        assert!(stats.get("decisionMaking").is_some());
        assert!(stats.get("routeRunning").is_none());

        let te = Player::new("te", "TE", "KC", "te");
        assert!(subjective(&te).get("routeRunning").is_some());
    }
}
