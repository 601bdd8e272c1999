//! NBA enrichment.
//!
//! Counting stats may be season totals or per-game averages; rate stats
//! only need `minutes` to be on the same basis as the counts.

use crate::calculate::{per_game, per_minutes, ratio, round_to};
use crate::models::{
    in_family, NbaAdvancedStats, NbaAnalytics, NbaImpact, NbaInterior, NbaPlaymaking,
    NbaProjection, NbaShooting, Percentage, Player, ShotBucket, ShotChart, Sport, StatLine,
    SubjectiveStats, NBA_BIGS, NBA_GUARDS,
};

use super::ratings::{base_ratings, scaled_or_seeded, seeded};

pub fn advanced(player: &Player) -> NbaAdvancedStats {
    let line = player.stat_line();
    let pos = player.position.as_str();

    let fgm = line.get_or_zero("fieldGoalsMade");
    let fga = line.get_or_zero("fieldGoalsAttempted");
    let tpm = line.get_or_zero("threePointersMade");
    let tpa = line.get_or_zero("threePointersAttempted");
    let ftm = line.get_or_zero("freeThrowsMade");
    let fta = line.get_or_zero("freeThrowsAttempted");
    let minutes = line.get_or_zero("minutes");
    let per36 = |stat: &str| {
        line.get(stat)
            .and_then(|total| per_minutes(total, minutes, 36.0))
            .map(|v| round_to(v, 1))
    };

    let shooting = (fga > 0.0).then(|| NbaShooting {
        true_shooting_percentage: Percentage::new(
            line.get_or_zero("points") / (2.0 * (fga + 0.44 * fta)) * 100.0,
        ),
        effective_field_goal_percentage: Percentage::new((fgm + 0.5 * tpm) / fga * 100.0),
        three_point_rate: Percentage::new(tpa / fga * 100.0),
    });

    let playmaking = in_family(pos, NBA_GUARDS)
        .then(|| {
            let ast_to = line
                .get("assists")
                .and_then(|ast| ratio(ast, line.get_or_zero("turnovers")))
                .map(|v| round_to(v, 2));
            let assists_per36 = per36("assists");
            (ast_to.is_some() || assists_per36.is_some()).then_some(NbaPlaymaking {
                assist_to_turnover_ratio: ast_to,
                assists_per36,
            })
        })
        .flatten();

    let interior = (in_family(pos, NBA_BIGS) && minutes > 0.0).then(|| NbaInterior {
        rebounds_per36: per36("rebounds").unwrap_or(0.0),
        blocks_per36: per36("blocks").unwrap_or(0.0),
    });

    NbaAdvancedStats {
        shooting,
        three_point_percentage: Percentage::of(tpm, tpa),
        free_throw_percentage: Percentage::of(ftm, fta),
        points_per36: per36("points"),
        player_efficiency: efficiency(&line).map(|v| round_to(v, 1)),
        playmaking,
        interior,
    }
}

/// Value per game of a counting stat. Without `gamesPlayed` the stat is
/// taken as already per game.
fn game_average(line: &StatLine<'_>, stat: &str) -> Option<f64> {
    let value = line.get(stat)?;
    match line.games() {
        Some(games) => per_game(value, games),
        None => Some(value),
    }
}

/// Box-score efficiency per game:
/// PTS + REB + AST + STL + BLK − missed FG − missed FT − TOV.
fn efficiency(line: &StatLine<'_>) -> Option<f64> {
    line.get("points")?;
    let total = line.get_or_zero("points")
        + line.get_or_zero("rebounds")
        + line.get_or_zero("assists")
        + line.get_or_zero("steals")
        + line.get_or_zero("blocks")
        - (line.get_or_zero("fieldGoalsAttempted") - line.get_or_zero("fieldGoalsMade"))
        - (line.get_or_zero("freeThrowsAttempted") - line.get_or_zero("freeThrowsMade"))
        - line.get_or_zero("turnovers");
    match line.games() {
        Some(games) => per_game(total, games),
        None => Some(total),
    }
}

pub fn subjective(player: &Player) -> SubjectiveStats {
    let line = player.stat_line();
    let pos = player.position.as_str();
    let mut stats = SubjectiveStats::new(base_ratings(player, Sport::Nba));

    if in_family(pos, NBA_GUARDS) {
        let assists = game_average(&line, "assists");
        let ast_to = line
            .get("assists")
            .and_then(|ast| ratio(ast, line.get("turnovers")?));
        stats = stats
            .with(
                "courtVision",
                scaled_or_seeded(player, "courtVision", assists, 2.0, 10.0, (5, 9)),
            )
            .with(
                "ballHandling",
                scaled_or_seeded(player, "ballHandling", ast_to, 1.0, 4.0, (5, 9)),
            );
    }
    if in_family(pos, NBA_BIGS) {
        let blocks = game_average(&line, "blocks");
        let rebounds = game_average(&line, "rebounds");
        stats = stats
            .with(
                "rimProtection",
                scaled_or_seeded(player, "rimProtection", blocks, 0.3, 2.5, (5, 9)),
            )
            .with(
                "rebounding",
                scaled_or_seeded(player, "rebounding", rebounds, 4.0, 13.0, (5, 9)),
            );
    }
    if !in_family(pos, NBA_GUARDS) && !in_family(pos, NBA_BIGS) {
        stats = stats.with("versatility", seeded(player, "versatility", 5, 9));
    }
    stats
}

fn bucket(made: f64, attempted: f64) -> ShotBucket {
    ShotBucket {
        made: made.max(0.0).round() as u32,
        attempted: attempted.max(0.0).round() as u32,
        percentage: Percentage::of(made, attempted)
            .map(|p| round_to(p.value(), 1))
            .unwrap_or(0.0),
    }
}

pub fn analytics(player: &Player) -> NbaAnalytics {
    let line = player.stat_line();
    if !line.is_present() {
        return NbaAnalytics::default();
    }

    let fgm = line.get_or_zero("fieldGoalsMade");
    let fga = line.get_or_zero("fieldGoalsAttempted");
    let tpm = line.get_or_zero("threePointersMade");
    let tpa = line.get_or_zero("threePointersAttempted");
    let ftm = line.get_or_zero("freeThrowsMade");
    let fta = line.get_or_zero("freeThrowsAttempted");

    let shot_chart = (fga > 0.0 || fta > 0.0).then(|| ShotChart {
        two_point: bucket(fgm - tpm, fga - tpa),
        three_point: bucket(tpm, tpa),
        free_throw: bucket(ftm, fta),
    });

    let avg = |stat: &str| game_average(&line, stat).map(|v| round_to(v, 1));
    let projection = avg("points").map(|points_per_game| NbaProjection {
        points_per_game,
        rebounds_per_game: avg("rebounds").unwrap_or(0.0),
        assists_per_game: avg("assists").unwrap_or(0.0),
    });

    let stocks = match (game_average(&line, "steals"), game_average(&line, "blocks")) {
        (None, None) => None,
        (steals, blocks) => Some(steals.unwrap_or(0.0) + blocks.unwrap_or(0.0)),
    };
    let impact = stocks.map(|stocks| NbaImpact {
        stocks_per_game: round_to(stocks, 1),
        turnovers_per_game: avg("turnovers"),
    });

    NbaAnalytics {
        shot_chart,
        projection,
        impact,
    }
}
