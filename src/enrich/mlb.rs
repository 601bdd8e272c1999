//! MLB enrichment.
//!
//! `inningsPitched` arrives in baseball notation (`180.1` is 180⅓).

use crate::calculate::{innings_from_notation, ratio, round_to, season_pace};
use crate::models::{
    in_family, BattedBall, Measure, MlbAdvancedStats, MlbAnalytics, MlbHitterProjection,
    MlbHitting, MlbPitcherProjection, MlbPitching, Percentage, Player, Sport, StatLine,
    SubjectiveStats, Unit, MLB_PITCHERS,
};

use super::ratings::{base_ratings, scaled_or_seeded};

/// FIP constant that puts FIP on the ERA scale.
pub const FIP_CONSTANT: f64 = 3.10;

/// League home runs per fly ball, used for xFIP.
pub const HR_PER_FLY_BALL: f64 = 0.105;

/// Starts in a full rotation turn.
pub const SEASON_STARTS: f64 = 32.0;

fn innings(line: &StatLine<'_>) -> Option<f64> {
    line.get("inningsPitched")
        .map(innings_from_notation)
        .filter(|ip| *ip > 0.0)
}

fn plate_appearances(line: &StatLine<'_>) -> f64 {
    line.get_or_zero("atBats")
        + line.get_or_zero("walks")
        + line.get_or_zero("hitByPitch")
        + line.get_or_zero("sacrificeFlies")
}

fn total_bases(line: &StatLine<'_>) -> f64 {
    let doubles = line.get_or_zero("doubles");
    let triples = line.get_or_zero("triples");
    let homers = line.get_or_zero("homeRuns");
    let singles = line.get_or_zero("hits") - doubles - triples - homers;
    singles + 2.0 * doubles + 3.0 * triples + 4.0 * homers
}

fn hitting(line: &StatLine<'_>) -> Option<MlbHitting> {
    let pa = plate_appearances(line);
    if pa <= 0.0 {
        return None;
    }
    let at_bats = line.get_or_zero("atBats");
    let hits = line.get_or_zero("hits");
    let walks = line.get_or_zero("walks");

    let avg = ratio(hits, at_bats);
    let slg = ratio(total_bases(line), at_bats);
    let obp = Percentage::new((hits + walks + line.get_or_zero("hitByPitch")) / pa * 100.0);

    Some(MlbHitting {
        batting_average: avg.map(|v| round_to(v, 3)),
        on_base_percentage: obp,
        slugging: slg.map(|v| round_to(v, 3)),
        ops: slg.map(|s| round_to(obp.value() / 100.0 + s, 3)),
        isolated_power: avg.zip(slg).map(|(a, s)| round_to(s - a, 3)),
        walk_rate: Percentage::new(walks / pa * 100.0),
        strikeout_rate: Percentage::new(line.get_or_zero("strikeouts") / pa * 100.0),
    })
}

/// Fielding-independent pitching for a given home run count.
fn fip(home_runs: f64, line: &StatLine<'_>, ip: f64) -> f64 {
    let free_passes = line.get_or_zero("walksAllowed") + line.get_or_zero("hitBatters");
    (13.0 * home_runs + 3.0 * free_passes - 2.0 * line.get_or_zero("strikeouts")) / ip
        + FIP_CONSTANT
}

fn pitching(line: &StatLine<'_>) -> Option<MlbPitching> {
    let ip = innings(line)?;
    let walks = line.get_or_zero("walksAllowed");
    let strikeouts = line.get_or_zero("strikeouts");

    Some(MlbPitching {
        era: round_to(line.get_or_zero("earnedRuns") * 9.0 / ip, 2),
        whip: round_to((walks + line.get_or_zero("hitsAllowed")) / ip, 2),
        fip: round_to(fip(line.get_or_zero("homeRunsAllowed"), line, ip), 2),
        xfip: line
            .get("flyBalls")
            .map(|fb| round_to(fip(fb * HR_PER_FLY_BALL, line, ip), 2)),
        strikeouts_per_nine: round_to(strikeouts * 9.0 / ip, 1),
        walks_per_nine: round_to(walks * 9.0 / ip, 1),
        strikeout_to_walk_ratio: ratio(strikeouts, walks).map(|v| round_to(v, 2)),
    })
}

pub fn advanced(player: &Player) -> MlbAdvancedStats {
    let line = player.stat_line();

    if in_family(player.position.as_str(), MLB_PITCHERS) {
        return MlbAdvancedStats {
            pitching: pitching(&line),
            fastball_velocity: line
                .get("fastballVelocity")
                .map(|mph| Measure::new(mph, Unit::Mph)),
            ..Default::default()
        };
    }

    MlbAdvancedStats {
        hitting: hitting(&line),
        stolen_base_success_rate: line.get("stolenBases").and_then(|sb| {
            Percentage::of(sb, sb + line.get_or_zero("caughtStealing"))
        }),
        ..Default::default()
    }
}

pub fn subjective(player: &Player) -> SubjectiveStats {
    let line = player.stat_line();
    let stats = SubjectiveStats::new(base_ratings(player, Sport::Mlb));

    if in_family(player.position.as_str(), MLB_PITCHERS) {
        let pitching = pitching(&line);
        let bb9 = pitching.as_ref().map(|p| p.walks_per_nine);
        let k9 = pitching.as_ref().map(|p| p.strikeouts_per_nine);
        return stats
            .with("command", scaled_or_seeded(player, "command", bb9, 4.5, 1.5, (5, 9)))
            .with("stuff", scaled_or_seeded(player, "stuff", k9, 6.0, 12.0, (5, 9)));
    }

    let eye = line
        .get("walks")
        .and_then(|bb| ratio(bb, line.get("strikeouts")?));
    let iso = hitting(&line).and_then(|h| h.isolated_power);
    stats
        .with(
            "plateDiscipline",
            scaled_or_seeded(player, "plateDiscipline", eye, 0.2, 1.0, (5, 9)),
        )
        .with("power", scaled_or_seeded(player, "power", iso, 0.08, 0.28, (5, 9)))
}

pub fn analytics(player: &Player) -> MlbAnalytics {
    let line = player.stat_line();

    if in_family(player.position.as_str(), MLB_PITCHERS) {
        let starts = line.get("gamesStarted").filter(|s| *s > 0.0);
        let pitching_projection = starts.zip(innings(&line)).and_then(|(gs, ip)| {
            let pace = |total: f64| season_pace(total, gs, SEASON_STARTS).map(|v| round_to(v, 1));
            Some(MlbPitcherProjection {
                innings: pace(ip)?,
                strikeouts: pace(line.get_or_zero("strikeouts"))?,
                wins: pace(line.get_or_zero("wins"))?,
            })
        });
        return MlbAnalytics {
            pitching_projection,
            ..Default::default()
        };
    }

    let hits = line.get_or_zero("hits");
    let homers = line.get_or_zero("homeRuns");
    let balls_in_play = line.get_or_zero("atBats") - line.get_or_zero("strikeouts") - homers
        + line.get_or_zero("sacrificeFlies");
    let batted_ball = ratio(hits - homers, balls_in_play).map(|babip| BattedBall {
        babip: round_to(babip, 3),
    });

    let season = Sport::Mlb.season_games();
    let projection = line.games().filter(|g| *g > 0.0).and_then(|games| {
        let pace = |total: f64| season_pace(total, games, season).map(|v| round_to(v, 0));
        Some(MlbHitterProjection {
            hits: pace(hits)?,
            home_runs: pace(homers)?,
            rbi: pace(line.get_or_zero("rbi"))?,
            stolen_bases: pace(line.get_or_zero("stolenBases"))?,
        })
    });

    MlbAnalytics {
        batted_ball,
        projection,
        ..Default::default()
    }
}
