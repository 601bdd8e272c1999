//! Auxiliary generators for marquee players.
//!
//! Trends, comparisons, injury and market summaries are produced for a
//! short hand-picked list of names per sport rather than the whole roster.
//! Each name is looked up by exact match in its sport's roster; a name that
//! is not there still gets every key with neutral values.

pub mod comparisons;
pub mod injury;
pub mod market;
pub mod trends;

use std::collections::BTreeMap;

use tracing::{debug, info};

use crate::models::{
    Comparisons, InjuryAnalytics, MarketAnalytics, Player, PlayerComparison, Roster, Sport,
    Trends,
};

/// Sport name → marquee player names.
pub type Marquee = BTreeMap<String, Vec<String>>;

/// Built-in marquee list.
pub fn default_marquee() -> Marquee {
    let table: [(&str, &[&str]); 4] = [
        (
            "NFL",
            &[
                "Patrick Mahomes",
                "Josh Allen",
                "Christian McCaffrey",
                "Justin Jefferson",
                "Travis Kelce",
            ],
        ),
        (
            "NBA",
            &[
                "LeBron James",
                "Stephen Curry",
                "Nikola Jokic",
                "Giannis Antetokounmpo",
                "Luka Doncic",
            ],
        ),
        (
            "NHL",
            &["Connor McDavid", "Auston Matthews", "Nathan MacKinnon", "Igor Shesterkin"],
        ),
        (
            "MLB",
            &["Shohei Ohtani", "Aaron Judge", "Mookie Betts", "Gerrit Cole"],
        ),
    ];

    table
        .iter()
        .map(|(sport, names)| {
            (
                sport.to_string(),
                names.iter().map(|n| n.to_string()).collect(),
            )
        })
        .collect()
}

/// Counting stats the generators look at.
pub fn headline_stats(sport: Sport) -> &'static [&'static str] {
    match sport {
        Sport::Nfl => &["passingYards", "rushingYards", "receivingYards", "receptions"],
        Sport::Nba => &["points", "rebounds", "assists"],
        Sport::Nhl => &["goals", "assists", "points"],
        Sport::Mlb => &["hits", "homeRuns", "rbi"],
    }
}

/// Output of the four generators.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Insights {
    pub trends: Trends,
    pub comparisons: Comparisons,
    pub injury_analytics: InjuryAnalytics,
    pub market_analytics: MarketAnalytics,
}

/// Run all four generators over `marquee`.
pub fn generate(roster: &Roster, marquee: &Marquee) -> Insights {
    let mut insights = Insights::default();

    for (sport_name, names) in marquee {
        let Some(sport) = Sport::from_name(sport_name) else {
            debug!("Skipping marquee list for unknown sport '{}'", sport_name);
            continue;
        };
        let players = roster.get(sport_name).map(Vec::as_slice).unwrap_or(&[]);
        let stats = headline_stats(sport);

        let mut sport_trends = BTreeMap::new();
        let mut sport_comparisons = BTreeMap::new();
        let mut injuries = BTreeMap::new();
        let mut markets = BTreeMap::new();

        for name in names {
            let player = find_player(players, name);
            if player.is_none() {
                debug!("Marquee player '{}' not in {} roster", name, sport_name);
            }
            let comparison = player.map(|p| comparisons::compare(p, players, stats));

            sport_trends.insert(name.clone(), trends::player_trends(player, stats));
            injuries.insert(name.clone(), injury::injury_profile(player, sport));
            markets.insert(
                name.clone(),
                market::market_profile(comparison.as_ref(), sport),
            );
            sport_comparisons.insert(
                name.clone(),
                comparison.unwrap_or_else(|| PlayerComparison::empty(stats)),
            );
        }

        insights.trends.insert(sport_name.clone(), sport_trends);
        insights.comparisons.insert(sport_name.clone(), sport_comparisons);
        insights.injury_analytics.insert(sport_name.clone(), injuries);
        insights.market_analytics.insert(sport_name.clone(), markets);
    }

    info!(
        "Generated insights for {} marquee players",
        marquee.values().map(Vec::len).sum::<usize>()
    );
    insights
}

fn find_player<'a>(players: &'a [Player], name: &str) -> Option<&'a Player> {
    players.iter().find(|p| p.name == name)
}
