//! Supported sports and position vocabularies.

use std::fmt;

/// A sport with its own enrichment rules.
///
/// Dispatch is by exact roster key (`"NFL"`, `"NBA"`, `"NHL"`, `"MLB"`).
/// Any other key is left untouched by the enricher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sport {
    Nfl,
    Nba,
    Nhl,
    Mlb,
}

impl Sport {
    pub const ALL: [Sport; 4] = [Sport::Nfl, Sport::Nba, Sport::Nhl, Sport::Mlb];

    /// Exact, case-sensitive match on the roster key.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "NFL" => Some(Sport::Nfl),
            "NBA" => Some(Sport::Nba),
            "NHL" => Some(Sport::Nhl),
            "MLB" => Some(Sport::Mlb),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Sport::Nfl => "NFL",
            Sport::Nba => "NBA",
            Sport::Nhl => "NHL",
            Sport::Mlb => "MLB",
        }
    }

    /// Regular-season games per team.
    pub fn season_games(&self) -> f64 {
        match self {
            Sport::Nfl => 17.0,
            Sport::Nba => 82.0,
            Sport::Nhl => 82.0,
            Sport::Mlb => 162.0,
        }
    }
}

impl fmt::Display for Sport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// NFL quarterbacks.
pub const NFL_PASSERS: &[&str] = &["QB"];
/// NFL ball carriers.
pub const NFL_RUSHERS: &[&str] = &["RB", "HB", "FB"];
/// NFL receivers.
pub const NFL_RECEIVERS: &[&str] = &["WR", "TE"];
/// NFL offensive line.
pub const NFL_LINEMEN: &[&str] = &["OL", "OT", "OG", "C"];
/// NFL defenders.
pub const NFL_DEFENDERS: &[&str] = &[
    "DL", "DE", "DT", "NT", "EDGE", "LB", "ILB", "OLB", "MLB", "CB", "S", "FS", "SS", "DB",
];

/// NBA ball handlers.
pub const NBA_GUARDS: &[&str] = &["G", "PG", "SG", "G-F"];
/// NBA frontcourt.
pub const NBA_BIGS: &[&str] = &["C", "PF", "F", "F-C", "C-F"];

pub const NHL_GOALIES: &[&str] = &["G"];
pub const NHL_CENTERS: &[&str] = &["C"];

/// MLB pitchers.
pub const MLB_PITCHERS: &[&str] = &["P", "SP", "RP", "CL"];

/// Whether `position` is one of `family`.
///
/// Comparison is on the trimmed, upper-cased tag and is exact: `"C"` is not
/// a member of a family containing only `"CB"`.
pub fn in_family(position: &str, family: &[&str]) -> bool {
    let tag = position.trim().to_ascii_uppercase();
    family.iter().any(|member| *member == tag)
}
