//! Display-ready stat values and numeric coercion.
//!
//! Derived metrics keep a fixed value domain and a fixed text shape so that
//! consumers matching on strings (`"78.5%"`, `"21.4 mph"`, `"$12.3M"`) keep
//! working. Coercion goes the other way, pulling a number back out of such a
//! string.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Serializer};
use serde_json::Value;

static PERCENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(-?\d+(?:\.\d+)?)\s*%").expect("valid percent regex"));

static NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"-?(?:\d+(?:\.\d+)?|\.\d+)").expect("valid number regex"));

/// A percentage in 0–100, rendered with one decimal: `"78.5%"`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Percentage(f64);

impl Percentage {
    /// Clamps into 0–100.
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, 100.0))
    }

    /// Percentage of `part` in `whole`; `None` when `whole` is not positive.
    pub fn of(part: f64, whole: f64) -> Option<Self> {
        if whole > 0.0 {
            Some(Self::new(part / whole * 100.0))
        } else {
            None
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.0)
    }
}

impl Serialize for Percentage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Unit suffix for a [`Measure`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Mph,
    Yards,
    Minutes,
}

impl Unit {
    pub fn suffix(&self) -> &'static str {
        match self {
            Unit::Mph => "mph",
            Unit::Yards => "yards",
            Unit::Minutes => "min",
        }
    }
}

/// A one-decimal measurement with a unit suffix: `"21.4 mph"`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measure {
    pub value: f64,
    pub unit: Unit,
}

impl Measure {
    pub fn new(value: f64, unit: Unit) -> Self {
        Self { value, unit }
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} {}", self.value, self.unit.suffix())
    }
}

impl Serialize for Measure {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A money amount in millions: `"$12.3M"`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dollars(pub f64);

impl fmt::Display for Dollars {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.1}M", self.0)
    }
}

impl Serialize for Dollars {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// An integer rating on the 1–10 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    /// Clamps into 1–10.
    pub fn new(value: i64) -> Self {
        Self(value.clamp(Self::MIN as i64, Self::MAX as i64) as u8)
    }

    /// Map `value` linearly onto 1–10 where `worst` maps to 1 and `best`
    /// maps to 10. Works for inverted scales (`worst > best`).
    pub fn scaled(value: f64, worst: f64, best: f64) -> Self {
        if !value.is_finite() || (best - worst).abs() < f64::EPSILON {
            return Self::new(5);
        }
        let t = ((value - worst) / (best - worst)).clamp(0.0, 1.0);
        Self::new(1 + (t * 9.0).round() as i64)
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

/// Pull a number out of a stat string.
///
/// A leading percentage (`"78.5%"`) wins; otherwise the first embedded number
/// (`"10 pts"`, `"$12.3M"`, `".915"`). Returns `None` when the text holds
/// no number at all.
pub fn parse_numeric_text(text: &str) -> Option<f64> {
    let captured = PERCENT_RE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .or_else(|| NUMBER_RE.find(text))?;
    captured
        .as_str()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
}

/// Coerce a raw JSON stat value into a number.
///
/// Numbers pass through, strings go through [`parse_numeric_text`], and
/// everything else (objects, arrays, booleans, null) yields `None`.
pub fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|n| n.is_finite()),
        Value::String(s) => parse_numeric_text(s),
        _ => None,
    }
}
