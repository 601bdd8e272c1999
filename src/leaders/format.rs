//! Display formatting for leaderboard values.
//!
//! The stat name picks the shape. Checks are case-sensitive substring
//! matches and the first matching rule wins.

use crate::models::FormattedValue;

const PERCENT_MARKERS: &[&str] = &["Percentage", "Rate"];
const AVERAGE_MARKERS: &[&str] = &["Average", "era", "whip"];
const MONEY_MARKERS: &[&str] = &["Salary", "Value"];
const INTEGER_MARKERS: &[&str] = &["TDs", "Goals", "HomeRuns", "Points"];

fn contains_any(stat: &str, markers: &[&str]) -> bool {
    markers.iter().any(|m| stat.contains(m))
}

fn is_whole(value: f64) -> bool {
    value.is_finite() && value.fract() == 0.0
}

/// Format a ranked value for display.
pub fn format_value(stat: &str, value: f64) -> FormattedValue {
    if contains_any(stat, PERCENT_MARKERS) || stat == "completion" {
        FormattedValue::Text(format!("{:.1}%", value))
    } else if contains_any(stat, AVERAGE_MARKERS) {
        FormattedValue::Text(format!("{:.2}", value))
    } else if contains_any(stat, MONEY_MARKERS) {
        FormattedValue::Text(format!("${:.1}M", value))
    } else if is_whole(value) || contains_any(stat, INTEGER_MARKERS) {
        FormattedValue::Integer(value.round() as i64)
    } else {
        FormattedValue::Text(format!("{:.1}", value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> FormattedValue {
        FormattedValue::Text(s.to_string())
    }

    #[test]
    fn test_percent_forms() {
        assert_eq!(format_value("completionPercentage", 69.28), text("69.3%"));
        assert_eq!(format_value("catchRate", 70.0), text("70.0%"));
        assert_eq!(format_value("completion", 64.0), text("64.0%"));
    }

    #[test]
    fn test_average_forms() {
        assert_eq!(format_value("era", 2.1), text("2.10"));
        assert_eq!(format_value("whip", 1.0), text("1.00"));
        assert_eq!(format_value("goalsAgainstAverage", 2.456), text("2.46"));
        assert_eq!(format_value("battingAverage", 0.3), text("0.30"));
    }

    #[test]
    fn test_money_form() {
        assert_eq!(format_value("estimatedValue", 12.34), text("$12.3M"));
        assert_eq!(format_value("capSalary", 40.0), text("$40.0M"));
    }

    #[test]
    fn test_integer_forms() {
        assert_eq!(format_value("points", 30.0), FormattedValue::Integer(30));
        assert_eq!(format_value("passingTDs", 29.6), FormattedValue::Integer(30));
        assert_eq!(format_value("fantasyPointsPerGame", 21.4), FormattedValue::Integer(21));
    }

    #[test]
    fn test_fallback_one_decimal() {
        assert_eq!(format_value("yardsPerAttempt", 8.26), text("8.3"));
        assert_eq!(format_value("pointsPer36", 30.04), text("30.0"));
    }

    #[test]
    fn test_rule_order() {
        // "Rate" beats the whole-number rule
        assert_eq!(format_value("walkRate", 10.0), text("10.0%"));
        // "Average" beats "Goals"
        assert_eq!(format_value("goalsAgainstAverage", 3.0), text("3.00"));
        // case-sensitive: "ERA" is not "era"
        assert_eq!(format_value("ERA", 3.0), FormattedValue::Integer(3));
    }
}
