//! ES module rendering of the output bundle.
//!
//! The module carries the static parts of the bundle plus three accessor
//! helpers. Leaderboards are only published through the JSON document, so
//! `leaders` is not exported here and `getStatLeaders` always returns an
//! empty list.

use std::fs;
use std::path::PathBuf;

use serde::Serialize;
use tracing::debug;

use crate::models::OutputBundle;

use super::{ensure_parent, StorageError};

const ACCESSORS: &str = r#"export const getStatCategory = (sport, category) =>
  (categories[sport] && categories[sport][category]) || [];

export const getStatLeaders = (sport, category, stat) => [];

export const getPlayerTrend = (sport, player, stat) =>
  (trends[sport] && trends[sport][player] && trends[sport][player][stat]) || 'stable';
"#;

const DEFAULT_EXPORT: &str = r#"export default {
  categories,
  trends,
  comparisons,
  injuryAnalytics,
  marketAnalytics,
  lastUpdated,
  getStatCategory,
  getStatLeaders,
  getPlayerTrend,
};
"#;

fn export_const<T: Serialize + ?Sized>(
    out: &mut String,
    name: &str,
    value: &T,
) -> Result<(), serde_json::Error> {
    out.push_str("export const ");
    out.push_str(name);
    out.push_str(" = ");
    out.push_str(&serde_json::to_string_pretty(value)?);
    out.push_str(";\n\n");
    Ok(())
}

/// Render the module source for `bundle`.
pub fn render_module(bundle: &OutputBundle) -> Result<String, serde_json::Error> {
    let mut out = String::new();
    out.push_str("// Generated by stat-leaders. Do not edit.\n");
    out.push_str(&format!(
        "// Taxonomy fingerprint: {}\n\n",
        bundle.categories.fingerprint()
    ));

    export_const(&mut out, "categories", &bundle.categories)?;
    export_const(&mut out, "trends", &bundle.trends)?;
    export_const(&mut out, "comparisons", &bundle.comparisons)?;
    export_const(&mut out, "injuryAnalytics", &bundle.injury_analytics)?;
    export_const(&mut out, "marketAnalytics", &bundle.market_analytics)?;
    export_const(&mut out, "lastUpdated", &bundle.last_updated)?;

    out.push_str(ACCESSORS);
    out.push('\n');
    out.push_str(DEFAULT_EXPORT);
    Ok(out)
}

/// Writes the rendered module, replacing the file.
pub struct ModuleWriter {
    path: PathBuf,
}

impl ModuleWriter {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn write(&self, bundle: &OutputBundle) -> Result<(), StorageError> {
        let source = render_module(bundle)?;
        ensure_parent(&self.path)?;
        fs::write(&self.path, source)?;
        debug!("Wrote module to {:?}", self.path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{StatTaxonomy, TrendDirection};
    use chrono::{TimeZone, Utc};
    use std::collections::BTreeMap;

    fn bundle() -> OutputBundle {
        let mut player = BTreeMap::new();
        player.insert("points".to_string(), TrendDirection::Up);
        let mut sport = BTreeMap::new();
        sport.insert("LeBron James".to_string(), player);
        let mut trends = BTreeMap::new();
        trends.insert("NBA".to_string(), sport);

        OutputBundle {
            categories: StatTaxonomy::builtin(),
            leaders: BTreeMap::new(),
            trends,
            comparisons: BTreeMap::new(),
            injury_analytics: BTreeMap::new(),
            market_analytics: BTreeMap::new(),
            last_updated: Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_module_exports() {
        let source = render_module(&bundle()).unwrap();

        for name in [
            "categories",
            "trends",
            "comparisons",
            "injuryAnalytics",
            "marketAnalytics",
            "lastUpdated",
            "getStatCategory",
            "getStatLeaders",
            "getPlayerTrend",
        ] {
            assert!(
                source.contains(&format!("export const {} =", name)),
                "missing export {}",
                name
            );
        }
        assert!(source.contains("export default {"));
        assert!(source.contains("export const lastUpdated = \"2025-03-01T12:00:00Z\";"));
        assert!(source.contains("\"LeBron James\""));
    }

    #[test]
    fn test_module_omits_leaders() {
        let source = render_module(&bundle()).unwrap();
        assert!(!source.contains("export const leaders"));
        assert!(!source.contains("  leaders,"));
    }

    #[test]
    fn test_module_header_has_fingerprint() {
        let b = bundle();
        let source = render_module(&b).unwrap();
        let first_lines: Vec<&str> = source.lines().take(2).collect();
        assert_eq!(
            first_lines[1],
            format!("// Taxonomy fingerprint: {}", b.categories.fingerprint())
        );
    }
}
