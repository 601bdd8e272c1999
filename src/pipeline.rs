//! End-to-end pipeline run.
//!
//! Reads the roster, enriches it in place, builds leaderboards and the
//! marquee insights, then writes the bundle. Only the input read can fail
//! the run; output write failures are reported in the result.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::enrich::{enrich_roster, EnrichSummary};
use crate::insights;
use crate::leaders::build_leaders;
use crate::models::{leaderboard_count, OutputBundle, Roster};
use crate::storage::{read_roster, write_outputs, StorageError, WriteReport};

/// Result of a pipeline run.
#[derive(Debug)]
pub struct PipelineResult {
    pub players: usize,
    pub enrichment: EnrichSummary,
    pub leaderboards: usize,
    pub bundle: OutputBundle,
    /// `None` on a dry run
    pub writes: Option<WriteReport>,
    pub duration: Duration,
}

/// Enrich `roster` in place and build the bundle, stamped with `now`.
pub fn build_bundle_at(roster: &mut Roster, config: &AppConfig, now: DateTime<Utc>) -> (OutputBundle, EnrichSummary) {
    let enrichment = enrich_roster(roster);

    let taxonomy = config.taxonomy();
    info!("Using stat taxonomy {}", taxonomy.fingerprint());
    let leaders = build_leaders(roster, &taxonomy, &config.ranking_rules());
    let insights = insights::generate(roster, &config.marquee());

    let bundle = OutputBundle {
        categories: taxonomy,
        leaders,
        trends: insights.trends,
        comparisons: insights.comparisons,
        injury_analytics: insights.injury_analytics,
        market_analytics: insights.market_analytics,
        last_updated: now,
    };
    (bundle, enrichment)
}

/// Run the whole pipeline for the roster at `input`.
///
/// `output_dir` overrides the configured directory. With `dry_run` the
/// bundle is built but nothing is written.
pub fn run(
    config: &AppConfig,
    input: &Path,
    output_dir: Option<PathBuf>,
    dry_run: bool,
) -> Result<PipelineResult, StorageError> {
    let start = Instant::now();
    info!("Starting stat pipeline for {:?}", input);

    let mut roster = read_roster(input)?;
    let players: usize = roster.values().map(Vec::len).sum();

    let (bundle, enrichment) = build_bundle_at(&mut roster, config, Utc::now());
    let leaderboards = leaderboard_count(&bundle.leaders);

    let writes = if dry_run {
        info!("Dry run, skipping output files");
        None
    } else {
        let mut storage = config.storage();
        if let Some(dir) = output_dir {
            storage.data_dir = dir;
        }
        let report = write_outputs(&storage, &bundle);
        if !report.is_complete() {
            warn!("{} of 2 output files failed to write", report.failed.len());
        }
        Some(report)
    };

    let duration = start.elapsed();
    info!(
        "Pipeline finished: {} players, {} leaderboards in {:?}",
        players, leaderboards, duration
    );

    Ok(PipelineResult {
        players,
        enrichment,
        leaderboards,
        bundle,
        writes,
        duration,
    })
}
