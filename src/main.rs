use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use stat_leaders::config::AppConfig;
use stat_leaders::enrich::enrich_roster;
use stat_leaders::leaders::leaderboard_for;
use stat_leaders::pipeline;
use stat_leaders::storage::{read_roster, JsonWriter};

#[derive(Parser)]
#[command(name = "stat-leaders")]
#[command(about = "Player stat enrichment and leaderboard generator")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "./stat-leaders.toml")]
    config: PathBuf,

    /// Log level (trace, debug, info, warn, error); overrides the config file
    #[arg(long)]
    log_level: Option<String>,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full pipeline and write the data bundle
    Generate {
        /// Roster JSON (sport → players)
        #[arg(long)]
        input: PathBuf,

        /// Override the configured output directory
        #[arg(long)]
        output_dir: Option<PathBuf>,

        /// Build everything but don't write output files
        #[arg(long)]
        dry_run: bool,
    },

    /// Enrich a roster and write or print the result
    Enrich {
        #[arg(long)]
        input: PathBuf,

        /// Where to write the enriched roster (stdout when omitted)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Print one leaderboard
    Leaders {
        #[arg(long)]
        input: PathBuf,

        #[arg(long)]
        sport: String,

        /// Category the stat is listed under
        #[arg(long)]
        category: String,

        #[arg(long)]
        stat: String,
    },

    /// Show the active stat taxonomy
    Taxonomy {
        /// Only show this sport
        #[arg(long)]
        sport: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load config from {:?}", cli.config))?;

    // Initialize tracing
    let level = cli.log_level.clone().unwrap_or_else(|| config.log_level.clone());
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&level));

    let registry = tracing_subscriber::registry().with(filter);
    if cli.json_logs {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    tracing::info!("Starting stat-leaders v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Generate {
            input,
            output_dir,
            dry_run,
        } => match pipeline::run(&config, &input, output_dir, dry_run) {
            Ok(result) => {
                println!("\n=== Pipeline Results ===");
                println!("Players:          {}", result.players);
                println!("Enriched:         {}", result.enrichment.enriched);
                println!("Without stats:    {}", result.enrichment.without_stats);
                println!("Leaderboards:     {}", result.leaderboards);
                println!("Taxonomy:         {}", result.bundle.categories.fingerprint());
                println!("Duration:         {:?}", result.duration);
                if !result.enrichment.skipped_sports.is_empty() {
                    println!(
                        "Skipped sports:   {}",
                        result.enrichment.skipped_sports.join(", ")
                    );
                }

                match &result.writes {
                    None => println!("\n(dry run - no data written to disk)"),
                    Some(report) => {
                        for path in &report.written {
                            println!("Wrote:            {}", path.display());
                        }
                        if !report.is_complete() {
                            println!("\nErrors:");
                            for (path, err) in &report.failed {
                                println!("  - {}: {}", path.display(), err);
                            }
                        }
                    }
                }
            }
            Err(e) => {
                tracing::error!("Pipeline failed: {}", e);
                return Err(e.into());
            }
        },

        Commands::Enrich { input, output } => {
            let mut roster = read_roster(&input)?;
            let summary = enrich_roster(&mut roster);

            match output {
                Some(path) => {
                    JsonWriter::new(path.clone()).write(&roster)?;
                    println!("\n=== Enrichment Results ===");
                    println!("Enriched:         {}", summary.enriched);
                    println!("Without stats:    {}", summary.without_stats);
                    println!("Written to:       {}", path.display());
                }
                None => println!("{}", serde_json::to_string_pretty(&roster)?),
            }
        }

        Commands::Leaders {
            input,
            sport,
            category,
            stat,
        } => {
            let taxonomy = config.taxonomy();
            let listed = taxonomy
                .stats(&sport, &category)
                .is_some_and(|stats| stats.contains(&stat));
            if !listed {
                tracing::warn!(
                    "{}/{}/{} is not in the active taxonomy",
                    sport,
                    category,
                    stat
                );
            }

            let mut roster = read_roster(&input)?;
            enrich_roster(&mut roster);
            let entries = leaderboard_for(&roster, &sport, &stat, &config.ranking_rules());

            println!("=== {} {} leaders ({}) ===\n", sport, stat, category);
            if entries.is_empty() {
                println!("No eligible players.");
            }
            for entry in &entries {
                println!(
                    "{:>3}. {:<28} {:<5} {:<4} {}",
                    entry.rank,
                    entry.player_name,
                    entry.player_team,
                    entry.player_position,
                    entry.value
                );
            }
        }

        Commands::Taxonomy { sport } => print_taxonomy(&config, sport.as_deref(), &cli.config)?,
    }

    Ok(())
}

fn print_taxonomy(config: &AppConfig, sport: Option<&str>, source: &Path) -> Result<()> {
    let taxonomy = config.taxonomy();
    let origin = if config.taxonomy.is_some() {
        format!("{}", source.display())
    } else {
        "built-in".to_string()
    };

    println!("=== Stat Taxonomy ({}) ===", origin);
    println!("Fingerprint:      {}", taxonomy.fingerprint());
    println!("Stats:            {}", taxonomy.triple_count());

    let mut shown = 0;
    for (name, categories) in taxonomy.sports() {
        if sport.is_some_and(|s| s != name) {
            continue;
        }
        shown += 1;
        println!("\n{}", name);
        for (category, stats) in categories {
            println!("  {:<14} {}", category, stats.join(", "));
        }
    }

    if let (Some(s), 0) = (sport, shown) {
        anyhow::bail!("Sport '{}' is not in the taxonomy", s);
    }
    Ok(())
}
