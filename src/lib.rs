//! # Stat Leaders
//!
//! Enriches per-sport player rosters with derived metrics and turns them
//! into ranked leaderboards plus a static data bundle.
//!
//! ## Architecture
//!
//! - **models**: Core data structures (players, taxonomy, leaderboards, bundle)
//! - **enrich**: Per-sport advanced stats, ratings and analytics
//! - **leaders**: Stat extraction, ranking and display formatting
//! - **insights**: Trends, comparisons, injury and market summaries
//! - **storage**: Roster input and bundle output (JSON document, ES module)
//! - **calculate**: Shared rate, percentile and rounding math
//! - **config**: Configuration loading and validation
//! - **pipeline**: One end-to-end run

pub mod calculate;
pub mod config;
pub mod enrich;
pub mod insights;
pub mod leaders;
pub mod models;
pub mod pipeline;
pub mod storage;

pub use models::*;
