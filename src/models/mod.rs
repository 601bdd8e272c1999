//! Core data models for the stat pipeline.

mod advanced;
mod analytics;
mod bundle;
mod ids;
mod insights;
mod leaderboard;
mod player;
mod sport;
mod subjective;
mod taxonomy;
mod value;

pub use advanced::*;
pub use analytics::*;
pub use bundle::*;
pub use ids::*;
pub use insights::*;
pub use leaderboard::*;
pub use player::*;
pub use sport::*;
pub use subjective::*;
pub use taxonomy::*;
pub use value::*;
