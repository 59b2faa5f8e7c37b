//! Core data models for the match tracker.

mod faction;
mod game;
mod hero;
mod ids;
mod matches;
mod season;
mod stats;

pub use faction::*;
pub use game::*;
pub use hero::*;
pub use ids::*;
pub use matches::*;
pub use season::*;
pub use stats::*;
