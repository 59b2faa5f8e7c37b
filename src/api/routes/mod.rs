//! Route handlers.

pub mod seasons;
pub mod stats;
