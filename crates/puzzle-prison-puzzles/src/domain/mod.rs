//! Domain model for the puzzles context.

pub mod lap;
pub mod quiz;
