//! Application layer for the narrative context.

pub mod renderer;
