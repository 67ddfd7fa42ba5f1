//! Puzzle Prison — session bounded context.
//!
//! Responsible for the per-turn game loop: restoring the session snapshot,
//! dispatching the player's intent through the progress state machine, and
//! persisting checkpoints.

pub mod application;
pub mod domain;
