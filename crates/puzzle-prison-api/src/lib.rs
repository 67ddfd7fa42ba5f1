//! Puzzle Prison — HTTP API.
//!
//! Exposes the turn engine over axum: a single turn endpoint that takes the
//! platform's resolved intent plus session attributes, and a health check.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
