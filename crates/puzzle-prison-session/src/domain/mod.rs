//! Domain model for the session context.

pub mod commands;
pub mod dispatcher;
pub mod intents;
pub mod snapshot;
pub mod transitions;
