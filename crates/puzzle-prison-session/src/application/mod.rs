//! Application layer for the session context.

pub mod command_handlers;
pub mod progress_gateway;
