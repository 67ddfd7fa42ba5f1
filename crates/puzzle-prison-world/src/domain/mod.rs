//! Domain model for the room context.

pub mod context;
pub mod entities;
pub mod resolver;
