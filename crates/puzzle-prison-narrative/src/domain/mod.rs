//! Domain model for the narrative context.

pub mod audio;
pub mod catalogue;
pub mod narration;
