//! Puzzle Prison — narrative bounded context.
//!
//! Responsible for what the player hears: narration selection keys, the
//! catalogue of texts and sound effects, and rendering to speech markup.

pub mod application;
pub mod domain;
