//! Puzzle Prison — durable progress storage.

pub mod pg_progress_repository;
pub mod schema;
