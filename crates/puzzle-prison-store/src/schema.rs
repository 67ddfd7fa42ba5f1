//! Progress store database schema.

/// SQL to create the progress table. Shared with the migrations directory.
pub const CREATE_PLAYER_PROGRESS_TABLE: &str =
    include_str!("../../../migrations/0001_create_player_progress.sql");
