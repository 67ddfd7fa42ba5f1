//! Shared application state.

use std::sync::Arc;

use puzzle_prison_core::clock::Clock;
use puzzle_prison_core::repository::ProgressRepository;
use puzzle_prison_narrative::application::renderer::AudioConfig;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Clock used to stamp durable progress.
    pub clock: Arc<dyn Clock>,
    /// Durable checkpoint store.
    pub progress_repository: Arc<dyn ProgressRepository>,
    /// Where sound effect clips are served from.
    pub audio: AudioConfig,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(
        clock: Arc<dyn Clock>,
        progress_repository: Arc<dyn ProgressRepository>,
        audio: AudioConfig,
    ) -> Self {
        Self {
            clock,
            progress_repository,
            audio,
        }
    }
}
