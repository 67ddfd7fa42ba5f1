//! Shared test mocks and utilities for the Puzzle Prison turn engine.

mod clock;
mod repository;

pub use clock::FixedClock;
pub use repository::{FailingProgressRepository, InMemoryProgressRepository, RepositoryCall};
