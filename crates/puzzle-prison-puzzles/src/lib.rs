//! Puzzle Prison — puzzles bounded context.
//!
//! Responsible for the two sub-puzzles embedded in the quest: the corner
//! lap walked at checkpoint 4 and the terminal quiz answered at checkpoint 6.

pub mod domain;
