//! Puzzle Prison — room bounded context.
//!
//! Responsible for the objects in the prison room, the remembered context
//! tag carried between turns, and resolving spoken object phrases into
//! canonical entities.

pub mod domain;
