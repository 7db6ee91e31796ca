//! Puzzle solving
//!
//! Applies the exact puzzle semantics to oracle-accepted words.

mod engine;

pub use engine::{ResultSet, solve};
