//! Core domain types for the puzzle
//!
//! This module contains the fundamental domain types with zero I/O.
//! All types here are pure, testable, and validated on construction.

mod constraints;

pub use constraints::{ConstraintError, PuzzleConstraints};
