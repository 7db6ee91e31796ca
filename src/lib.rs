//! Bee Solver
//!
//! Solves spelling-bee style puzzles (7 distinct allowed letters, 1 mandatory
//! letter) by combining a local Hunspell word list with the `hunspell`
//! process as the authoritative spelling oracle.
//!
//! # Quick Start
//!
//! ```rust
//! use bee_solver::core::PuzzleConstraints;
//! use bee_solver::solver::solve;
//!
//! let constraints = PuzzleConstraints::new("aelnrst", "e").unwrap();
//! let accepted = vec!["entstellen".to_string(), "rennen".to_string()];
//!
//! let results = solve(&constraints, &accepted);
//! assert_eq!(results.max_len, 10);
//! ```

// Run configuration
pub mod config;

// Core domain types
pub mod core;

// Hunspell dictionary access
pub mod dictionary;

// Candidate prefiltering
pub mod filter;

// External spelling oracle
pub mod oracle;

// Terminal output formatting
pub mod output;

// Puzzle solving
pub mod solver;
