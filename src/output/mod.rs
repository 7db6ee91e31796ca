//! Terminal output formatting
//!
//! Display utilities for the final report.

pub mod display;

pub use display::{print_prefilter_summary, print_report};
