//! Candidate prefiltering
//!
//! Cheap filters that reduce the full base word list to a small candidate set
//! before the external oracle is consulted. No oracle calls happen here.

pub mod reasonable;

pub use reasonable::looks_reasonable;

use crate::core::PuzzleConstraints;
use rustc_hash::FxHashSet;

/// Options controlling the prefilter
///
/// When `reasonable_filter` is on, the heuristic replaces the plain minimum
/// length check entirely; the two are mutually exclusive, never combined.
#[derive(Debug, Clone)]
pub struct FilterOptions {
    pub min_len: usize,
    pub reasonable_filter: bool,
    pub blacklist: FxHashSet<String>,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            min_len: 4,
            reasonable_filter: true,
            blacklist: FxHashSet::default(),
        }
    }
}

/// Reduce base words to the candidate set for one puzzle instance
///
/// A word survives when it is not blacklisted, contains the mandatory letter,
/// uses only allowed letters (repetition unrestricted), and passes either the
/// heuristic test or the plain length check, depending on the toggle.
#[must_use]
pub fn prefilter(
    base_words: &[String],
    constraints: &PuzzleConstraints,
    options: &FilterOptions,
) -> Vec<String> {
    base_words
        .iter()
        .filter(|word| !options.blacklist.contains(word.as_str()))
        .filter(|word| constraints.permits(word.as_str()))
        .filter(|word| {
            if options.reasonable_filter {
                looks_reasonable(word.as_str(), options.min_len)
            } else {
                word.len() >= options.min_len
            }
        })
        .cloned()
        .collect()
}
