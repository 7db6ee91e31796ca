//! Optional word blacklist
//!
//! One excluded word per line; `#` comments and anything that is not a plain
//! a-z word are ignored. The blacklist is best-effort: a missing file yields
//! an empty set, never an error.

use super::is_base_word;
use rustc_hash::FxHashSet;
use std::fs;
use std::path::Path;

/// Load the blacklist from an optional path
///
/// Returns an empty set when no path is configured or the file does not
/// exist. File contents are decoded lossily; damaged entries simply fail the
/// base-word check and are dropped.
#[must_use]
pub fn load_blacklist(path: Option<&Path>) -> FxHashSet<String> {
    let mut words = FxHashSet::default();

    let Some(path) = path else {
        return words;
    };
    let Ok(bytes) = fs::read(path) else {
        return words;
    };

    for line in String::from_utf8_lossy(&bytes).lines() {
        let word = line.trim().to_lowercase();
        if !word.starts_with('#') && is_base_word(&word) {
            words.insert(word);
        }
    }

    words
}
