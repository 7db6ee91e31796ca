//! Result derivation from oracle-accepted words
//!
//! The engine applies the exact puzzle semantics to accepted words and
//! derives the ordered result sets. It renormalizes its input, so it is safe
//! against any `Oracle` backend, not just the prefiltered pipeline.

use crate::core::PuzzleConstraints;
use crate::dictionary::is_base_word;
use rustc_hash::FxHashSet;

/// The derived results for one puzzle instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultSet {
    /// All valid words, longest first, alphabetical within a length
    pub valid_words: Vec<String>,
    /// Words of length exactly 7 using every allowed letter once, alphabetical
    pub pangrams_7_exact: Vec<String>,
    /// Every word of maximal length
    pub longest_words: Vec<String>,
    /// Length of the longest valid word, 0 when none
    pub max_len: usize,
}

/// Derive the result set from accepted words
///
/// Input words are trimmed, lowercased, and re-checked against the base-word
/// shape and the letter constraints; anything failing is dropped silently.
/// Duplicates collapse. `valid_words` is ordered by descending length, then
/// ascending lexicographic; `pangrams_7_exact` ascending lexicographic.
///
/// # Examples
/// ```
/// use bee_solver::core::PuzzleConstraints;
/// use bee_solver::solver::solve;
///
/// let constraints = PuzzleConstraints::new("abcdefg", "a").unwrap();
/// let words = vec!["gfedcba".to_string(), "face".to_string()];
/// let results = solve(&constraints, &words);
///
/// assert_eq!(results.pangrams_7_exact, vec!["gfedcba".to_string()]);
/// assert_eq!(results.max_len, 7);
/// ```
#[must_use]
pub fn solve(constraints: &PuzzleConstraints, accepted: &[String]) -> ResultSet {
    let unique: FxHashSet<String> = accepted
        .iter()
        .map(|word| word.trim().to_lowercase())
        .filter(|word| is_base_word(word))
        .filter(|word| constraints.permits(word))
        .collect();

    let mut valid_words: Vec<String> = unique.into_iter().collect();
    valid_words.sort_unstable_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

    let mut pangrams_7_exact: Vec<String> = valid_words
        .iter()
        .filter(|word| constraints.is_exact_pangram(word))
        .cloned()
        .collect();
    pangrams_7_exact.sort_unstable();

    let max_len = valid_words.first().map_or(0, String::len);
    let longest_words: Vec<String> = valid_words
        .iter()
        .filter(|word| word.len() == max_len)
        .cloned()
        .collect();

    ResultSet {
        valid_words,
        pangrams_7_exact,
        longest_words,
        max_len,
    }
}
