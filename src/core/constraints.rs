//! Puzzle constraint representation
//!
//! A `PuzzleConstraints` holds the 7 distinct allowed letters and the single
//! mandatory letter every valid word must contain. Construction validates the
//! invariants, so a value of this type is always well-formed.

use std::fmt;

/// Validated puzzle constraints: 7 distinct allowed letters, 1 mandatory letter
///
/// Letters are normalized (trimmed, lowercased) on construction and stored as
/// bytes for cheap membership checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleConstraints {
    text: String,
    letters: [u8; 7],
    sorted: [u8; 7],
    mandatory: u8,
}

/// Error type for malformed puzzle constraints
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstraintError {
    AllowedLength(usize),
    AllowedNotDistinct,
    AllowedNonAlphabetic,
    MandatoryLength(usize),
    MandatoryNonAlphabetic,
    MandatoryNotAllowed(char),
}

impl fmt::Display for ConstraintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllowedLength(len) => {
                write!(f, "allowed letters must be exactly 7, got {len}")
            }
            Self::AllowedNotDistinct => write!(f, "allowed letters must all be distinct"),
            Self::AllowedNonAlphabetic => {
                write!(f, "allowed letters must contain only a-z letters")
            }
            Self::MandatoryLength(len) => {
                write!(f, "mandatory letter must be exactly one letter, got {len}")
            }
            Self::MandatoryNonAlphabetic => write!(f, "mandatory letter must be an a-z letter"),
            Self::MandatoryNotAllowed(letter) => {
                write!(f, "mandatory letter '{letter}' is not among the allowed letters")
            }
        }
    }
}

impl std::error::Error for ConstraintError {}

impl PuzzleConstraints {
    /// Create validated constraints from raw letter strings
    ///
    /// Both inputs are trimmed and lowercased before validation.
    ///
    /// # Errors
    /// Returns `ConstraintError` if:
    /// - `allowed` is not exactly 7 distinct a-z letters
    /// - `mandatory` is not exactly one a-z letter
    /// - the mandatory letter is not a member of `allowed`
    ///
    /// # Examples
    /// ```
    /// use bee_solver::core::PuzzleConstraints;
    ///
    /// let constraints = PuzzleConstraints::new("aelnrst", "e").unwrap();
    /// assert_eq!(constraints.letters(), "aelnrst");
    ///
    /// assert!(PuzzleConstraints::new("abc", "a").is_err());
    /// assert!(PuzzleConstraints::new("abcdefg", "z").is_err());
    /// ```
    ///
    /// # Panics
    /// Will not panic - the `expect()` call is guaranteed safe by length validation.
    pub fn new(allowed: &str, mandatory: &str) -> Result<Self, ConstraintError> {
        let allowed = allowed.trim().to_lowercase();
        let mandatory = mandatory.trim().to_lowercase();

        if allowed.len() != 7 {
            return Err(ConstraintError::AllowedLength(allowed.len()));
        }
        if !allowed.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(ConstraintError::AllowedNonAlphabetic);
        }

        let letters: [u8; 7] = allowed
            .as_bytes()
            .try_into()
            .expect("length already validated");

        let mut sorted = letters;
        sorted.sort_unstable();
        if sorted.windows(2).any(|pair| pair[0] == pair[1]) {
            return Err(ConstraintError::AllowedNotDistinct);
        }

        if mandatory.len() != 1 {
            return Err(ConstraintError::MandatoryLength(mandatory.len()));
        }
        let mandatory = mandatory.as_bytes()[0];
        if !mandatory.is_ascii_lowercase() {
            return Err(ConstraintError::MandatoryNonAlphabetic);
        }
        if !letters.contains(&mandatory) {
            return Err(ConstraintError::MandatoryNotAllowed(char::from(mandatory)));
        }

        Ok(Self {
            text: allowed,
            letters,
            sorted,
            mandatory,
        })
    }

    /// The allowed letters in their original order
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &str {
        &self.text
    }

    /// The mandatory letter as a byte
    #[inline]
    #[must_use]
    pub const fn mandatory(&self) -> u8 {
        self.mandatory
    }

    /// Check if a single letter is a member of the allowed set
    #[inline]
    #[must_use]
    pub fn allows(&self, letter: u8) -> bool {
        self.letters.contains(&letter)
    }

    /// Check if a word satisfies the letter constraints
    ///
    /// The word must contain the mandatory letter at least once, and every
    /// letter must be a member of the allowed set. Letters may repeat freely;
    /// membership is per letter, not per count.
    #[must_use]
    pub fn permits(&self, word: &str) -> bool {
        let bytes = word.as_bytes();
        bytes.contains(&self.mandatory) && bytes.iter().all(|b| self.letters.contains(b))
    }

    /// Check if a word is an exact pangram
    ///
    /// True when the word is exactly 7 letters long and its letter multiset
    /// equals the allowed set, i.e. a permutation of the 7 distinct letters.
    #[must_use]
    pub fn is_exact_pangram(&self, word: &str) -> bool {
        let Ok(mut bytes) = <[u8; 7]>::try_from(word.as_bytes()) else {
            return false;
        };
        bytes.sort_unstable();
        bytes == self.sorted
    }
}

impl fmt::Display for PuzzleConstraints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (mandatory: {})", self.text, char::from(self.mandatory))
    }
}
