//! External spelling oracle
//!
//! The oracle is the authoritative validator for prefiltered candidates. It
//! is a swappable capability behind the `Oracle` trait so an in-process
//! checker can stand in for the external process.

pub mod hunspell;

pub use hunspell::HunspellOracle;

use rustc_hash::FxHashSet;
use std::fmt;
use std::io;

/// A batch spelling validator
///
/// Implementations receive the full candidate list in one call and return the
/// subset of candidate strings they accept.
pub trait Oracle {
    /// Validate a batch of candidate words
    ///
    /// Returns the accepted subset as a set of the original strings.
    ///
    /// # Errors
    /// Returns `OracleError` if the backing validator cannot be reached.
    fn validate(&self, candidates: &[String]) -> Result<FxHashSet<String>, OracleError>;
}

/// Error type for oracle failures
#[derive(Debug)]
pub enum OracleError {
    /// The oracle process could not be launched
    Spawn(io::Error),
    /// Reading from or writing to the oracle process failed
    Pipe(io::Error),
}

impl fmt::Display for OracleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Spawn(err) => {
                write!(f, "failed to launch hunspell (is it installed?): {err}")
            }
            Self::Pipe(err) => write!(f, "hunspell I/O failed: {err}"),
        }
    }
}

impl std::error::Error for OracleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Spawn(err) | Self::Pipe(err) => Some(err),
        }
    }
}
