//! Hunspell-backed oracle
//!
//! Spawns `hunspell -a` once per run, feeds the whole candidate batch through
//! stdin, and parses the pipe-mode output positionally.

use super::{Oracle, OracleError};
use rustc_hash::FxHashSet;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// Oracle backed by the external `hunspell` executable
///
/// Invokes `hunspell -a -d <dict_base> -i UTF-8` with `DICPATH` pointing at
/// the dictionary directory, so the named dictionary is found regardless of
/// the system search path.
#[derive(Debug, Clone)]
pub struct HunspellOracle {
    dict_base: String,
    dict_dir: PathBuf,
}

impl HunspellOracle {
    /// Create an oracle for the given dictionary name and directory
    #[must_use]
    pub fn new(dict_base: impl Into<String>, dict_dir: impl Into<PathBuf>) -> Self {
        Self {
            dict_base: dict_base.into(),
            dict_dir: dict_dir.into(),
        }
    }
}

impl Oracle for HunspellOracle {
    fn validate(&self, candidates: &[String]) -> Result<FxHashSet<String>, OracleError> {
        if candidates.is_empty() {
            return Ok(FxHashSet::default());
        }

        let mut child = Command::new("hunspell")
            .args(["-a", "-d", &self.dict_base, "-i", "UTF-8"])
            .env("DICPATH", &self.dict_dir)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(OracleError::Spawn)?;

        // one newline-delimited batch; dropping stdin signals EOF
        if let Some(mut stdin) = child.stdin.take() {
            let batch = candidates.join("\n") + "\n";
            stdin
                .write_all(batch.as_bytes())
                .map_err(OracleError::Pipe)?;
        }

        let output = child.wait_with_output().map_err(OracleError::Pipe)?;
        let stdout = String::from_utf8_lossy(&output.stdout);

        Ok(parse_pipe_output(candidates, &stdout))
    }
}

/// Parse `hunspell -a` pipe-mode output against the submitted batch
///
/// Blank lines and `@`-prefixed banner lines are skipped; the remaining
/// result lines correspond positionally to the input words. A `*` line marks
/// acceptance; every other form (`&` suggestions, `#` unknown, root hints)
/// is a rejection. When fewer result lines arrive than words were submitted,
/// only the matching prefix is evaluated and the rest count as rejected.
fn parse_pipe_output(candidates: &[String], stdout: &str) -> FxHashSet<String> {
    let results: Vec<&str> = stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('@'))
        .collect();

    let matched = candidates.len().min(results.len());

    candidates[..matched]
        .iter()
        .zip(&results)
        .filter(|(_, line)| line.starts_with('*'))
        .map(|(word, _)| word.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn parse_skips_banner_and_matches_positionally() {
        let candidates = batch(&["ernst", "xyzzy", "lanze"]);
        let stdout = "@(#) International Ispell Version 3.2.06\n*\n& xyzzy 2 0: xyz, fuzzy\n*\n";

        let accepted = parse_pipe_output(&candidates, stdout);

        assert_eq!(accepted.len(), 2);
        assert!(accepted.contains("ernst"));
        assert!(accepted.contains("lanze"));
        assert!(!accepted.contains("xyzzy"));
    }

    #[test]
    fn parse_treats_unknown_marker_as_rejection() {
        let candidates = batch(&["qqqqq"]);
        let accepted = parse_pipe_output(&candidates, "@ banner\n# qqqqq 0\n");
        assert!(accepted.is_empty());
    }

    #[test]
    fn parse_ignores_blank_lines_between_results() {
        let candidates = batch(&["ernst", "lanze"]);
        let accepted = parse_pipe_output(&candidates, "@ banner\n*\n\n*\n\n");
        assert_eq!(accepted.len(), 2);
    }

    #[test]
    fn parse_truncates_to_result_prefix_on_shortfall() {
        // three words submitted, output covers only the first two
        let candidates = batch(&["ernst", "lanze", "tarne"]);
        let accepted = parse_pipe_output(&candidates, "@ banner\n*\n*\n");

        assert_eq!(accepted.len(), 2);
        assert!(!accepted.contains("tarne"));
    }

    #[test]
    fn parse_empty_output_accepts_nothing() {
        let candidates = batch(&["ernst"]);
        assert!(parse_pipe_output(&candidates, "").is_empty());
    }

    #[test]
    fn validate_short_circuits_on_empty_batch() {
        // must not spawn anything, so this passes even without hunspell installed
        let oracle = HunspellOracle::new("de_DE", "/usr/share/hunspell");
        let accepted = oracle.validate(&[]).unwrap();
        assert!(accepted.is_empty());
    }
}
