//! Run configuration
//!
//! Every environment-derived setting is assembled once at process start into
//! an explicit `Config` value; no component reads the process environment
//! directly.

use std::path::PathBuf;

/// Default directory searched for Hunspell dictionaries
pub const DEFAULT_DICT_DIR: &str = "/usr/share/hunspell";

/// Default dictionary name candidates, tried in order
pub const DEFAULT_DICT_CANDIDATES: &str = "de_DE_frami,de_DE_neu,de_DE";

/// Default encodings tried when decoding a `.dic` file (WHATWG labels)
pub const DEFAULT_ENCODINGS: &str = "utf-8,latin1,cp1252";

/// Default minimum acceptable word length
pub const DEFAULT_MIN_LEN: usize = 4;

/// Default number of valid words previewed in the report
pub const DEFAULT_TOP_WORDS: usize = 30;

/// The full configuration bundle for one run
#[derive(Debug, Clone)]
pub struct Config {
    pub dict_dir: PathBuf,
    pub dict_candidates: Vec<String>,
    pub encodings: Vec<String>,
    pub min_len: usize,
    pub reasonable_filter: bool,
    pub blacklist_path: Option<PathBuf>,
    pub top_words: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dict_dir: PathBuf::from(DEFAULT_DICT_DIR),
            dict_candidates: split_list(DEFAULT_DICT_CANDIDATES),
            encodings: split_list(DEFAULT_ENCODINGS),
            min_len: DEFAULT_MIN_LEN,
            reasonable_filter: true,
            blacklist_path: None,
            top_words: DEFAULT_TOP_WORDS,
        }
    }
}

/// Split a comma-delimited option into trimmed, non-empty items
#[must_use]
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Trim a list of option values and drop empty entries
#[must_use]
pub fn clean_list(items: &[String]) -> Vec<String> {
    items
        .iter()
        .map(|item| item.trim())
        .filter(|item| !item.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Parse a toggle value the way shell environments spell them
///
/// Accepts `1/true/yes/y/on` and `0/false/no/n/off`, case-insensitively.
///
/// # Errors
/// Returns a message naming the unrecognized value.
pub fn parse_toggle(value: &str) -> Result<bool, String> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "y" | "on" => Ok(true),
        "0" | "false" | "no" | "n" | "off" => Ok(false),
        other => Err(format!("not a boolean toggle: '{other}'")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_documented_values() {
        let config = Config::default();
        assert_eq!(config.dict_dir, PathBuf::from("/usr/share/hunspell"));
        assert_eq!(config.dict_candidates, vec!["de_DE_frami", "de_DE_neu", "de_DE"]);
        assert_eq!(config.encodings, vec!["utf-8", "latin1", "cp1252"]);
        assert_eq!(config.min_len, 4);
        assert!(config.reasonable_filter);
        assert!(config.blacklist_path.is_none());
        assert_eq!(config.top_words, 30);
    }

    #[test]
    fn split_list_trims_and_drops_empties() {
        assert_eq!(
            split_list(" de_DE_frami , de_DE ,,"),
            vec!["de_DE_frami".to_string(), "de_DE".to_string()]
        );
        assert!(split_list("").is_empty());
    }

    #[test]
    fn clean_list_trims_and_drops_empties() {
        let raw = vec![" utf-8 ".to_string(), String::new(), "latin1".to_string()];
        assert_eq!(clean_list(&raw), vec!["utf-8".to_string(), "latin1".to_string()]);
    }

    #[test]
    fn parse_toggle_accepts_shell_spellings() {
        for value in ["1", "true", "YES", "y", "On"] {
            assert_eq!(parse_toggle(value), Ok(true), "{value}");
        }
        for value in ["0", "false", "NO", "n", "Off"] {
            assert_eq!(parse_toggle(value), Ok(false), "{value}");
        }
    }

    #[test]
    fn parse_toggle_rejects_garbage() {
        assert!(parse_toggle("maybe").is_err());
        assert!(parse_toggle("").is_err());
    }
}
