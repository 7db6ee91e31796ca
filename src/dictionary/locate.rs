//! Dictionary file resolution
//!
//! Resolves a usable `.dic`/`.aff` pair from a directory and an ordered list
//! of dictionary name candidates. The first candidate with both files wins.

use std::fmt;
use std::path::{Path, PathBuf};

/// A resolved Hunspell dictionary pair
///
/// `dict_base` is the bare name passed to `hunspell -d`, without the `.dic`
/// extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryFiles {
    pub dic_path: PathBuf,
    pub aff_path: PathBuf,
    pub dict_base: String,
}

/// Error type for failed dictionary resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocateError {
    dir: PathBuf,
    candidates: usize,
}

impl fmt::Display for LocateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "no Hunspell dictionary found in {} ({} candidate name(s) checked); \
             check HUNSPELL_DIR / HUNSPELL_DICT_CANDIDATES",
            self.dir.display(),
            self.candidates
        )
    }
}

impl std::error::Error for LocateError {}

/// Resolve the first existing `.dic`/`.aff` pair among the candidate names
///
/// Candidate names may carry an explicit `.dic` extension; otherwise one is
/// appended. The `.aff` path is derived by swapping the extension.
///
/// # Errors
/// Returns `LocateError` when no candidate has both files present.
pub fn resolve_dictionary(
    dir: &Path,
    candidates: &[String],
) -> Result<DictionaryFiles, LocateError> {
    for base in candidates {
        let (dic_path, dict_base) = if let Some(stem) = base.strip_suffix(".dic") {
            (dir.join(base), stem.to_string())
        } else {
            (dir.join(format!("{base}.dic")), base.clone())
        };

        let aff_path = dic_path.with_extension("aff");
        if dic_path.exists() && aff_path.exists() {
            return Ok(DictionaryFiles {
                dic_path,
                aff_path,
                dict_base,
            });
        }
    }

    Err(LocateError {
        dir: dir.to_path_buf(),
        candidates: candidates.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(path: &Path) {
        fs::write(path, b"").unwrap();
    }

    #[test]
    fn resolve_picks_first_existing_pair() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("de_DE.dic"));
        touch(&dir.path().join("de_DE.aff"));

        let candidates = vec!["de_DE_frami".to_string(), "de_DE".to_string()];
        let files = resolve_dictionary(dir.path(), &candidates).unwrap();

        assert_eq!(files.dict_base, "de_DE");
        assert_eq!(files.dic_path, dir.path().join("de_DE.dic"));
        assert_eq!(files.aff_path, dir.path().join("de_DE.aff"));
    }

    #[test]
    fn resolve_accepts_explicit_dic_extension() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("de_DE_frami.dic"));
        touch(&dir.path().join("de_DE_frami.aff"));

        let candidates = vec!["de_DE_frami.dic".to_string()];
        let files = resolve_dictionary(dir.path(), &candidates).unwrap();

        assert_eq!(files.dict_base, "de_DE_frami");
    }

    #[test]
    fn resolve_requires_both_files() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("de_DE.dic")); // no .aff

        let candidates = vec!["de_DE".to_string()];
        assert!(resolve_dictionary(dir.path(), &candidates).is_err());
    }

    #[test]
    fn resolve_reports_directory_in_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = resolve_dictionary(dir.path(), &["missing".to_string()]).unwrap_err();
        assert!(err.to_string().contains("no Hunspell dictionary found"));
    }
}
