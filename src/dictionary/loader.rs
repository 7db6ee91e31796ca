//! Base word loading from a Hunspell `.dic` file
//!
//! Handles the encoding fallback chain, the optional word-count header line,
//! flag stripping, and normalization into a deduplicated sorted word list.

use super::is_base_word;
use encoding_rs::Encoding;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Load base words from a Hunspell `.dic` file
///
/// The file is decoded with the first encoding in `encodings` that decodes it
/// cleanly; if none does, the last recognized encoding is applied lossily so
/// loading never fails on malformed bytes. A purely numeric first line (the
/// `.dic` word-count header) is skipped. Each entry keeps only the stem before
/// the `/` flag delimiter, lowercased; entries that are not pure a-z words are
/// dropped. The result is deduplicated and sorted.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use bee_solver::dictionary::load_base_words;
/// use std::path::Path;
///
/// let encodings = vec!["utf-8".to_string(), "latin1".to_string()];
/// let words = load_base_words(Path::new("/usr/share/hunspell/de_DE.dic"), &encodings).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_base_words(path: &Path, encodings: &[String]) -> io::Result<Vec<String>> {
    let bytes = fs::read(path)?;
    let text = decode_with_fallback(&bytes, encodings);
    Ok(normalize(&text))
}

/// Decode raw bytes with the first cleanly-matching encoding
///
/// Falls back to a lossy decode with the last recognized encoding (or UTF-8
/// when no label is recognized), substituting undecodable bytes. Unknown
/// encoding labels are skipped; labels follow the WHATWG registry, e.g.
/// `utf-8`, `latin1`, `cp1252`.
fn decode_with_fallback(bytes: &[u8], encodings: &[String]) -> String {
    let recognized: Vec<&'static Encoding> = encodings
        .iter()
        .filter_map(|label| Encoding::for_label(label.trim().as_bytes()))
        .collect();

    for encoding in &recognized {
        if let Some(text) = encoding.decode_without_bom_handling_and_without_replacement(bytes) {
            return text.into_owned();
        }
    }

    let fallback = recognized.last().copied().unwrap_or(encoding_rs::UTF_8);
    let (text, _, _) = fallback.decode(bytes);
    text.into_owned()
}

/// Normalize decoded dictionary text into a deduplicated sorted word list
fn normalize(text: &str) -> Vec<String> {
    let mut lines = text.lines().peekable();

    // a purely numeric first line is the .dic word-count header
    if let Some(first) = lines.peek() {
        let trimmed = first.trim();
        if !trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_digit()) {
            lines.next();
        }
    }

    let mut words: FxHashSet<String> = FxHashSet::default();
    for line in lines {
        let stem = line.split_once('/').map_or(line, |(stem, _flags)| stem);
        let word = stem.trim().to_lowercase();
        if is_base_word(&word) {
            words.insert(word);
        }
    }

    let mut sorted: Vec<String> = words.into_iter().collect();
    sorted.sort_unstable();
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn encodings(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|s| (*s).to_string()).collect()
    }

    fn write_dic(bytes: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(bytes).unwrap();
        file
    }

    #[test]
    fn load_skips_count_strips_flags_dedups_and_rejects_non_ascii() {
        // latin-1 bytes with an umlaut (ö = 0xF6), duplicates, and flags
        let file = write_dic(b"5\nentstellen/A\nentstellen/B\nstresstest\nr\xf6sten\nabc-def\n");

        let words = load_base_words(file.path(), &encodings(&["utf-8", "latin1"])).unwrap();

        assert_eq!(words, vec!["entstellen".to_string(), "stresstest".to_string()]);
    }

    #[test]
    fn load_keeps_non_numeric_first_line_as_data() {
        let file = write_dic(b"anfang\nende\n");
        let words = load_base_words(file.path(), &encodings(&["utf-8"])).unwrap();
        assert_eq!(words, vec!["anfang".to_string(), "ende".to_string()]);
    }

    #[test]
    fn load_lowercases_entries() {
        let file = write_dic(b"2\nALLERERSTE\nEnde\n");
        let words = load_base_words(file.path(), &encodings(&["utf-8"])).unwrap();
        assert_eq!(words, vec!["allererste".to_string(), "ende".to_string()]);
    }

    #[test]
    fn load_result_is_sorted() {
        let file = write_dic(b"zebra\napfel\nmitte\n");
        let words = load_base_words(file.path(), &encodings(&["utf-8"])).unwrap();
        assert_eq!(
            words,
            vec!["apfel".to_string(), "mitte".to_string(), "zebra".to_string()]
        );
    }

    #[test]
    fn load_missing_file_is_an_error() {
        let result = load_base_words(Path::new("/nonexistent/de_DE.dic"), &encodings(&["utf-8"]));
        assert!(result.is_err());
    }

    #[test]
    fn decode_falls_back_to_lossy_on_undecodable_input() {
        // 0xF6 is invalid UTF-8; with utf-8 as the only encoding the lossy
        // fallback substitutes it and normalization drops the damaged word.
        let words = normalize(&decode_with_fallback(
            b"r\xf6sten\nende\n",
            &encodings(&["utf-8"]),
        ));
        assert_eq!(words, vec!["ende".to_string()]);
    }

    #[test]
    fn decode_prefers_earlier_encoding() {
        // valid UTF-8 input must not be re-interpreted as latin-1
        let text = decode_with_fallback("grün\n".as_bytes(), &encodings(&["utf-8", "latin1"]));
        assert_eq!(text, "grün\n");
    }

    #[test]
    fn decode_skips_unrecognized_labels() {
        let text = decode_with_fallback(b"ende\n", &encodings(&["not-an-encoding", "utf-8"]));
        assert_eq!(text, "ende\n");
    }
}
