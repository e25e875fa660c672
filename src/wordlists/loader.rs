//! Word list loading utilities
//!
//! Reads word lists from files or embedded constants, keeping only entries
//! that can be played.

use std::fs;
use std::io;
use std::path::Path;

/// Length of every playable word
pub const WORD_LENGTH: usize = 5;

/// Normalize a raw list entry
///
/// Trims whitespace and upper-cases. Returns `None` unless the result is
/// exactly five ASCII letters.
///
/// # Examples
/// ```
/// use wordle_game::wordlists::loader::normalize;
///
/// assert_eq!(normalize(" crane "), Some("CRANE".to_string()));
/// assert_eq!(normalize("cran3"), None);
/// ```
#[must_use]
pub fn normalize(entry: &str) -> Option<String> {
    let word = entry.trim().to_ascii_uppercase();

    (word.len() == WORD_LENGTH && word.chars().all(|c| c.is_ascii_uppercase())).then_some(word)
}

/// Load words from a file, one per line
///
/// Invalid and blank lines are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;

    Ok(content.lines().filter_map(normalize).collect())
}

/// Convert an embedded string slice to owned words
///
/// # Examples
/// ```
/// use wordle_game::wordlists::loader::words_from_slice;
/// use wordle_game::wordlists::ANSWERS;
///
/// let words = words_from_slice(ANSWERS);
/// assert_eq!(words.len(), ANSWERS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().filter_map(|s| normalize(s)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn normalize_uppercases() {
        assert_eq!(normalize("crane"), Some("CRANE".to_string()));
        assert_eq!(normalize("CrAnE"), Some("CRANE".to_string()));
    }

    #[test]
    fn normalize_rejects_bad_entries() {
        assert_eq!(normalize(""), None);
        assert_eq!(normalize("shrt"), None);
        assert_eq!(normalize("toolong"), None);
        assert_eq!(normalize("cran!"), None);
        assert_eq!(normalize("cr ne"), None);
        assert_eq!(normalize("crâne"), None);
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["crane", "toolong", "abc", "slate"]);
        assert_eq!(words, ["CRANE", "SLATE"]);
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).is_empty());
    }

    #[test]
    fn load_from_file_filters_lines() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "apple\n  crane  \n\nab\nslate\n").unwrap();

        let words = load_from_file(file.path()).unwrap();

        assert_eq!(words, ["APPLE", "CRANE", "SLATE"]);
    }

    #[test]
    fn load_from_missing_file_errors() {
        assert!(load_from_file("does/not/exist.txt").is_err());
    }
}
