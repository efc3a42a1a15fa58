//! Lexical resources: sentiment dictionaries and stopword sets.
//!
//! Pure data, loaded once per analyzer construction and read-only thereafter,
//! so a single loaded set can be shared across worker threads.

use encoding_rs::Encoding;
use std::path::Path;

use crate::error::{AnalysisError, Result};

pub mod lexicon;
pub mod stopwords;

pub use lexicon::LexiconSet;
pub use stopwords::StopwordSet;

/// Resolve a configured encoding label.
///
/// Accepts the WHATWG labels plus the common Python-style spellings
/// ("latin-1", "latin_1") that historical config files use but the WHATWG
/// registry does not list.
fn resolve_encoding(label: &str) -> Option<&'static Encoding> {
    if let Some(encoding) = Encoding::for_label(label.as_bytes()) {
        return Some(encoding);
    }
    let normalized = label.trim().to_ascii_lowercase().replace('_', "-");
    let alias = match normalized.as_str() {
        "latin-1" => "latin1",
        other => other,
    };
    Encoding::for_label(alias.as_bytes())
}

/// Read a one-word-per-line resource file, trying each configured encoding in
/// order and keeping the first that decodes without error.
///
/// Decoding ignores byte-order marks: the configured label governs, so a file
/// starting with a UTF-16 BOM still fails under a utf-8-only configuration
/// instead of being silently sniffed as UTF-16. Words are trimmed and
/// lowercased; blank lines are dropped. An encoding label that names no known
/// encoding is an error rather than a silent skip.
pub(crate) fn read_words_file(path: &Path, encodings: &[String]) -> Result<Vec<String>> {
    let bytes = std::fs::read(path).map_err(|source| AnalysisError::ResourceAccess {
        path: path.to_path_buf(),
        source,
    })?;

    for label in encodings {
        let encoding = resolve_encoding(label)
            .ok_or_else(|| AnalysisError::UnknownEncoding(label.clone()))?;
        let (text, had_errors) = encoding.decode_without_bom_handling(&bytes);
        if had_errors {
            continue;
        }
        let words = text
            .lines()
            .map(|line| line.trim().to_lowercase())
            .filter(|line| !line.is_empty())
            .collect();
        return Ok(words);
    }

    Err(AnalysisError::ResourceDecode {
        path: path.to_path_buf(),
        encodings: encodings.to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn utf8_encodings() -> Vec<String> {
        vec!["utf-8".to_string()]
    }

    #[test]
    fn test_read_words_lowercases_and_trims() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "Good\n  GREAT  \n\nfine").unwrap();
        let words = read_words_file(file.path(), &utf8_encodings()).unwrap();
        assert_eq!(words, vec!["good", "great", "fine"]);
    }

    #[test]
    fn test_read_words_encoding_fallback() {
        // 0xE9 is 'é' in latin-1 but an invalid UTF-8 sequence
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"caf\xE9\nbon\n").unwrap();
        let encodings = vec!["utf-8".to_string(), "latin-1".to_string()];
        let words = read_words_file(file.path(), &encodings).unwrap();
        assert_eq!(words, vec!["café", "bon"]);
    }

    #[test]
    fn test_read_words_decode_failure_names_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"\xFF\xFEbroken").unwrap();
        let err = read_words_file(file.path(), &utf8_encodings()).unwrap_err();
        match err {
            AnalysisError::ResourceDecode { path, encodings } => {
                assert_eq!(path, file.path());
                assert_eq!(encodings, vec!["utf-8"]);
            }
            other => panic!("expected ResourceDecode, got {other:?}"),
        }
    }

    #[test]
    fn test_bom_does_not_override_configured_encoding() {
        // A UTF-16 BOM must not switch decoding away from the configured
        // label; under utf-8 alone these bytes are undecodable
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"\xFF\xFEgood\x00").unwrap();
        let err = read_words_file(file.path(), &utf8_encodings()).unwrap_err();
        assert!(matches!(err, AnalysisError::ResourceDecode { .. }));
    }

    #[test]
    fn test_python_style_encoding_aliases_resolve() {
        for label in ["latin-1", "latin_1", "LATIN-1", "latin1", "iso-8859-1", "utf-8"] {
            assert!(resolve_encoding(label).is_some(), "label {label} should resolve");
        }
        assert!(resolve_encoding("klingon-8").is_none());
    }

    #[test]
    fn test_read_words_unknown_encoding() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "word").unwrap();
        let err = read_words_file(file.path(), &["not-an-encoding".to_string()]).unwrap_err();
        assert!(matches!(err, AnalysisError::UnknownEncoding(label) if label == "not-an-encoding"));
    }

    #[test]
    fn test_read_words_missing_file() {
        let err = read_words_file(Path::new("no/such/dict.txt"), &utf8_encodings()).unwrap_err();
        assert!(matches!(err, AnalysisError::ResourceAccess { .. }));
    }
}
