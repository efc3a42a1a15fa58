//! Sentiment dictionaries: positive and negative word sets.

use std::collections::HashSet;
use std::path::Path;
use tracing::info;

use super::read_words_file;
use crate::config::AnalysisConfig;
use crate::error::Result;

/// Positive and negative sentiment word sets, lowercase.
///
/// The two sets may overlap if the source dictionaries do; no exclusivity is
/// enforced and an overlapping word scores on both sides.
#[derive(Debug, Clone)]
pub struct LexiconSet {
    positive: HashSet<String>,
    negative: HashSet<String>,
}

impl LexiconSet {
    /// Build a lexicon from in-memory word sets (used by tests and embedders)
    pub fn new(positive: HashSet<String>, negative: HashSet<String>) -> Self {
        Self { positive, negative }
    }

    /// Load both dictionaries from the configured paths
    pub fn from_config(config: &AnalysisConfig) -> Result<Self> {
        let lexicon = Self::from_files(
            &config.positive_dictionary_path,
            &config.negative_dictionary_path,
            &config.encodings,
        )?;
        info!(
            "Loaded sentiment lexicons: {} positive, {} negative words",
            lexicon.positive.len(),
            lexicon.negative.len()
        );
        Ok(lexicon)
    }

    /// Load both dictionaries from explicit paths with encoding fallback
    pub fn from_files(
        positive_path: &Path,
        negative_path: &Path,
        encodings: &[String],
    ) -> Result<Self> {
        let positive = read_words_file(positive_path, encodings)?.into_iter().collect();
        let negative = read_words_file(negative_path, encodings)?.into_iter().collect();
        Ok(Self { positive, negative })
    }

    pub fn is_positive(&self, word: &str) -> bool {
        self.positive.contains(word)
    }

    pub fn is_negative(&self, word: &str) -> bool {
        self.negative.contains(word)
    }

    pub fn positive_len(&self) -> usize {
        self.positive.len()
    }

    pub fn negative_len(&self) -> usize {
        self.negative.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_dict(dir: &TempDir, name: &str, words: &[&str]) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        for word in words {
            writeln!(file, "{word}").unwrap();
        }
        path
    }

    #[test]
    fn test_load_lexicons_from_files() {
        let dir = TempDir::new().unwrap();
        let pos = write_dict(&dir, "positive.txt", &["good", "GREAT"]);
        let neg = write_dict(&dir, "negative.txt", &["bad"]);

        let lexicon = LexiconSet::from_files(&pos, &neg, &["utf-8".to_string()]).unwrap();
        assert!(lexicon.is_positive("good"));
        assert!(lexicon.is_positive("great")); // lowercased on load
        assert!(lexicon.is_negative("bad"));
        assert!(!lexicon.is_negative("good"));
        assert_eq!(lexicon.positive_len(), 2);
        assert_eq!(lexicon.negative_len(), 1);
    }

    #[test]
    fn test_overlapping_word_is_in_both_sets() {
        let dir = TempDir::new().unwrap();
        let pos = write_dict(&dir, "positive.txt", &["sharp"]);
        let neg = write_dict(&dir, "negative.txt", &["sharp"]);

        let lexicon = LexiconSet::from_files(&pos, &neg, &["utf-8".to_string()]).unwrap();
        assert!(lexicon.is_positive("sharp"));
        assert!(lexicon.is_negative("sharp"));
    }
}
