//! Stopword sets: a standard English list plus optional custom folders.

use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info};
use walkdir::WalkDir;

use super::read_words_file;
use crate::config::AnalysisConfig;
use crate::error::{AnalysisError, Result};

/// Standard English stopword list (the usual 179-word set).
/// Contraction fragments are inert after punctuation stripping but are kept so
/// the list stays a faithful superset of what callers expect.
const STANDARD_ENGLISH: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan", "shan't",
    "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't", "wouldn",
    "wouldn't",
];

/// Union of the standard English stopword list and any custom lists.
/// Read-only after construction.
#[derive(Debug, Clone)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// Standard English stopwords only
    pub fn standard() -> Self {
        Self {
            words: STANDARD_ENGLISH.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Standard stopwords unioned with every file under the configured folder
    pub fn from_config(config: &AnalysisConfig) -> Result<Self> {
        let mut set = Self::standard();
        if let Some(folder) = &config.custom_stopword_folder {
            set.extend_from_folder(folder, &config.encodings)?;
        }
        info!("Stopword set ready: {} words", set.words.len());
        Ok(set)
    }

    /// Union in every regular file under `folder`, one stopword per line.
    ///
    /// Enumeration is sorted by file name so the resulting set (and any error
    /// surfaced) is deterministic across runs.
    pub fn extend_from_folder(&mut self, folder: &Path, encodings: &[String]) -> Result<()> {
        let walker = WalkDir::new(folder)
            .max_depth(1)
            .sort_by_file_name();

        for entry in walker {
            let entry = entry.map_err(|e| {
                let path = e
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| folder.to_path_buf());
                let source = e
                    .into_io_error()
                    .unwrap_or_else(|| std::io::Error::other("walk error"));
                AnalysisError::ResourceAccess { path, source }
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            let words = read_words_file(entry.path(), encodings)?;
            debug!(
                "Custom stopword file {}: {} words",
                entry.path().display(),
                words.len()
            );
            self.words.extend(words);
        }
        Ok(())
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
