//! Sentence preprocessing: cleaning, tokenization, pronoun counting,
//! stopword removal, lemmatization, and advisory POS tagging.

use phf::phf_set;
use tracing::trace;

use crate::lemmatizer::Lemmatizer;
use crate::lexical::StopwordSet;
use crate::pos_tagger::{PosTag, PosTagger};

/// Personal pronouns counted before stopword removal.
/// Matched against lowercased tokens.
static PERSONAL_PRONOUNS: phf::Set<&'static str> = phf_set! {
    "i", "you", "he", "she", "it", "we", "they", "them", "us", "him", "her",
    "his", "hers", "its", "theirs", "our", "your",
};

/// Result of preprocessing one sentence
#[derive(Debug, Clone)]
pub struct PreprocessedSentence {
    /// Surviving lemmatized tokens, in order
    pub tokens: Vec<String>,
    /// Advisory POS tags, parallel to `tokens`
    pub pos_tags: Vec<(String, PosTag)>,
    /// Pronoun count after the "US" correction; may be negative, unclamped
    pub pronoun_count: i64,
}

/// Drives the per-sentence preprocessing steps over caller-owned resources.
/// Holds only borrows, so one set of loaded resources serves many sentences.
pub struct Preprocessor<'a> {
    stopwords: &'a StopwordSet,
    lemmatizer: &'a Lemmatizer,
    tagger: &'a PosTagger,
}

impl<'a> Preprocessor<'a> {
    pub fn new(
        stopwords: &'a StopwordSet,
        lemmatizer: &'a Lemmatizer,
        tagger: &'a PosTagger,
    ) -> Self {
        Self {
            stopwords,
            lemmatizer,
            tagger,
        }
    }

    /// Preprocess one sentence into surviving tokens, tags, and a signed
    /// pronoun count.
    pub fn preprocess(&self, sentence: &str) -> PreprocessedSentence {
        // Literal "US" occurrences, counted before lowercasing, correct for
        // the pronoun/acronym collision once "US" has become "us".
        let us_count = sentence.matches("US").count() as i64;

        let cleaned: String = sentence
            .to_lowercase()
            .chars()
            .filter(|c| c.is_alphanumeric() || c.is_whitespace())
            .collect();

        let words: Vec<&str> = cleaned.split_whitespace().collect();

        let raw_pronouns = words
            .iter()
            .filter(|w| PERSONAL_PRONOUNS.contains(**w))
            .count() as i64;

        let tokens: Vec<String> = words
            .iter()
            .filter(|w| !self.stopwords.contains(w))
            .map(|w| self.lemmatizer.lemmatize(w))
            .collect();

        // The tagger re-splits the joined lemmatized sequence, per contract
        let pos_tags = self.tagger.tag(&tokens.join(" "));

        trace!(
            tokens = tokens.len(),
            pronouns = raw_pronouns - us_count,
            "Preprocessed sentence"
        );

        PreprocessedSentence {
            tokens,
            pos_tags,
            pronoun_count: raw_pronouns - us_count,
        }
    }
}
