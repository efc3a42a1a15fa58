//! Document-level metric aggregation.
//!
//! Sentence counters accumulate into a `MetricsAccumulator`, finalized once
//! per document into an immutable `MetricsRecord`. The record's serialized
//! key names are fixed for compatibility with the historical output format,
//! including the average sentence length duplicated under two keys.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::AnalysisConfig;
use crate::error::Result;
use crate::lemmatizer::Lemmatizer;
use crate::lexical::{LexiconSet, StopwordSet};
use crate::pos_tagger::PosTagger;
use crate::preprocess::{PreprocessedSentence, Preprocessor};
use crate::sentence_splitter::SentenceSplitter;
use crate::sentiment::sentiment_scores;
use crate::syllables;

/// Guard against zero-sum sentiment denominators, matching the historical
/// formula constants exactly.
const EPSILON: f64 = 1e-6;

/// Final per-document metrics. Produced once; never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsRecord {
    #[serde(rename = "POSITIVE SCORE")]
    pub positive_score: i64,
    #[serde(rename = "NEGATIVE SCORE")]
    pub negative_score: i64,
    #[serde(rename = "POLARITY SCORE")]
    pub polarity_score: f64,
    #[serde(rename = "SUBJECTIVITY SCORE")]
    pub subjectivity_score: f64,
    #[serde(rename = "AVG SENTENCE LENGTH")]
    pub avg_sentence_length: f64,
    #[serde(rename = "PERCENTAGE OF COMPLEX WORDS")]
    pub percentage_complex_words: f64,
    #[serde(rename = "FOG INDEX")]
    pub fog_index: f64,
    #[serde(rename = "AVG NUMBER OF WORDS PER SENTENCE")]
    pub avg_words_per_sentence: f64,
    #[serde(rename = "COMPLEX WORD COUNT")]
    pub complex_word_count: u64,
    #[serde(rename = "WORD COUNT")]
    pub word_count: u64,
    #[serde(rename = "SYLLABLE PER WORD")]
    pub syllable_per_word: f64,
    #[serde(rename = "PERSONAL PRONOUNS")]
    pub personal_pronouns: i64,
    #[serde(rename = "AVG WORD LENGTH")]
    pub avg_word_length: f64,
}

impl MetricsRecord {
    /// Sentinel record for degenerate input (no sentences at all)
    pub fn zeroed() -> Self {
        Self {
            positive_score: 0,
            negative_score: 0,
            polarity_score: 0.0,
            subjectivity_score: 0.0,
            avg_sentence_length: 0.0,
            percentage_complex_words: 0.0,
            fog_index: 0.0,
            avg_words_per_sentence: 0.0,
            complex_word_count: 0,
            word_count: 0,
            syllable_per_word: 0.0,
            personal_pronouns: 0,
            avg_word_length: 0.0,
        }
    }
}

/// Running totals for one document, mutated sentence by sentence
#[derive(Debug, Default)]
pub struct MetricsAccumulator {
    total_words: u64,
    total_complex_words: u64,
    total_syllables: u64,
    char_count: u64,
    personal_pronouns: i64,
    positive_score: i64,
    negative_score: i64,
    sentence_count: u64,
}

impl MetricsAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one preprocessed sentence and its sentiment scores into the
    /// totals. `neg` arrives already negated from the scorer; subtracting it
    /// stores the non-negative hit count.
    pub fn record_sentence(&mut self, sentence: &PreprocessedSentence, pos: i64, neg: i64) {
        self.sentence_count += 1;
        self.total_words += sentence.tokens.len() as u64;
        self.personal_pronouns += sentence.pronoun_count;
        self.positive_score += pos;
        self.negative_score -= neg;

        for token in &sentence.tokens {
            self.char_count += token.chars().count() as u64;
            let syllable_count = syllables::estimate(token);
            self.total_syllables += syllable_count;
            if syllable_count >= 2 {
                self.total_complex_words += 1;
            }
        }
    }

    /// Derive the final record. Ratios with a zero denominator are reported
    /// as 0.0; polarity and subjectivity always use the epsilon formulas.
    pub fn finalize(self) -> MetricsRecord {
        let avg_sentence_length = ratio(self.total_words as f64, self.sentence_count as f64);
        let percentage_complex_words =
            100.0 * ratio(self.total_complex_words as f64, self.total_words as f64);
        let fog_index = 0.4 * (avg_sentence_length + percentage_complex_words);

        let pos = self.positive_score as f64;
        let neg = self.negative_score as f64;
        let polarity_score = (pos - neg) / (pos + neg + EPSILON);
        let subjectivity_score = (pos + neg) / (self.total_words as f64 + EPSILON);

        MetricsRecord {
            positive_score: self.positive_score,
            negative_score: self.negative_score,
            polarity_score,
            subjectivity_score,
            avg_sentence_length,
            percentage_complex_words,
            fog_index,
            avg_words_per_sentence: avg_sentence_length,
            complex_word_count: self.total_complex_words,
            word_count: self.total_words,
            syllable_per_word: ratio(self.total_syllables as f64, self.total_words as f64),
            personal_pronouns: self.personal_pronouns,
            avg_word_length: ratio(self.char_count as f64, self.total_words as f64),
        }
    }
}

fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// All resources one computation needs, loaded eagerly and shared read-only.
///
/// Construct once per configuration; `analyze` holds no mutable state across
/// documents, so one analyzer can serve documents on parallel worker threads,
/// each with its own accumulator.
pub struct TextAnalyzer {
    lexicon: LexiconSet,
    stopwords: StopwordSet,
    lemmatizer: Lemmatizer,
    tagger: PosTagger,
    splitter: SentenceSplitter,
}

impl TextAnalyzer {
    /// Load all lexical resources named by the configuration
    pub fn from_config(config: &AnalysisConfig) -> Result<Self> {
        let lexicon = LexiconSet::from_config(config)?;
        let stopwords = StopwordSet::from_config(config)?;
        Ok(Self::new(lexicon, stopwords))
    }

    /// Build an analyzer from already-loaded lexical resources
    pub fn new(lexicon: LexiconSet, stopwords: StopwordSet) -> Self {
        Self {
            lexicon,
            stopwords,
            lemmatizer: Lemmatizer::new(),
            tagger: PosTagger::new(),
            splitter: SentenceSplitter::new(),
        }
    }

    /// Compute the full metrics record for one document
    pub fn analyze(&self, text: &str) -> MetricsRecord {
        let sentences = self.splitter.split(text);
        if sentences.is_empty() {
            info!("Document yielded no sentences; returning sentinel record");
            return MetricsRecord::zeroed();
        }

        let preprocessor = Preprocessor::new(&self.stopwords, &self.lemmatizer, &self.tagger);
        let mut accumulator = MetricsAccumulator::new();

        for sentence in &sentences {
            let preprocessed = preprocessor.preprocess(sentence);
            let (pos, neg) = sentiment_scores(&preprocessed.tokens, &self.lexicon);
            debug!(
                tokens = preprocessed.tokens.len(),
                pos, neg, "Sentence accumulated"
            );
            accumulator.record_sentence(&preprocessed, pos, neg);
        }

        let record = accumulator.finalize();
        info!(
            sentences = sentences.len(),
            words = record.word_count,
            fog_index = record.fog_index,
            "Document analysis complete"
        );
        record
    }
}
