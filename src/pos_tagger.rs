//! Coarse part-of-speech tagging.
//!
//! Advisory output only: tags ride along in the per-sentence result but feed
//! no downstream metric. Closed-class lookups first, then suffix heuristics,
//! then a noun fallback. The tagger re-splits the joined lemmatized sequence
//! on whitespace, so its token boundaries always match its input sequence.

use phf::phf_set;

/// Coarse part-of-speech label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PosTag {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Pronoun,
    Determiner,
    Adposition,
    Conjunction,
    Numeral,
}

static PRONOUN_WORDS: phf::Set<&'static str> = phf_set! {
    "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us",
    "them", "mine", "yours", "hers", "ours", "theirs", "myself", "yourself",
    "himself", "herself", "itself", "ourselves", "themselves", "who", "whom",
    "whose", "something", "anything", "nothing", "everything", "someone",
    "anyone", "everyone",
};

static DETERMINER_WORDS: phf::Set<&'static str> = phf_set! {
    "a", "an", "the", "this", "that", "these", "those", "my", "your", "his",
    "its", "our", "their", "each", "every", "either", "neither", "some",
    "any", "no", "both", "all",
};

static ADPOSITION_WORDS: phf::Set<&'static str> = phf_set! {
    "in", "on", "at", "by", "for", "with", "about", "against", "between",
    "into", "through", "during", "before", "after", "above", "below", "to",
    "from", "up", "down", "of", "off", "over", "under", "near", "without",
};

static CONJUNCTION_WORDS: phf::Set<&'static str> = phf_set! {
    "and", "or", "but", "nor", "yet", "so", "because", "although", "while",
    "if", "unless", "since", "whereas",
};

static ADVERB_EXCEPTIONS: phf::Set<&'static str> = phf_set! {
    "family", "assembly", "supply", "italy", "july", "reply",
};

#[derive(Debug, Clone, Default)]
pub struct PosTagger;

impl PosTagger {
    pub fn new() -> Self {
        Self
    }

    /// Tag a whitespace-joined token sequence, one `(token, tag)` per token
    pub fn tag(&self, joined: &str) -> Vec<(String, PosTag)> {
        joined
            .split_whitespace()
            .map(|token| (token.to_string(), self.tag_word(token)))
            .collect()
    }

    fn tag_word(&self, word: &str) -> PosTag {
        if word.chars().all(|c| c.is_ascii_digit()) {
            return PosTag::Numeral;
        }
        if PRONOUN_WORDS.contains(word) {
            return PosTag::Pronoun;
        }
        if DETERMINER_WORDS.contains(word) {
            return PosTag::Determiner;
        }
        if ADPOSITION_WORDS.contains(word) {
            return PosTag::Adposition;
        }
        if CONJUNCTION_WORDS.contains(word) {
            return PosTag::Conjunction;
        }
        if word.len() > 3 && word.ends_with("ly") && !ADVERB_EXCEPTIONS.contains(word) {
            return PosTag::Adverb;
        }
        if word.len() > 4 && (word.ends_with("ing") || word.ends_with("ed")) {
            return PosTag::Verb;
        }
        if word.len() > 4
            && ["ous", "ful", "ive", "able", "ible", "ical", "ish"]
                .iter()
                .any(|suffix| word.ends_with(suffix))
        {
            return PosTag::Adjective;
        }
        PosTag::Noun
    }
}
