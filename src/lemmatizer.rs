//! Dictionary-free lemmatization.
//!
//! Reduces tokens to a base form using an irregular-noun exception table plus
//! ordered suffix rules, in the style of WordNet's noun morphy. Verbal
//! inflections are left alone, matching a noun-defaulting lemmatizer. Built
//! once by the caller and shared read-only across sentences.

use std::collections::HashMap;

/// Irregular plural forms that no suffix rule recovers
const IRREGULAR_NOUNS: &[(&str, &str)] = &[
    ("men", "man"),
    ("women", "woman"),
    ("children", "child"),
    ("people", "person"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("geese", "goose"),
    ("mice", "mouse"),
    ("lice", "louse"),
    ("oxen", "ox"),
    ("knives", "knife"),
    ("wives", "wife"),
    ("lives", "life"),
    ("halves", "half"),
    ("leaves", "leaf"),
    ("loaves", "loaf"),
    ("selves", "self"),
    ("shelves", "shelf"),
    ("thieves", "thief"),
];

/// Suffix substitution rules, most specific first. A rule applies only when
/// the remaining stem is at least two characters.
const SUFFIX_RULES: &[(&str, &str)] = &[
    ("ches", "ch"),
    ("shes", "sh"),
    ("sses", "ss"),
    ("ies", "y"),
    ("xes", "x"),
    ("zes", "z"),
    ("ves", "f"),
    ("ses", "s"),
];

#[derive(Debug, Clone)]
pub struct Lemmatizer {
    exceptions: HashMap<&'static str, &'static str>,
}

impl Lemmatizer {
    pub fn new() -> Self {
        Self {
            exceptions: IRREGULAR_NOUNS.iter().copied().collect(),
        }
    }

    /// Lemmatize one lowercase token. Unknown forms pass through unchanged.
    pub fn lemmatize(&self, word: &str) -> String {
        if let Some(base) = self.exceptions.get(word) {
            return (*base).to_string();
        }

        for (suffix, replacement) in SUFFIX_RULES {
            if let Some(stem) = word.strip_suffix(suffix) {
                if stem.len() >= 2 {
                    return format!("{stem}{replacement}");
                }
            }
        }

        // Plain plural -s, guarded so "class", "bus", "analysis" survive
        if word.len() >= 4
            && word.ends_with('s')
            && !word.ends_with("ss")
            && !word.ends_with("us")
            && !word.ends_with("is")
        {
            return word[..word.len() - 1].to_string();
        }

        word.to_string()
    }
}

impl Default for Lemmatizer {
    fn default() -> Self {
        Self::new()
    }
}
