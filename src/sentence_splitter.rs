//! Rule-based sentence boundary detection.
//!
//! Splits on `.`, `?`, `!` with the usual guards: known abbreviations,
//! single-letter initials, and decimal points do not terminate a sentence,
//! and trailing closing quotes or brackets stay attached to the finished
//! sentence. Borrowed slices of the source text are returned, so splitting
//! allocates nothing beyond the output vector.

use std::collections::HashSet;

/// Abbreviations whose trailing period never ends a sentence.
/// Matched case-insensitively against the whole word including its periods.
const ABBREVIATIONS: &[&str] = &[
    "mr.", "mrs.", "ms.", "dr.", "prof.", "sr.", "jr.", "st.", "mt.",
    "vs.", "etc.", "e.g.", "i.e.", "cf.", "al.", "a.m.", "p.m.",
    "inc.", "ltd.", "co.", "no.", "fig.", "approx.",
    "u.s.", "u.k.", "u.s.a.", "d.c.",
];

#[derive(Debug, Clone)]
pub struct SentenceSplitter {
    abbreviations: HashSet<&'static str>,
}

impl SentenceSplitter {
    pub fn new() -> Self {
        Self {
            abbreviations: ABBREVIATIONS.iter().copied().collect(),
        }
    }

    /// Split text into trimmed sentence slices. Empty input yields no
    /// sentences; a tail without terminal punctuation still counts as one.
    pub fn split<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let chars: Vec<(usize, char)> = text.char_indices().collect();
        let mut sentences = Vec::new();
        let mut start = 0usize;
        let mut i = 0usize;

        while i < chars.len() {
            let ch = chars[i].1;
            if !matches!(ch, '.' | '?' | '!') {
                i += 1;
                continue;
            }

            // Consume the full terminal run ("...", "?!") and note whether it
            // contains a hard terminator; bare periods need further checks.
            let mut j = i;
            let mut hard = ch != '.';
            while j + 1 < chars.len() && matches!(chars[j + 1].1, '.' | '?' | '!') {
                j += 1;
                if chars[j].1 != '.' {
                    hard = true;
                }
            }
            while j + 1 < chars.len() && is_closing(chars[j + 1].1) {
                j += 1;
            }
            let end_byte = chars[j].0 + chars[j].1.len_utf8();

            let boundary = hard
                || self.period_ends_sentence(text, &chars, start, chars[i].0, j + 1);

            if boundary {
                let sentence = text[start..end_byte].trim();
                if !sentence.is_empty() {
                    sentences.push(sentence);
                }
                start = end_byte;
            }
            i = j + 1;
        }

        let tail = text[start..].trim();
        if !tail.is_empty() {
            sentences.push(tail);
        }
        sentences
    }

    /// Decide whether a bare period at `dot_byte` terminates the sentence.
    /// `after` indexes the first char past the punctuation run and any
    /// attached closing quotes.
    fn period_ends_sentence(
        &self,
        text: &str,
        chars: &[(usize, char)],
        start: usize,
        dot_byte: usize,
        after: usize,
    ) -> bool {
        // No whitespace after the period means a decimal, an internal
        // abbreviation period, or a bare token like "3.14" or "v1.2".
        match chars.get(after) {
            None => {}
            Some(&(_, next)) if !next.is_whitespace() => return false,
            _ => {
                let upcoming = chars[after..].iter().find(|(_, c)| !c.is_whitespace());
                match upcoming {
                    None => {}
                    // A lowercase continuation never starts a new sentence
                    Some(&(_, c)) if c.is_lowercase() => return false,
                    _ => {}
                }
            }
        }

        let last_word = text[start..=dot_byte]
            .split_whitespace()
            .last()
            .map(|w| w.trim_start_matches(is_opening))
            .unwrap_or("");

        if self.abbreviations.contains(last_word.to_lowercase().as_str()) {
            return false;
        }
        if is_initial(last_word) {
            return false;
        }
        true
    }
}

impl Default for SentenceSplitter {
    fn default() -> Self {
        Self::new()
    }
}

/// Single capital letter followed by a period, as in "J. Smith"
fn is_initial(word: &str) -> bool {
    let mut chars = word.chars();
    matches!(
        (chars.next(), chars.next(), chars.next()),
        (Some(first), Some('.'), None) if first.is_uppercase()
    )
}

fn is_closing(ch: char) -> bool {
    matches!(ch, '"' | '\'' | '\u{201D}' | '\u{2019}' | ')' | ']' | '}')
}

fn is_opening(ch: char) -> bool {
    matches!(ch, '"' | '\'' | '\u{201C}' | '\u{2018}' | '(' | '[' | '{')
}
