//! Dictionary-based sentiment scoring.

use crate::lexical::LexiconSet;

/// Count lexicon hits in a token sequence.
///
/// Returns `(positive_score, negative_score)` where the negative score is
/// already negated; callers must not re-negate it. A token present in both
/// lexicons contributes to both counts. Pure function of its inputs.
pub fn sentiment_scores(tokens: &[String], lexicon: &LexiconSet) -> (i64, i64) {
    let mut positive = 0i64;
    let mut negative = 0i64;
    for token in tokens {
        if lexicon.is_positive(token) {
            positive += 1;
        }
        if lexicon.is_negative(token) {
            negative += 1;
        }
    }
    (positive, -negative)
}
