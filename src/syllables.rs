//! Heuristic syllable estimation.
//!
//! Vowel-group counting with a silent-e correction. Good enough to classify
//! complex words (two or more syllables); not a pronunciation dictionary.

/// Estimate the syllable count of a single word. Never returns zero.
pub fn estimate(word: &str) -> u64 {
    let lower = word.to_lowercase();
    let chars: Vec<char> = lower.chars().collect();

    let mut groups: u64 = 0;
    let mut in_group = false;
    for &ch in &chars {
        if is_vowel(ch) {
            if !in_group {
                groups += 1;
                in_group = true;
            }
        } else {
            in_group = false;
        }
    }

    // Silent trailing e: "love" is one syllable, but keep the consonant-le
    // ending ("article", "table") which is pronounced.
    if groups > 1 && chars.last() == Some(&'e') && !ends_in_consonant_le(&chars) {
        groups -= 1;
    }

    groups.max(1)
}

fn is_vowel(ch: char) -> bool {
    matches!(ch, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

fn ends_in_consonant_le(chars: &[char]) -> bool {
    let n = chars.len();
    n >= 3 && chars[n - 1] == 'e' && chars[n - 2] == 'l' && !is_vowel(chars[n - 3])
}
