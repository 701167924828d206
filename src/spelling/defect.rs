//! Character-multiset dissimilarity scoring.
//!
//! The defect count is the fallback measure used when none of the single-edit
//! heuristics fire. Lower is more similar; zero means identical multisets and
//! identical sequences over the compared length. It is deterministic but not
//! symmetric in general, because only the side with more distinct characters
//! is charged for its unique characters.

use ahash::AHashMap;

/// Count the defects between a dictionary word and a candidate.
///
/// The score is the sum of three penalties:
/// 1. counts of characters unique to the side with more distinct characters
///    (candidate side on ties),
/// 2. the absolute count difference for characters both sides share,
/// 3. one per position where the words disagree, over the shorter length.
///
/// # Examples
///
/// ```
/// use lexcheck::spelling::defect::defect_count;
///
/// assert_eq!(defect_count("desk", "desk"), 0);
/// assert_eq!(defect_count("desk", "disk"), 2);
/// ```
pub fn defect_count(dict_word: &str, word: &str) -> u32 {
    let dict_chars: Vec<char> = dict_word.chars().collect();
    let word_chars: Vec<char> = word.chars().collect();
    let dict_counts = char_counts(&dict_chars);
    let word_counts = char_counts(&word_chars);

    let mut defects = 0u32;

    // Unmatched-character penalty, charged on one side only.
    if dict_counts.len() > word_counts.len() {
        for (ch, count) in &dict_counts {
            if !word_counts.contains_key(ch) {
                defects += count;
            }
        }
    } else {
        for (ch, count) in &word_counts {
            if !dict_counts.contains_key(ch) {
                defects += count;
            }
        }
    }

    // Shared-character penalty: difference in quantity.
    for (ch, count) in &dict_counts {
        if let Some(other) = word_counts.get(ch) {
            defects += count.abs_diff(*other);
        }
    }

    // Positional penalty over the shorter word length.
    let bound = dict_chars.len().min(word_chars.len());
    for i in 0..bound {
        if dict_chars[i] != word_chars[i] {
            defects += 1;
        }
    }

    defects
}

fn char_counts(chars: &[char]) -> AHashMap<char, u32> {
    let mut counts = AHashMap::new();
    for &ch in chars {
        *counts.entry(ch).or_insert(0) += 1;
    }
    counts
}
