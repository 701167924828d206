//! Single-edit matching heuristics.
//!
//! Three bounded tests cover the common typo shapes: two adjacent letters
//! swapped, one letter too many, one letter missing. They are tried in that
//! order and the first success wins; anything they miss falls through to the
//! defect score in [`crate::spelling::defect`].

use crate::error::{LexcheckError, Result};
use crate::spelling::dictionary::Bucket;

/// Check whether swapping two adjacent characters of `word` yields
/// `dict_word` exactly.
///
/// A swap is attempted at every pair position `(i, i + 1)` where a character
/// two positions ahead exists, so the final adjacent pair of a word is never
/// tested. That bounded scan is intentional; see `defect_count` for the
/// fallback that still catches a trailing-pair swap.
///
/// # Examples
///
/// ```
/// use lexcheck::spelling::heuristics::transposed_pair;
///
/// assert!(transposed_pair("desk", "dsek"));
/// assert!(!transposed_pair("desk", "desk"));
/// assert!(!transposed_pair("desk", "block"));
/// ```
pub fn transposed_pair(dict_word: &str, word: &str) -> bool {
    let chars: Vec<char> = word.chars().collect();
    for i in 0..chars.len().saturating_sub(2) {
        let mut swapped = chars.clone();
        swapped.swap(i, i + 1);
        if swapped.iter().collect::<String>() == dict_word {
            return true;
        }
    }
    false
}

/// Check whether deleting exactly one character from `word` yields a word
/// present in `bucket`.
///
/// Every deletion position is tried. Note the asymmetry with the other two
/// tests: membership is checked against the whole bucket, not against one
/// dictionary word.
///
/// # Examples
///
/// ```
/// use lexcheck::spelling::dictionary::DictionaryIndex;
/// use lexcheck::spelling::heuristics::extra_character;
///
/// let index = DictionaryIndex::build(["door"]);
/// let bucket = index.bucket_for("dooor");
/// assert!(extra_character(bucket, "dooor"));
/// assert!(!extra_character(bucket, "door"));
/// ```
pub fn extra_character(bucket: &Bucket, word: &str) -> bool {
    let chars: Vec<char> = word.chars().collect();
    for i in 0..chars.len() {
        let mut shortened = chars.clone();
        shortened.remove(i);
        let test_word: String = shortened.into_iter().collect();
        if bucket.contains(&test_word) {
            return true;
        }
    }
    false
}

/// Check whether inserting one character, copied from the corresponding
/// position of `dict_word`, into `word` yields `dict_word` exactly.
///
/// Only a one-character length difference can match by construction. Callers
/// must guard with a length check first: a `dict_word` shorter than `word`
/// is a precondition violation and fails fast.
///
/// # Examples
///
/// ```
/// use lexcheck::spelling::heuristics::missing_character;
///
/// assert!(missing_character("desk", "dsk").unwrap());
/// assert!(!missing_character("desk", "desk").unwrap());
/// assert!(!missing_character("desk", "de").unwrap());
/// assert!(missing_character("desk", "block").is_err());
/// ```
pub fn missing_character(dict_word: &str, word: &str) -> Result<bool> {
    let dict_chars: Vec<char> = dict_word.chars().collect();
    let word_chars: Vec<char> = word.chars().collect();

    if dict_chars.len() < word_chars.len() {
        return Err(LexcheckError::invalid_argument(
            "dictionary word is shorter than the word to compare",
        ));
    }

    for i in 0..dict_chars.len() {
        if i > word_chars.len() {
            break;
        }
        let mut test_word = word_chars.clone();
        test_word.insert(i, dict_chars[i]);
        if test_word == dict_chars {
            return Ok(true);
        }
    }
    Ok(false)
}
