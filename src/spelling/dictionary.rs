//! Leading-character bucketed dictionary index.
//!
//! Words are grouped by their first letter because misspellings rarely get
//! the first letter wrong, so a candidate only needs to be compared against
//! one bucket. Words that do not start with an ASCII letter go into a
//! catch-all bucket.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use ahash::{AHashMap, AHashSet};

use crate::error::{LexcheckError, Result};

/// Key of the bucket collecting words without a leading ASCII letter.
pub const CATCH_ALL_KEY: char = '0';

/// Normalize a raw dictionary or candidate line into a word: lowercase it
/// and strip trailing line terminators. No other normalization is applied.
pub fn normalize_word(line: &str) -> String {
    line.trim_end_matches(['\r', '\n']).to_lowercase()
}

/// One subset of the dictionary, grouped by leading character.
///
/// Scan order is dictionary-file insertion order, which keeps the chosen
/// suggestion reproducible across runs. Membership checks go through a
/// hash set.
#[derive(Debug, Clone, Default)]
pub struct Bucket {
    words: Vec<String>,
    set: AHashSet<String>,
}

impl Bucket {
    /// Insert a word, keeping set semantics: duplicates are idempotent.
    fn insert(&mut self, word: String) {
        if self.set.insert(word.clone()) {
            self.words.push(word);
        }
    }

    /// Check whether `word` is an exact key in this bucket.
    pub fn contains(&self, word: &str) -> bool {
        self.set.contains(word)
    }

    /// Iterate the bucket's words in insertion (file) order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Number of distinct words in this bucket.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check whether the bucket holds no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// A read-only dictionary partitioned into leading-character buckets.
///
/// The index is built once, single-threaded, before any matching starts and
/// is never mutated afterward, so it can be shared across workers without
/// locking.
#[derive(Debug, Clone)]
pub struct DictionaryIndex {
    buckets: AHashMap<char, Bucket>,
    word_count: usize,
}

impl DictionaryIndex {
    /// Create an empty index with one bucket per ASCII letter plus the
    /// catch-all bucket.
    pub fn new() -> Self {
        let mut buckets = AHashMap::with_capacity(27);
        buckets.insert(CATCH_ALL_KEY, Bucket::default());
        for letter in 'a'..='z' {
            buckets.insert(letter, Bucket::default());
        }
        DictionaryIndex {
            buckets,
            word_count: 0,
        }
    }

    /// Select the bucket key for a word. The key depends only on the word's
    /// first character, never on whether the word is in the dictionary, so
    /// indexing and lookup always agree.
    fn bucket_key(word: &str) -> char {
        match word.chars().next() {
            Some(c) if c.is_ascii_alphabetic() => c.to_ascii_lowercase(),
            _ => CATCH_ALL_KEY,
        }
    }

    /// Add one raw dictionary line to the index.
    pub fn insert_line(&mut self, line: &str) {
        let word = normalize_word(line);
        let key = Self::bucket_key(&word);
        // All keys are pre-created in new(), so the lookup cannot miss.
        if let Some(bucket) = self.buckets.get_mut(&key) {
            let before = bucket.len();
            bucket.insert(word);
            if bucket.len() > before {
                self.word_count += 1;
            }
        }
    }

    /// Build an index from a sequence of raw dictionary lines.
    pub fn build<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index = DictionaryIndex::new();
        for line in lines {
            index.insert_line(line.as_ref());
        }
        index
    }

    /// Load an index from a newline-delimited word file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|_| LexcheckError::dictionary_not_found(path.display().to_string()))?;
        let reader = BufReader::new(file);

        let mut index = DictionaryIndex::new();
        for line in reader.lines() {
            index.insert_line(&line?);
        }
        Ok(index)
    }

    /// Get the bucket a candidate word should be compared against.
    pub fn bucket_for(&self, word: &str) -> &Bucket {
        let key = Self::bucket_key(word);
        self.buckets
            .get(&key)
            .unwrap_or_else(|| &self.buckets[&CATCH_ALL_KEY])
    }

    /// Check whether a word is an exact dictionary entry.
    pub fn contains(&self, word: &str) -> bool {
        self.bucket_for(word).contains(word)
    }

    /// Total number of distinct words in the index.
    pub fn word_count(&self) -> usize {
        self.word_count
    }
}

impl Default for DictionaryIndex {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_normalize_word() {
        assert_eq!(normalize_word("Door\n"), "door");
        assert_eq!(normalize_word("DESK\r\n"), "desk");
        assert_eq!(normalize_word("plain"), "plain");
        // Internal whitespace is accepted as-is.
        assert_eq!(normalize_word("two words"), "two words");
    }

    #[test]
    fn test_bucketing_by_leading_letter() {
        let index = DictionaryIndex::build(["door", "desk", "apple"]);

        assert!(index.bucket_for("door").contains("door"));
        assert!(index.bucket_for("desk").contains("desk"));
        assert!(index.bucket_for("dusk").contains("door"));
        assert!(!index.bucket_for("apple").contains("door"));
        assert_eq!(index.word_count(), 3);
    }

    #[test]
    fn test_catch_all_bucket() {
        let index = DictionaryIndex::build(["42nd", "#tag", "door"]);

        let catch_all = index.bucket_for("1000");
        assert!(catch_all.contains("42nd"));
        assert!(catch_all.contains("#tag"));
        assert!(!catch_all.contains("door"));

        // The empty word also resolves to the catch-all bucket.
        assert!(index.bucket_for("").contains("42nd"));
    }

    #[test]
    fn test_duplicates_are_idempotent() {
        let index = DictionaryIndex::build(["door", "Door", "door\n"]);
        assert_eq!(index.word_count(), 1);
        assert_eq!(index.bucket_for("door").len(), 1);
    }

    #[test]
    fn test_scan_order_is_file_order() {
        let index = DictionaryIndex::build(["dusk", "door", "desk", "door"]);
        let scanned: Vec<&str> = index.bucket_for("dxxx").iter().collect();
        assert_eq!(scanned, vec!["dusk", "door", "desk"]);
    }

    #[test]
    fn test_lookup_key_independent_of_membership() {
        let index = DictionaryIndex::build(["door"]);
        // "zebra" is not in the dictionary but still maps to the 'z' bucket.
        assert!(index.bucket_for("zebra").is_empty());
        assert!(!index.contains("zebra"));
    }

    #[test]
    fn test_load_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "Door").unwrap();
        writeln!(temp_file, "desk").unwrap();
        writeln!(temp_file, "door").unwrap();
        temp_file.flush().unwrap();

        let index = DictionaryIndex::load_from_file(temp_file.path()).unwrap();
        assert!(index.contains("door"));
        assert!(index.contains("desk"));
        assert_eq!(index.word_count(), 2);
    }

    #[test]
    fn test_missing_dictionary_file() {
        let err = DictionaryIndex::load_from_file("no_such_words.txt").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Dictionary file 'no_such_words.txt' not found!"
        );
    }
}
