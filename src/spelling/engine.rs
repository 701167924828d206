//! Per-candidate verdict engine.
//!
//! For one candidate word the engine runs a linear four-step decision: exact
//! bucket lookup, the fast single-edit heuristics, the defect-score fallback
//! under a fixed threshold, and finally the verdict. It keeps no state
//! across candidates beyond the shared read-only [`DictionaryIndex`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::spelling::defect::defect_count;
use crate::spelling::dictionary::DictionaryIndex;
use crate::spelling::heuristics::{extra_character, missing_character, transposed_pair};

/// Configuration for the per-candidate checker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckerConfig {
    /// Exclusive upper bound on the defect score: a fallback suggestion must
    /// score strictly below this to qualify.
    pub max_defects: u32,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        CheckerConfig { max_defects: 7 }
    }
}

/// The outcome for a single candidate word.
///
/// Produced exactly once per candidate and never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Verdict {
    /// The candidate is an exact dictionary entry.
    Correct {
        /// The checked word.
        word: String,
    },
    /// The candidate is not in the dictionary but a correction was found.
    Suggestion {
        /// The checked word.
        word: String,
        /// The dictionary word proposed as the correction.
        suggestion: String,
    },
    /// No correction cleared the threshold.
    Unknown {
        /// The checked word.
        word: String,
    },
}

impl Verdict {
    /// The candidate word this verdict is about.
    pub fn word(&self) -> &str {
        match self {
            Verdict::Correct { word }
            | Verdict::Suggestion { word, .. }
            | Verdict::Unknown { word } => word,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Correct { word } => write!(f, "CORRECT [{word}]"),
            Verdict::Suggestion { word, suggestion } => {
                write!(f, "{suggestion} suggested for [{word}]")
            }
            Verdict::Unknown { word } => write!(f, "INCORRECT [{word}]"),
        }
    }
}

/// Matching engine producing one [`Verdict`] per candidate word.
pub struct MatchEngine<'a> {
    index: &'a DictionaryIndex,
    config: CheckerConfig,
}

impl<'a> MatchEngine<'a> {
    /// Create an engine over a built dictionary index.
    pub fn new(index: &'a DictionaryIndex) -> Self {
        MatchEngine {
            index,
            config: CheckerConfig::default(),
        }
    }

    /// Create an engine with a custom configuration.
    pub fn with_config(index: &'a DictionaryIndex, config: CheckerConfig) -> Self {
        MatchEngine { index, config }
    }

    /// Produce the verdict for one candidate word.
    ///
    /// The candidate is assumed to be normalized already (lowercase, no
    /// trailing line terminators).
    pub fn check(&self, word: &str) -> Result<Verdict> {
        let bucket = self.index.bucket_for(word);

        if bucket.contains(word) {
            return Ok(Verdict::Correct {
                word: word.to_string(),
            });
        }

        let word_len = word.chars().count();
        let mut suggestion: Option<&str> = None;

        // Fast phase: the first bucket key any single-edit test accepts
        // becomes the suggestion and the scan stops.
        for key in bucket.iter() {
            if transposed_pair(key, word)
                || extra_character(bucket, word)
                || (key.chars().count() > word_len && missing_character(key, word)?)
            {
                suggestion = Some(key);
                break;
            }
        }

        // Fallback phase: defect scan under the threshold, replacing only on
        // strict improvement so ties keep the earliest key.
        if suggestion.is_none() {
            let mut best = self.config.max_defects;
            for key in bucket.iter() {
                let count = defect_count(key, word);
                if count < best {
                    best = count;
                    suggestion = Some(key);
                }
            }
        }

        Ok(match suggestion {
            Some(found) => Verdict::Suggestion {
                word: word.to_string(),
                suggestion: found.to_string(),
            },
            None => Verdict::Unknown {
                word: word.to_string(),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spelling::dictionary::DictionaryIndex;

    fn engine_over(words: &[&str]) -> DictionaryIndex {
        DictionaryIndex::build(words)
    }

    fn check(index: &DictionaryIndex, word: &str) -> Verdict {
        MatchEngine::new(index).check(word).unwrap()
    }

    #[test]
    fn test_exact_match_is_correct() {
        let index = engine_over(&["door", "desk", "42nd"]);
        for word in ["door", "desk", "42nd"] {
            assert_eq!(
                check(&index, word),
                Verdict::Correct {
                    word: word.to_string()
                }
            );
        }
    }

    #[test]
    fn test_transposition_suggestion() {
        let index = engine_over(&["desk"]);
        assert_eq!(
            check(&index, "dsek"),
            Verdict::Suggestion {
                word: "dsek".to_string(),
                suggestion: "desk".to_string()
            }
        );
    }

    #[test]
    fn test_extra_character_suggestion() {
        let index = engine_over(&["door"]);
        assert_eq!(
            check(&index, "dooor"),
            Verdict::Suggestion {
                word: "dooor".to_string(),
                suggestion: "door".to_string()
            }
        );
    }

    #[test]
    fn test_extra_character_suggests_first_scanned_key() {
        // The extra-character test checks bucket membership, so the first
        // key in scan order is suggested even when a different bucket word
        // is the one a deletion produced.
        let index = engine_over(&["desk", "door"]);
        assert_eq!(
            check(&index, "dooor"),
            Verdict::Suggestion {
                word: "dooor".to_string(),
                suggestion: "desk".to_string()
            }
        );
    }

    #[test]
    fn test_missing_character_suggestion() {
        let index = engine_over(&["desk"]);
        assert_eq!(
            check(&index, "dsk"),
            Verdict::Suggestion {
                word: "dsk".to_string(),
                suggestion: "desk".to_string()
            }
        );
    }

    #[test]
    fn test_fast_phase_stops_at_first_match() {
        // Both "dusk" and "desk" live in the 'd' bucket; "desk" is the one
        // a transposition of "dsek" reaches, scanned after "dusk" fails.
        let index = engine_over(&["dusk", "desk"]);
        assert_eq!(
            check(&index, "dsek"),
            Verdict::Suggestion {
                word: "dsek".to_string(),
                suggestion: "desk".to_string()
            }
        );
    }

    #[test]
    fn test_defect_fallback_suggestion() {
        // "doro" swaps the final pair of "door", which the transposition
        // scan never tests; the defect fallback still finds it.
        let index = engine_over(&["door"]);
        assert_eq!(
            check(&index, "doro"),
            Verdict::Suggestion {
                word: "doro".to_string(),
                suggestion: "door".to_string()
            }
        );
    }

    #[test]
    fn test_defect_tie_keeps_earliest_key() {
        // "cat" and "car" both score 2 against "caz"; the earlier file
        // entry wins because replacement requires strict improvement.
        let index = engine_over(&["cat", "car"]);
        assert_eq!(
            check(&index, "caz"),
            Verdict::Suggestion {
                word: "caz".to_string(),
                suggestion: "cat".to_string()
            }
        );

        let reversed = engine_over(&["car", "cat"]);
        assert_eq!(
            check(&reversed, "caz"),
            Verdict::Suggestion {
                word: "caz".to_string(),
                suggestion: "car".to_string()
            }
        );
    }

    #[test]
    fn test_unknown_when_bucket_is_empty() {
        let index = engine_over(&["door", "desk"]);
        assert_eq!(
            check(&index, "xyz"),
            Verdict::Unknown {
                word: "xyz".to_string()
            }
        );
    }

    #[test]
    fn test_unknown_when_threshold_not_cleared() {
        // Every defect score in the bucket is >= 7.
        let index = engine_over(&["dictionary"]);
        assert_eq!(
            check(&index, "dqqqqqqqq"),
            Verdict::Unknown {
                word: "dqqqqqqqq".to_string()
            }
        );
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let index = engine_over(&["dictionary"]);
        let config = CheckerConfig { max_defects: 18 };
        let engine = MatchEngine::with_config(&index, config);
        // defect_count("dictionary", "dqqqqqqqq") is 17, strictly below 18.
        assert_eq!(
            engine.check("dqqqqqqqq").unwrap(),
            Verdict::Suggestion {
                word: "dqqqqqqqq".to_string(),
                suggestion: "dictionary".to_string()
            }
        );
    }

    #[test]
    fn test_verdict_display() {
        let correct = Verdict::Correct {
            word: "door".to_string(),
        };
        let suggestion = Verdict::Suggestion {
            word: "dooor".to_string(),
            suggestion: "door".to_string(),
        };
        let unknown = Verdict::Unknown {
            word: "xyz".to_string(),
        };

        assert_eq!(correct.to_string(), "CORRECT [door]");
        assert_eq!(suggestion.to_string(), "door suggested for [dooor]");
        assert_eq!(unknown.to_string(), "INCORRECT [xyz]");
    }

    #[test]
    fn test_verdict_word_accessor() {
        let verdict = Verdict::Suggestion {
            word: "dooor".to_string(),
            suggestion: "door".to_string(),
        };
        assert_eq!(verdict.word(), "dooor");
    }
}
