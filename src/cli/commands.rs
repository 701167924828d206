//! Command implementation for the lexcheck CLI.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::time::Instant;

use log::{debug, info};
use regex::Regex;

use crate::cli::args::LexcheckArgs;
use crate::cli::output::{CheckReport, output_report};
use crate::error::{LexcheckError, Result};
use crate::parallel_check::engine::CheckDispatcher;
use crate::spelling::dictionary::{DictionaryIndex, normalize_word};

/// Unanchored shape of a candidate token that names a file instead of a
/// literal word.
const FILE_TOKEN_PATTERN: &str = r"\w+\.\w+";

/// Execute the check command.
pub fn execute_command(args: LexcheckArgs) -> Result<()> {
    let start = Instant::now();

    let index = DictionaryIndex::load_from_file(&args.dictionary)?;
    info!(
        "loaded {} dictionary words from {}",
        index.word_count(),
        args.dictionary.display()
    );

    let candidates = collect_candidates(&args.words)?;
    debug!("collected {} candidate words", candidates.len());

    let dispatcher = CheckDispatcher::new();
    let verdicts = dispatcher.check_all(&index, &candidates)?;

    let report = CheckReport::new(verdicts, start.elapsed());
    output_report(&report, &args)
}

/// Expand CLI tokens into the ordered candidate list.
///
/// Tokens shaped like `name.ext` are read as files whose lines are appended
/// in file order; every other token is taken as a literal word. Both go
/// through the same normalization as dictionary lines.
pub fn collect_candidates(tokens: &[String]) -> Result<Vec<String>> {
    if tokens.is_empty() {
        return Err(LexcheckError::NoCandidates);
    }

    let file_shaped = Regex::new(FILE_TOKEN_PATTERN)
        .map_err(|e| LexcheckError::other(format!("invalid file token pattern: {e}")))?;

    let mut candidates = Vec::new();
    for token in tokens {
        if file_shaped.is_match(token) {
            let file = File::open(token)
                .map_err(|_| LexcheckError::candidate_source_not_found(token.clone()))?;
            for line in BufReader::new(file).lines() {
                candidates.push(normalize_word(&line?));
            }
        } else {
            candidates.push(normalize_word(token));
        }
    }
    Ok(candidates)
}
