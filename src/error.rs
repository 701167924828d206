//! Error types for the lexcheck library.
//!
//! All errors are represented by the [`LexcheckError`] enum. The startup
//! errors (`DictionaryNotFound`, `CandidateSourceNotFound`, `NoCandidates`)
//! are fatal: they are detected before any matching work begins and their
//! `Display` output is the single line reported to the user.
//!
//! # Examples
//!
//! ```
//! use lexcheck::error::{LexcheckError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(LexcheckError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("{}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for lexcheck operations.
#[derive(Error, Debug)]
pub enum LexcheckError {
    /// I/O errors (file operations, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The dictionary file could not be opened.
    #[error("Dictionary file '{0}' not found!")]
    DictionaryNotFound(String),

    /// A candidate-source file could not be opened.
    #[error("Words to check file not found!")]
    CandidateSourceNotFound(String),

    /// No candidate words or candidate-source files were supplied.
    #[error("Please input a newline delimited file to test against.")]
    NoCandidates,

    /// A precondition violation inside the matching engine.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with LexcheckError.
pub type Result<T> = std::result::Result<T, LexcheckError>;

impl LexcheckError {
    /// Create a new dictionary-not-found error.
    pub fn dictionary_not_found<S: Into<String>>(path: S) -> Self {
        LexcheckError::DictionaryNotFound(path.into())
    }

    /// Create a new candidate-source-not-found error.
    pub fn candidate_source_not_found<S: Into<String>>(path: S) -> Self {
        LexcheckError::CandidateSourceNotFound(path.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        LexcheckError::InvalidArgument(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LexcheckError::Other(msg.into())
    }
}
