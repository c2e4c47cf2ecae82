//! Session error module.
//!
//! Errors in the layout of the line-oriented input read by a spell-check session.

use thiserror::Error;

/// Errors that can occur while reading a session's input.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SessionError {
    /// The input ended before the dictionary size line.
    #[error("Missing dictionary size line")]
    MissingHeader,

    /// The dictionary size line is not a non-negative integer.
    #[error("Invalid dictionary size on line {line}: '{text}'")]
    InvalidHeader {
        /// 1-based line number of the header
        line: usize,
        /// The offending text
        text: String,
    },

    /// The input ended before all announced dictionary words were read.
    #[error("Dictionary truncated: expected {expected} words, found {found}")]
    TruncatedDictionary {
        /// Number of words announced by the header
        expected: usize,
        /// Number of words actually read
        found: usize,
    },
}
