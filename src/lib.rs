//! Lanai Spell Library
//!
//! This library contains the core components of Lanai Spell: a compressed
//! radix trie over a dictionary, a bounded Damerau-Levenshtein matcher that
//! walks it, and the line-oriented session driver used by the binary.
//!
//! # Architecture
//!
//! Lanai Spell is designed with the following principles in mind:
//! - Build the dictionary once, then query it read-only
//! - Prune the search as early as the edit-distance table allows
//! - Comprehensive error handling and propagation
//! - Layered configuration (defaults, file, environment)

#![forbid(unsafe_code)]

pub mod config;
pub mod data_structures;
pub mod error;
pub mod session;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for Lanai Spell.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
