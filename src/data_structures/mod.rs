//! Data structures for Lanai Spell.
//!
//! This module contains the dictionary structures the spell checker is built on.
//! All implementations adhere to the project requirements:
//! - No unsafe code
//! - Strict ownership, no shared or back pointers
//! - Explicit error types for rejected input

pub mod lanai_trie;

// Re-export common data structures
pub use lanai_trie::{LanaiTrie, LanaiTrieError, LanaiTrieResult};
