// Copyright (c) 2025 Lanai Spell Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Lanai Trie Implementation
//!
//! This module provides a compressed prefix tree (radix trie) for storing a
//! dictionary of words and answering bounded edit-distance queries against it.
//!
//! Shared prefixes are stored once, on edges that carry whole runs of
//! characters rather than a single character each. The fuzzy matcher in
//! [`fuzzy`] walks these edges while extending an edit-distance table one
//! row per character, pruning branches as soon as they can no longer come
//! back within budget.
//!
//! # Example
//!
//! ```
//! use lanai_spell_lib::data_structures::lanai_trie::LanaiTrie;
//!
//! let mut trie = LanaiTrie::new();
//! for word in ["cat", "cats", "hat"] {
//!     trie.insert(word).unwrap();
//! }
//!
//! // An exact hit short-circuits the search
//! assert_eq!(trie.search("cat", 1).into_iter().collect::<Vec<_>>(), vec!["cat"]);
//!
//! // Otherwise every word within budget is returned
//! let found = trie.search("bat", 1);
//! assert!(found.contains("cat") && found.contains("hat"));
//! assert!(!found.contains("cats"));
//! ```

mod error;
mod node;

pub mod distance;
pub mod fuzzy;

#[cfg(test)]
mod tests;

use std::borrow::Cow;
use std::collections::hash_map::Entry;
use std::collections::BTreeSet;

pub use error::LanaiTrieError;
pub use fuzzy::{FuzzyMatcher, SearchOptions, SearchStats, SearchStrategy};
pub use node::{TrieEdge, TrieNode};

use node::common_prefix_len;

/// Result type for Lanai Trie operations
pub type LanaiTrieResult<T> = Result<T, LanaiTrieError>;

/// Configuration options for the Lanai Trie
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanaiTrieConfig {
    /// Whether words and queries keep their case.
    /// When `false` both are lowercased before use.
    pub case_sensitive: bool,

    /// Maximum word length in characters
    pub max_word_len: usize,
}

impl Default for LanaiTrieConfig {
    fn default() -> Self {
        Self {
            case_sensitive: false,
            max_word_len: 256,
        }
    }
}

/// Compressed prefix tree over a dictionary of words.
///
/// Key features:
/// * Edges carry multi-character labels, split on partial overlap
/// * O(|word|) insertion, idempotent for words already present
/// * Bounded Damerau-Levenshtein search with exact-match short-circuit
/// * Case-insensitive by default (configurable)
#[derive(Debug, Clone)]
pub struct LanaiTrie {
    /// The root node of the trie; it never ends a word
    root: TrieNode,

    /// Configuration options
    config: LanaiTrieConfig,

    /// Number of distinct words stored
    word_count: usize,

    /// Number of nodes, root included
    node_count: usize,
}

impl LanaiTrie {
    /// Creates a new empty `LanaiTrie` with default configuration.
    pub fn new() -> Self {
        Self::with_config(LanaiTrieConfig::default())
    }

    /// Creates a new empty `LanaiTrie` with the specified configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration for the trie.
    pub fn with_config(config: LanaiTrieConfig) -> Self {
        Self {
            root: TrieNode::new(false),
            config,
            word_count: 0,
            node_count: 1,
        }
    }

    /// Builds a trie from a sequence of words.
    ///
    /// Stops at the first word the trie rejects.
    pub fn from_words<I, W>(config: LanaiTrieConfig, words: I) -> LanaiTrieResult<Self>
    where
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        let mut trie = Self::with_config(config);
        let mut attempted = 0usize;
        for word in words {
            trie.insert(word)?;
            attempted += 1;
        }
        tracing::debug!(
            attempted,
            words = trie.word_count,
            nodes = trie.node_count,
            "Built trie"
        );
        Ok(trie)
    }

    /// Returns the configuration the trie was created with.
    pub fn config(&self) -> &LanaiTrieConfig {
        &self.config
    }

    /// Applies the trie's case policy to a word or query.
    pub fn normalize<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if self.config.case_sensitive {
            Cow::Borrowed(text)
        } else {
            Cow::Owned(text.to_lowercase())
        }
    }

    /// Inserts a word into the trie.
    ///
    /// # Arguments
    ///
    /// * `word` - The word to insert.
    ///
    /// # Returns
    ///
    /// * `Ok(bool)` - `true` if the word was new, `false` if it was already present.
    /// * `Err(LanaiTrieError)` - If the word is empty or too long. The trie is left unchanged.
    pub fn insert<W>(&mut self, word: W) -> LanaiTrieResult<bool>
    where
        W: AsRef<str>,
    {
        let processed = self.normalize(word.as_ref());
        let chars: Vec<char> = processed.chars().collect();

        if chars.is_empty() {
            return Err(LanaiTrieError::EmptyWord);
        }
        if chars.len() > self.config.max_word_len {
            return Err(LanaiTrieError::WordTooLong {
                word: processed.into_owned(),
                max_len: self.config.max_word_len,
            });
        }

        let (is_new, created) = Self::insert_chars(&mut self.root, &chars);
        self.node_count += created;
        if is_new {
            self.word_count += 1;
        }
        Ok(is_new)
    }

    /// Walks down from `root`, splitting edges where `word` diverges.
    ///
    /// Returns whether the word was new and how many nodes were created.
    fn insert_chars(root: &mut TrieNode, word: &[char]) -> (bool, usize) {
        let mut node = root;
        let mut suffix = word;

        loop {
            let edge = match node.children.entry(suffix[0]) {
                Entry::Vacant(slot) => {
                    slot.insert(TrieEdge::new(suffix.to_vec(), TrieNode::new(true)));
                    return (true, 1);
                }
                Entry::Occupied(slot) => slot.into_mut(),
            };

            let matched = common_prefix_len(suffix, &edge.label);

            if matched == edge.label.len() {
                if matched == suffix.len() {
                    let is_new = !edge.target.is_word_end;
                    edge.target.is_word_end = true;
                    return (is_new, 0);
                }
                suffix = &suffix[matched..];
                node = &mut edge.target;
                continue;
            }

            // The word leaves the edge part way through its label
            edge.split(matched);
            if matched == suffix.len() {
                edge.target.is_word_end = true;
                return (true, 1);
            }

            let rest = &suffix[matched..];
            edge.target
                .children
                .insert(rest[0], TrieEdge::new(rest.to_vec(), TrieNode::new(true)));
            return (true, 2);
        }
    }

    /// Checks if a word is stored in the trie.
    pub fn contains<W>(&self, word: W) -> bool
    where
        W: AsRef<str>,
    {
        let processed = self.normalize(word.as_ref());
        let chars: Vec<char> = processed.chars().collect();
        if chars.is_empty() {
            return false;
        }

        let mut node = &self.root;
        let mut suffix = chars.as_slice();
        while !suffix.is_empty() {
            let Some(edge) = node.edge(suffix[0]) else {
                return false;
            };
            if !suffix.starts_with(&edge.label) {
                return false;
            }
            suffix = &suffix[edge.label.len()..];
            node = &edge.target;
        }
        node.is_word_end
    }

    /// Finds all stored words within `max_mistakes` edits of `query`.
    ///
    /// Uses a depth-first walk. If `query` itself is stored, the result
    /// contains only that word.
    pub fn search<Q>(&self, query: Q, max_mistakes: usize) -> BTreeSet<String>
    where
        Q: AsRef<str>,
    {
        let options = SearchOptions {
            max_mistakes,
            ..SearchOptions::default()
        };
        self.search_with(query, &options)
    }

    /// Finds all stored words close to `query` using explicit search options.
    pub fn search_with<Q>(&self, query: Q, options: &SearchOptions) -> BTreeSet<String>
    where
        Q: AsRef<str>,
    {
        FuzzyMatcher::new(self, options.clone()).find(query)
    }

    /// The root node, for read-only traversal.
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Returns the number of distinct words in the trie.
    pub fn len(&self) -> usize {
        self.word_count
    }

    /// Checks if the trie holds no words.
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Returns the number of nodes in the trie, root included.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Collects every stored word in sorted order.
    ///
    /// This traverses the entire trie, so it's an O(n) operation.
    pub fn words(&self) -> Vec<String> {
        let mut words = Vec::with_capacity(self.word_count);
        let mut stack: Vec<(&TrieNode, String)> = vec![(&self.root, String::new())];

        while let Some((node, path)) = stack.pop() {
            if node.is_word_end {
                words.push(path.clone());
            }
            for edge in node.edges() {
                let mut next = path.clone();
                next.extend(edge.label.iter());
                stack.push((&edge.target, next));
            }
        }

        words.sort_unstable();
        words
    }

    /// Removes every word, keeping the configuration.
    pub fn clear(&mut self) {
        self.root = TrieNode::new(false);
        self.word_count = 0;
        self.node_count = 1;
    }
}

impl Default for LanaiTrie {
    fn default() -> Self {
        Self::new()
    }
}
