// Copyright (c) 2025 Lanai Spell Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node and edge types for the Lanai Trie.
//!
//! A node is a branching point in the compressed trie. Each outgoing edge
//! carries a run of characters and exclusively owns the node it leads to.

use fnv::FnvHashMap;

/// A node in the Lanai Trie.
///
/// Children are keyed by the first character of their edge label, so a node
/// never has two outgoing edges starting with the same character.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TrieNode {
    /// Map of leading characters to outgoing edges
    pub(crate) children: FnvHashMap<char, TrieEdge>,

    /// Whether an inserted word ends exactly at this node
    pub(crate) is_word_end: bool,
}

impl TrieNode {
    /// Creates a new node with no children.
    pub fn new(is_word_end: bool) -> Self {
        Self {
            children: FnvHashMap::default(),
            is_word_end,
        }
    }

    /// Whether an inserted word ends at this node.
    pub fn is_word_end(&self) -> bool {
        self.is_word_end
    }

    /// Returns the outgoing edge whose label starts with `first`.
    pub fn edge(&self, first: char) -> Option<&TrieEdge> {
        self.children.get(&first)
    }

    /// Iterates over the outgoing edges in no particular order.
    pub fn edges(&self) -> impl Iterator<Item = &TrieEdge> {
        self.children.values()
    }

    /// Number of outgoing edges.
    pub fn degree(&self) -> usize {
        self.children.len()
    }
}

/// An edge carrying a compressed, non-empty run of characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrieEdge {
    pub(crate) label: Vec<char>,
    pub(crate) target: TrieNode,
}

impl TrieEdge {
    pub(crate) fn new(label: Vec<char>, target: TrieNode) -> Self {
        debug_assert!(!label.is_empty(), "edge labels are never empty");
        Self { label, target }
    }

    /// Characters consumed when traversing this edge.
    pub fn label(&self) -> &[char] {
        &self.label
    }

    /// The label as an owned string.
    pub fn label_string(&self) -> String {
        self.label.iter().collect()
    }

    /// The node this edge leads to.
    pub fn target(&self) -> &TrieNode {
        &self.target
    }

    /// Splits the edge after `at` characters.
    ///
    /// The edge keeps `label[..at]` and now points at a fresh non-terminal
    /// node whose single child carries `label[at..]` to the old target.
    pub(crate) fn split(&mut self, at: usize) {
        debug_assert!(at > 0 && at < self.label.len());

        let tail = self.label.split_off(at);
        let old_target = std::mem::take(&mut self.target);

        let mut middle = TrieNode::new(false);
        middle
            .children
            .insert(tail[0], TrieEdge::new(tail, old_target));
        self.target = middle;
    }
}

/// Length of the longest common prefix of two character slices.
pub(crate) fn common_prefix_len(a: &[char], b: &[char]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}
