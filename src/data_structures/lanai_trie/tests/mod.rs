// Copyright (c) 2025 Lanai Spell Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Structural and property-based tests for the Lanai Trie.


use super::{LanaiTrie, TrieNode};

/// Walks the whole trie and asserts the structural invariants.
///
/// Every edge is keyed by its first label character, no label is empty and
/// every non-root node either ends a word or branches.
pub(super) fn assert_invariants(trie: &LanaiTrie) {
    fn walk(node: &TrieNode, is_root: bool, nodes: &mut usize) {
        *nodes += 1;
        if !is_root {
            assert!(
                node.is_word_end() || node.degree() >= 2,
                "non-terminal node with a single child should have been merged"
            );
        } else {
            assert!(!node.is_word_end(), "root never ends a word");
        }
        for (key, edge) in &node.children {
            assert!(!edge.label().is_empty(), "empty edge label");
            assert_eq!(*key, edge.label()[0], "edge keyed by wrong character");
            walk(edge.target(), false, nodes);
        }
    }

    let mut nodes = 0;
    walk(trie.root(), true, &mut nodes);
    assert_eq!(nodes, trie.node_count(), "node counter out of sync");
}
