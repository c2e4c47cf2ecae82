// Copyright (c) 2025 Lanai Spell Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Bounded edit-distance search over a [`LanaiTrie`].
//!
//! The matcher walks the trie from the root, extending the edit-distance
//! table by one row for every character of every edge label it crosses.
//! Each pending branch owns its last two rows, so siblings never share
//! buffers.
//!
//! Two rules keep the walk from visiting the whole dictionary:
//!
//! - a branch is dropped once its path is longer than the query plus the
//!   mistake budget, since the length difference alone exceeds the budget;
//! - a branch is dropped as soon as a row has no entry within budget, even in
//!   the middle of an edge. Row minima never decrease further down a path.
//!
//! A word is reported only after its full edge has been consumed, and its
//! distance is read from the last column of that row. Hitting a word at
//! distance zero ends the search with that word alone.

use std::cmp::Ordering;
use std::collections::{BTreeSet, BinaryHeap};

use serde::{Deserialize, Serialize};

use super::distance::{first_row, next_row, row_min, DistanceRow};
use super::{LanaiTrie, TrieEdge, TrieNode};

/// Order in which pending branches are explored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum SearchStrategy {
    /// Explicit stack, last discovered branch first
    #[default]
    DepthFirst,
    /// Priority queue favouring branches that are prefixes of the query
    BestFirst,
}

/// Options for a fuzzy search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOptions {
    /// Largest edit distance a reported word may have
    pub max_mistakes: usize,

    /// Traversal order; does not change the result
    pub strategy: SearchStrategy,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            max_mistakes: 1,
            strategy: SearchStrategy::default(),
        }
    }
}

impl SearchOptions {
    /// Creates options with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the mistake budget.
    pub fn max_mistakes(mut self, value: usize) -> Self {
        self.max_mistakes = value;
        self
    }

    /// Sets the traversal strategy.
    pub fn strategy(mut self, value: SearchStrategy) -> Self {
        self.strategy = value;
        self
    }
}

/// Counters collected during a single search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Edges the matcher started to consume
    pub edges_visited: usize,
    /// Distance rows computed
    pub rows_computed: usize,
    /// Branches dropped because the path outgrew the query
    pub pruned_by_length: usize,
    /// Branches dropped because a row went over budget
    pub pruned_by_row: usize,
    /// Words in the returned set
    pub matches: usize,
}

/// Fuzzy matcher bound to a finished trie.
#[derive(Debug, Clone)]
pub struct FuzzyMatcher<'t> {
    trie: &'t LanaiTrie,
    options: SearchOptions,
}

impl<'t> FuzzyMatcher<'t> {
    /// Creates a matcher over `trie`.
    pub fn new(trie: &'t LanaiTrie, options: SearchOptions) -> Self {
        Self { trie, options }
    }

    /// Options this matcher searches with.
    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Finds every stored word within budget of `query`.
    pub fn find<Q>(&self, query: Q) -> BTreeSet<String>
    where
        Q: AsRef<str>,
    {
        self.find_with_stats(query).0
    }

    /// Like [`find`](Self::find), also returning search counters.
    pub fn find_with_stats<Q>(&self, query: Q) -> (BTreeSet<String>, SearchStats)
    where
        Q: AsRef<str>,
    {
        let processed = self.trie.normalize(query.as_ref());
        let chars: Vec<char> = processed.chars().collect();

        let mut walk = Walk {
            query: &chars,
            max_mistakes: self.options.max_mistakes,
            matches: BTreeSet::new(),
            stats: SearchStats::default(),
        };
        let root = Frame {
            node: self.trie.root(),
            path: Vec::new(),
            previous: first_row(chars.len()),
            pre_previous: DistanceRow::new(),
        };

        let exact = match self.options.strategy {
            SearchStrategy::DepthFirst => walk.depth_first(root),
            SearchStrategy::BestFirst => walk.best_first(root),
        };

        let result = match exact {
            Some(word) => BTreeSet::from([word]),
            None => walk.matches,
        };
        let mut stats = walk.stats;
        stats.matches = result.len();

        tracing::debug!(
            query = %processed,
            max_mistakes = self.options.max_mistakes,
            strategy = ?self.options.strategy,
            exact = exact_hit(&result, &processed),
            matches = stats.matches,
            edges = stats.edges_visited,
            rows = stats.rows_computed,
            pruned_by_length = stats.pruned_by_length,
            pruned_by_row = stats.pruned_by_row,
            "Fuzzy search finished"
        );

        (result, stats)
    }
}

fn exact_hit(result: &BTreeSet<String>, query: &str) -> bool {
    result.len() == 1 && result.contains(query)
}

/// A branch waiting to be explored.
#[derive(Debug)]
struct Frame<'t> {
    node: &'t TrieNode,
    /// Characters from the root to `node`
    path: Vec<char>,
    /// Row for `path`
    previous: DistanceRow,
    /// Row for `path` minus its last character
    pre_previous: DistanceRow,
}

enum Step<'t> {
    Pruned,
    Exact(String),
    Continue(Frame<'t>),
}

struct Walk<'q> {
    query: &'q [char],
    max_mistakes: usize,
    matches: BTreeSet<String>,
    stats: SearchStats,
}

impl Walk<'_> {
    fn depth_first<'t>(&mut self, root: Frame<'t>) -> Option<String> {
        let mut stack = vec![root];

        while let Some(frame) = stack.pop() {
            for edge in frame.node.edges() {
                match self.descend(&frame, edge) {
                    Step::Exact(word) => return Some(word),
                    Step::Continue(child) => stack.push(child),
                    Step::Pruned => {}
                }
            }
        }

        None
    }

    fn best_first<'t>(&mut self, root: Frame<'t>) -> Option<String> {
        let mut queue = BinaryHeap::new();
        let mut order = 0usize;
        queue.push(Pending {
            priority: 0,
            order,
            frame: root,
        });

        while let Some(Pending { frame, .. }) = queue.pop() {
            for edge in frame.node.edges() {
                match self.descend(&frame, edge) {
                    Step::Exact(word) => return Some(word),
                    Step::Continue(child) => {
                        order += 1;
                        queue.push(Pending {
                            priority: self.priority(&child),
                            order,
                            frame: child,
                        });
                    }
                    Step::Pruned => {}
                }
            }
        }

        None
    }

    /// Zero while the path is still a prefix of the query, otherwise the
    /// path's distance to the whole query.
    fn priority(&self, frame: &Frame<'_>) -> usize {
        let depth = frame.path.len();
        if depth <= self.query.len() && frame.previous[depth] == 0 {
            0
        } else {
            frame.previous[self.query.len()]
        }
    }

    /// Consumes `edge` below `frame`, one row per label character.
    fn descend<'t>(&mut self, frame: &Frame<'t>, edge: &'t TrieEdge) -> Step<'t> {
        self.stats.edges_visited += 1;

        let limit = self.query.len() + self.max_mistakes;
        let mut path = frame.path.clone();
        let mut previous = frame.previous.clone();
        let mut pre_previous = frame.pre_previous.clone();

        for &ch in edge.label() {
            if path.len() >= limit {
                self.stats.pruned_by_length += 1;
                return Step::Pruned;
            }

            let current = next_row(self.query, ch, path.last().copied(), &previous, &pre_previous);
            self.stats.rows_computed += 1;
            path.push(ch);
            pre_previous = std::mem::replace(&mut previous, current);

            if row_min(&previous) > self.max_mistakes {
                self.stats.pruned_by_row += 1;
                return Step::Pruned;
            }
        }

        let node = edge.target();
        let distance = previous[self.query.len()];
        if node.is_word_end() && distance <= self.max_mistakes {
            let word: String = path.iter().collect();
            if distance == 0 {
                return Step::Exact(word);
            }
            tracing::trace!(word = %word, distance, "Fuzzy candidate");
            self.matches.insert(word);
        }

        Step::Continue(Frame {
            node,
            path,
            previous,
            pre_previous,
        })
    }
}

/// Heap entry; the smallest priority pops first, ties in discovery order.
struct Pending<'t> {
    priority: usize,
    order: usize,
    frame: Frame<'t>,
}

impl PartialEq for Pending<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.order == other.order
    }
}

impl Eq for Pending<'_> {}

impl PartialOrd for Pending<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pending<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        (other.priority, other.order).cmp(&(self.priority, self.order))
    }
}
