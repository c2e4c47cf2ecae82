// Copyright (c) 2025 Lanai Spell Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Incremental Damerau-Levenshtein rows.
//!
//! The edit-distance table is built one row per consumed text character.
//! Row `i` holds the distance between the first `i` text characters and
//! every prefix of the query, so row `i` only depends on rows `i - 1` and
//! `i - 2` (the latter for adjacent transpositions). This lets the fuzzy
//! matcher extend the table while walking down the trie instead of
//! recomputing it per word.
//!
//! The variant computed here is the restricted one (optimal string
//! alignment): a transposed pair is never edited again.

/// One row of the edit-distance table, indexed by query prefix length.
pub type DistanceRow = Vec<usize>;

/// Row for the empty text prefix: `j` insertions reach query prefix `j`.
pub fn first_row(query_len: usize) -> DistanceRow {
    (0..=query_len).collect()
}

/// Computes the row following `previous` after consuming text char `ch`.
///
/// `prev_ch` is the text character consumed before `ch` (if any) and
/// `pre_previous` the row computed before `previous`. Both are only read
/// when a transposition is possible, so they may be empty for the first row.
pub fn next_row(
    query: &[char],
    ch: char,
    prev_ch: Option<char>,
    previous: &[usize],
    pre_previous: &[usize],
) -> DistanceRow {
    debug_assert_eq!(previous.len(), query.len() + 1);

    let mut current = Vec::with_capacity(previous.len());
    current.push(previous[0] + 1);

    for j in 1..=query.len() {
        let cost = usize::from(query[j - 1] != ch);

        let deletion = previous[j] + 1;
        let insertion = current[j - 1] + 1;
        let substitution = previous[j - 1] + cost;
        let mut best = deletion.min(insertion).min(substitution);

        if let Some(prev_ch) = prev_ch {
            if j > 1 && ch == query[j - 2] && prev_ch == query[j - 1] {
                best = best.min(pre_previous[j - 2] + cost);
            }
        }

        current.push(best);
    }

    current
}

/// Smallest entry of a row.
///
/// Row minima never decrease as more text is consumed, so a row whose
/// minimum exceeds the budget rules out every extension of that text.
pub fn row_min(row: &[usize]) -> usize {
    row.iter().copied().min().unwrap_or(usize::MAX)
}

/// Edit distance between two whole strings, counted in `char`s.
///
/// Uses the same recurrence as the trie search, which makes it a handy
/// reference when checking search results.
pub fn edit_distance(text: &str, query: &str) -> usize {
    let query: Vec<char> = query.chars().collect();

    let mut pre_previous = DistanceRow::new();
    let mut previous = first_row(query.len());
    let mut prev_ch = None;

    for ch in text.chars() {
        let current = next_row(&query, ch, prev_ch, &previous, &pre_previous);
        pre_previous = std::mem::replace(&mut previous, current);
        prev_ch = Some(ch);
    }

    previous[query.len()]
}
