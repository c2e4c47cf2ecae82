//! Line-oriented spell-check sessions.
//!
//! A session reads a dictionary, builds a [`LanaiTrie`] from it and then
//! answers one query per input line:
//!
//! ```text
//! 3
//! cat
//! cats
//! hat
//! cat
//! bat
//! dog
//! ```
//!
//! produces
//!
//! ```text
//! cat - ok
//! bat -> cat, hat
//! dog - ?
//! ```
//!
//! The dictionary either precedes the queries, announced by a size line, or
//! comes from a separate word list with one word per line.

use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};
use std::io::{BufRead, Lines, Write};

use serde::{Deserialize, Serialize};

use crate::data_structures::lanai_trie::{LanaiTrie, LanaiTrieConfig, SearchOptions};
use crate::error::session::SessionError;
use crate::error::LanaiResult;

/// How query verdicts are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `word - ok`, `word -> a, b` or `word - ?`
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// Outcome of checking one query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// The query is a dictionary word
    Ok,
    /// The query is unknown but close to some dictionary words
    Suggest,
    /// Nothing in the dictionary is within budget
    Unknown,
}

/// Verdict for one query together with the words that support it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryReport {
    /// The query after case folding
    pub query: String,
    /// What the dictionary says about the query
    pub verdict: Verdict,
    /// Matching dictionary words in sorted order
    pub matches: Vec<String>,
}

impl QueryReport {
    fn new(query: String, matches: BTreeSet<String>) -> Self {
        let verdict = if matches.is_empty() {
            Verdict::Unknown
        } else if matches.contains(&query) {
            Verdict::Ok
        } else {
            Verdict::Suggest
        };
        Self {
            query,
            verdict,
            matches: matches.into_iter().collect(),
        }
    }
}

impl Display for QueryReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.verdict {
            Verdict::Ok => write!(f, "{} - ok", self.query),
            Verdict::Unknown => write!(f, "{} - ?", self.query),
            Verdict::Suggest => write!(f, "{} -> {}", self.query, self.matches.join(", ")),
        }
    }
}

/// Counters for a finished session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Non-blank query lines answered
    pub queries: usize,
    /// Queries found in the dictionary
    pub ok: usize,
    /// Queries answered with suggestions
    pub suggested: usize,
    /// Queries with no word within budget
    pub unknown: usize,
}

impl SessionSummary {
    fn record(&mut self, verdict: Verdict) {
        self.queries += 1;
        match verdict {
            Verdict::Ok => self.ok += 1,
            Verdict::Suggest => self.suggested += 1,
            Verdict::Unknown => self.unknown += 1,
        }
    }
}

/// Checks queries against a finished dictionary.
#[derive(Debug, Clone)]
pub struct SpellChecker {
    trie: LanaiTrie,
    options: SearchOptions,
}

impl SpellChecker {
    /// Creates a checker over a built trie.
    pub fn new(trie: LanaiTrie, options: SearchOptions) -> Self {
        Self { trie, options }
    }

    /// The dictionary this checker answers from.
    pub fn trie(&self) -> &LanaiTrie {
        &self.trie
    }

    /// Checks a single query.
    pub fn check(&self, query: &str) -> QueryReport {
        let query = self.trie.normalize(query.trim()).into_owned();
        let matches = self.trie.search_with(&query, &self.options);
        QueryReport::new(query, matches)
    }

    /// Answers every non-blank line of `lines`, writing one verdict per line.
    pub fn run<B, W>(
        &self,
        lines: Lines<B>,
        out: &mut W,
        format: OutputFormat,
    ) -> LanaiResult<SessionSummary>
    where
        B: BufRead,
        W: Write,
    {
        let mut summary = SessionSummary::default();

        for line in lines {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let report = self.check(&line);
            summary.record(report.verdict);

            match format {
                OutputFormat::Text => writeln!(out, "{report}")?,
                OutputFormat::Json => {
                    serde_json::to_writer(&mut *out, &report)?;
                    writeln!(out)?;
                }
            }
        }
        out.flush()?;

        tracing::info!(
            queries = summary.queries,
            ok = summary.ok,
            suggested = summary.suggested,
            unknown = summary.unknown,
            "Session finished"
        );
        Ok(summary)
    }
}

/// Builds a trie from a word list with one word per line.
///
/// Blank lines are skipped and surrounding whitespace is trimmed.
pub fn load_word_list<B: BufRead>(reader: B, config: LanaiTrieConfig) -> LanaiResult<LanaiTrie> {
    let mut trie = LanaiTrie::with_config(config);
    for line in reader.lines() {
        let line = line?;
        let word = line.trim();
        if !word.is_empty() {
            trie.insert(word)?;
        }
    }

    tracing::debug!(words = trie.len(), nodes = trie.node_count(), "Loaded word list");
    Ok(trie)
}

/// Builds a trie from a size line followed by that many words.
///
/// Only the dictionary part of `lines` is consumed; the remaining lines are
/// left for the queries.
pub fn read_headed_dictionary<B: BufRead>(
    lines: &mut Lines<B>,
    config: LanaiTrieConfig,
) -> LanaiResult<LanaiTrie> {
    let mut line_no = 0usize;

    let expected = loop {
        let Some(line) = lines.next() else {
            return Err(SessionError::MissingHeader.into());
        };
        let line = line?;
        line_no += 1;

        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        break text
            .parse::<usize>()
            .map_err(|_| SessionError::InvalidHeader {
                line: line_no,
                text: text.to_string(),
            })?;
    };

    let mut trie = LanaiTrie::with_config(config);
    let mut found = 0usize;
    while found < expected {
        let Some(line) = lines.next() else {
            return Err(SessionError::TruncatedDictionary { expected, found }.into());
        };
        let line = line?;
        let word = line.trim();
        if word.is_empty() {
            continue;
        }
        trie.insert(word)?;
        found += 1;
    }

    tracing::debug!(
        announced = expected,
        words = trie.len(),
        nodes = trie.node_count(),
        "Read dictionary"
    );
    Ok(trie)
}
