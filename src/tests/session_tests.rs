//! Tests for spell-check sessions.
//!
//! These drive sessions through in-memory readers and writers and check the
//! exact text each verdict produces.

use proptest::prelude::*;
use std::io::{BufRead, Cursor};
use test_case::test_case;

use super::dictionary_strategy;
use crate::data_structures::lanai_trie::{LanaiTrieConfig, SearchOptions, SearchStrategy};
use crate::error::session::SessionError;
use crate::error::LanaiError;
use crate::session::{
    load_word_list, read_headed_dictionary, OutputFormat, SessionSummary, SpellChecker, Verdict,
};

/// Runs a full headed session and returns its output.
fn run_headed(input: &str, options: SearchOptions, format: OutputFormat) -> (String, SessionSummary) {
    let mut lines = Cursor::new(input.as_bytes()).lines();
    let trie = read_headed_dictionary(&mut lines, LanaiTrieConfig::default()).unwrap();
    let checker = SpellChecker::new(trie, options);

    let mut out = Vec::new();
    let summary = checker.run(lines, &mut out, format).unwrap();
    (String::from_utf8(out).unwrap(), summary)
}

#[test_case(SearchStrategy::DepthFirst ; "depth first")]
#[test_case(SearchStrategy::BestFirst ; "best first")]
fn test_text_session(strategy: SearchStrategy) {
    let input = "4\nCat\ncats\nhat\nform\ncat\n\nBAT\nfrom\ndog\n";
    let (output, summary) = run_headed(
        input,
        SearchOptions::new().strategy(strategy),
        OutputFormat::Text,
    );

    assert_eq!(
        output,
        "cat - ok\nbat -> cat, hat\nfrom -> form\ndog - ?\n"
    );
    assert_eq!(
        summary,
        SessionSummary {
            queries: 4,
            ok: 1,
            suggested: 2,
            unknown: 1,
        }
    );
}

#[test]
fn test_json_session() {
    let input = "2\ncat\nhat\nbat\nhat\n";
    let (output, _) = run_headed(input, SearchOptions::new(), OutputFormat::Json);

    let lines: Vec<serde_json::Value> = output
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["query"], "bat");
    assert_eq!(lines[0]["verdict"], "suggest");
    assert_eq!(lines[0]["matches"], serde_json::json!(["cat", "hat"]));
    assert_eq!(lines[1]["verdict"], "ok");
    assert_eq!(lines[1]["matches"], serde_json::json!(["hat"]));
}

#[test]
fn test_wider_budget_from_options() {
    let input = "2\ncat\ncats\nbat\n";
    let (output, _) = run_headed(input, SearchOptions::new().max_mistakes(2), OutputFormat::Text);
    assert_eq!(output, "bat -> cat, cats\n");
}

#[test]
fn test_header_may_follow_blank_lines() {
    let input = "\n  \n 1 \nword\nward\n";
    let (output, summary) = run_headed(input, SearchOptions::new(), OutputFormat::Text);
    assert_eq!(output, "ward -> word\n");
    assert_eq!(summary.queries, 1);
}

#[test]
fn test_empty_dictionary_session() {
    let (output, summary) = run_headed("0\nanything\n", SearchOptions::new(), OutputFormat::Text);
    assert_eq!(output, "anything - ?\n");
    assert_eq!(summary.unknown, 1);
}

#[test]
fn test_missing_header() {
    let mut lines = Cursor::new("\n\n".as_bytes()).lines();
    let err = read_headed_dictionary(&mut lines, LanaiTrieConfig::default()).unwrap_err();
    assert!(matches!(err, LanaiError::Session(SessionError::MissingHeader)));
}

#[test]
fn test_invalid_header() {
    let mut lines = Cursor::new("\nthree\ncat\n".as_bytes()).lines();
    let err = read_headed_dictionary(&mut lines, LanaiTrieConfig::default()).unwrap_err();
    match err {
        LanaiError::Session(e) => assert_eq!(
            e,
            SessionError::InvalidHeader {
                line: 2,
                text: "three".to_string(),
            }
        ),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_truncated_dictionary() {
    let mut lines = Cursor::new("3\ncat\n\nhat\n".as_bytes()).lines();
    let err = read_headed_dictionary(&mut lines, LanaiTrieConfig::default()).unwrap_err();
    match err {
        LanaiError::Session(e) => assert_eq!(
            e,
            SessionError::TruncatedDictionary {
                expected: 3,
                found: 2,
            }
        ),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_rejected_dictionary_word() {
    let config = LanaiTrieConfig {
        max_word_len: 3,
        ..LanaiTrieConfig::default()
    };
    let mut lines = Cursor::new("2\ncat\nhorse\n".as_bytes()).lines();
    let err = read_headed_dictionary(&mut lines, config).unwrap_err();
    assert!(matches!(err, LanaiError::Trie(_)));
}

#[test]
fn test_load_word_list() {
    let trie = load_word_list(
        Cursor::new("  Apple\n\nbanana\napple\n".as_bytes()),
        LanaiTrieConfig::default(),
    )
    .unwrap();

    assert_eq!(trie.len(), 2);
    assert_eq!(trie.words(), vec!["apple", "banana"]);
}

#[test]
fn test_check_reports_verdicts() {
    let trie = load_word_list(Cursor::new("form\nfort\n".as_bytes()), LanaiTrieConfig::default())
        .unwrap();
    let checker = SpellChecker::new(trie, SearchOptions::new());

    let report = checker.check("  FORM ");
    assert_eq!(report.query, "form");
    assert_eq!(report.verdict, Verdict::Ok);
    assert_eq!(report.matches, vec!["form"]);

    let report = checker.check("fro");
    assert_eq!(report.verdict, Verdict::Unknown);
    assert!(report.matches.is_empty());

    let report = checker.check("forn");
    assert_eq!(report.verdict, Verdict::Suggest);
    assert_eq!(report.to_string(), "forn -> form, fort");
}

proptest! {
    // Property: every dictionary word checks as ok
    #[test]
    fn prop_dictionary_words_check_ok(words in dictionary_strategy()) {
        let text = words.join("\n");
        let trie = load_word_list(Cursor::new(text.as_bytes()), LanaiTrieConfig::default()).unwrap();
        let checker = SpellChecker::new(trie, SearchOptions::new());

        for word in &words {
            let report = checker.check(word);
            prop_assert_eq!(report.verdict, Verdict::Ok);
            prop_assert_eq!(report.matches, vec![word.clone()]);
        }
    }
}
