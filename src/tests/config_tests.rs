//! Tests for the configuration module.
//!
//! This module contains tests for configuration loading, validation, and usage.

use super::TestFixture;
use crate::config::search::{SearchSettings, MAX_MISTAKES_LIMIT};
use crate::config::trie::TrieSettings;
use crate::config::{ConfigLoader, LanaiConfig, LogConfig, Validate};
use crate::data_structures::lanai_trie::SearchStrategy;
use crate::error::config::ConfigError;
use crate::session::OutputFormat;

/// Test that default configuration can be created and is valid.
#[test]
fn test_default_config_is_valid() {
    let config = LanaiConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.search.max_mistakes, 1);
    assert_eq!(config.search.strategy, SearchStrategy::DepthFirst);
    assert!(!config.trie.case_sensitive);
    assert_eq!(config.output.format, OutputFormat::Text);
}

/// Test that configuration validation catches invalid values.
#[test]
fn test_config_validation() {
    let mut config = LanaiConfig::default();

    config.trie.max_word_len = 0;
    assert!(config.validate().is_err());

    config.trie.max_word_len = 64;
    config.search.max_mistakes = MAX_MISTAKES_LIMIT + 1;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValueOutOfRange { .. })
    ));

    config.search.max_mistakes = 2;
    config.log.level = "verbose".to_string();
    assert!(config.validate().is_err());

    config.log.level = "debug".to_string();
    assert!(config.validate().is_ok());
}

/// Test loading configuration from a file.
#[test]
fn test_load_config_from_file() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file(
            "config_file_test.toml",
            r#"
            [trie]
            case_sensitive = true

            [search]
            max_mistakes = 2
            strategy = "best-first"
            "#,
        )
        .unwrap();

    // Load the configuration with a unique prefix
    let loader = ConfigLoader::new(Some(&config_path), "TEST_FILE");
    let config = loader.load().unwrap();

    assert!(config.trie.case_sensitive);
    assert_eq!(config.search.max_mistakes, 2);
    assert_eq!(config.search.strategy, SearchStrategy::BestFirst);

    // Other values should be defaults
    assert_eq!(config.trie.max_word_len, TrieSettings::default().max_word_len);
    assert_eq!(config.log.level, "info");
}

/// Test loading configuration from a JSON file.
#[test]
fn test_load_config_from_json() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file(
            "config_json_test.json",
            r#"{ "output": { "format": "json" }, "log": { "level": "warn" } }"#,
        )
        .unwrap();

    let config = ConfigLoader::new(Some(&config_path), "TEST_JSON")
        .load()
        .unwrap();

    assert_eq!(config.output.format, OutputFormat::Json);
    assert_eq!(config.log.level, "warn");
}

/// Test loading configuration with environment variable overrides.
#[test]
fn test_env_var_override() {
    let mut fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file(
            "config_env_test.toml",
            r#"
            [search]
            max_mistakes = 2
            "#,
        )
        .unwrap();

    fixture.set_env("TEST_ENV__SEARCH__MAX_MISTAKES", "3");
    fixture.set_env("TEST_ENV__LOG__LEVEL", "debug");

    let loader = ConfigLoader::new(Some(&config_path), "TEST_ENV");
    let config = loader.load().unwrap();

    // Environment variables take precedence over the file
    assert_eq!(config.search.max_mistakes, 3);
    assert_eq!(config.log.level, "debug");
}

/// Test that a missing configuration file is reported as such.
#[test]
fn test_missing_config_file() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture.temp_dir.path().join("absent.toml");

    let loader = ConfigLoader::new(Some(&path), "TEST_MISSING");
    assert!(matches!(loader.load(), Err(ConfigError::FileNotFound(p)) if p == path));
}

/// Test that an unsupported extension is rejected.
#[test]
fn test_unsupported_extension() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture.create_file("config.ini", "[search]\n").unwrap();

    let loader = ConfigLoader::new(Some(&path), "TEST_EXT");
    assert!(matches!(loader.load(), Err(ConfigError::ParseError(_))));
}

/// Test that loading an invalid configuration file returns an error.
#[test]
fn test_load_invalid_config() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file(
            "invalid.toml",
            r#"
            [search
            max_mistakes = two"
            "#,
        )
        .unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_INVALID");
    assert!(loader.load().is_err());
}

/// Test that loaded values are validated.
#[test]
fn test_load_rejects_invalid_values() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file("out_of_range.toml", "[search]\nmax_mistakes = 99\n")
        .unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_RANGE");
    assert!(matches!(
        loader.load(),
        Err(ConfigError::ValueOutOfRange { .. })
    ));
}

/// Test that settings convert into the structures they configure.
#[test]
fn test_settings_conversion() {
    let trie = TrieSettings {
        case_sensitive: true,
        max_word_len: 12,
    };
    let trie_config = trie.to_trie_config();
    assert!(trie_config.case_sensitive);
    assert_eq!(trie_config.max_word_len, 12);

    let search = SearchSettings {
        max_mistakes: 3,
        strategy: SearchStrategy::BestFirst,
    };
    let options = search.to_search_options();
    assert_eq!(options.max_mistakes, 3);
    assert_eq!(options.strategy, SearchStrategy::BestFirst);
}

/// Test that the default configuration survives a TOML round trip.
#[test]
fn test_default_config_serializes_to_toml() {
    let text = toml::to_string_pretty(&LanaiConfig::default()).unwrap();
    assert!(text.contains("strategy = \"depth-first\""));
    assert!(text.contains("format = \"text\""));

    let parsed: LanaiConfig = toml::from_str(&text).unwrap();
    assert_eq!(parsed.search.max_mistakes, 1);
    assert!(LogConfig::default().validate().is_ok());
}
