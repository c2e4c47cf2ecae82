//! Trie configuration module.
//!
//! This module defines how dictionary words are stored: the case policy and
//! the longest word the trie accepts. Both are fixed for a trie's lifetime.

use super::{ConfigResult, Validate};
use crate::data_structures::lanai_trie::LanaiTrieConfig;
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Trie configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrieSettings {
    /// Whether words and queries keep their case
    pub case_sensitive: bool,

    /// Maximum word length in characters
    pub max_word_len: usize,
}

impl Default for TrieSettings {
    fn default() -> Self {
        let defaults = LanaiTrieConfig::default();
        Self {
            case_sensitive: defaults.case_sensitive,
            max_word_len: defaults.max_word_len,
        }
    }
}

impl TrieSettings {
    /// Builds the trie configuration these settings describe.
    pub fn to_trie_config(&self) -> LanaiTrieConfig {
        LanaiTrieConfig {
            case_sensitive: self.case_sensitive,
            max_word_len: self.max_word_len,
        }
    }
}

impl Validate for TrieSettings {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_word_len == 0 {
            return Err(ConfigError::ValidationError(
                "max_word_len must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
