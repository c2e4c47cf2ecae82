//! Search configuration module.
//!
//! This module defines the default mistake budget and traversal strategy
//! used when checking queries against the dictionary.

use super::{ConfigResult, Validate};
use crate::data_structures::lanai_trie::{SearchOptions, SearchStrategy};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Largest mistake budget accepted from configuration.
pub const MAX_MISTAKES_LIMIT: usize = 16;

/// Search configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchSettings {
    /// Largest edit distance a suggestion may have
    pub max_mistakes: usize,

    /// Order in which the trie is explored
    pub strategy: SearchStrategy,
}

impl Default for SearchSettings {
    fn default() -> Self {
        let defaults = SearchOptions::default();
        Self {
            max_mistakes: defaults.max_mistakes,
            strategy: defaults.strategy,
        }
    }
}

impl SearchSettings {
    /// Builds the search options these settings describe.
    pub fn to_search_options(&self) -> SearchOptions {
        SearchOptions::new()
            .max_mistakes(self.max_mistakes)
            .strategy(self.strategy)
    }
}

impl Validate for SearchSettings {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_mistakes > MAX_MISTAKES_LIMIT {
            return Err(ConfigError::ValueOutOfRange {
                key: "search.max_mistakes".to_string(),
                message: format!(
                    "{} exceeds the limit of {MAX_MISTAKES_LIMIT}",
                    self.max_mistakes
                ),
            });
        }

        Ok(())
    }
}
