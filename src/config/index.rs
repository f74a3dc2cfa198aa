//! Index configuration module.
//!
//! Serializable settings for prefix indexes built by the application. They
//! convert into the builder-style [`NiihauTrieConfig`] used by the trie itself.

use super::{ConfigResult, Validate};
use crate::data_structures::niihau_trie::NiihauTrieConfig;
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Index settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IndexSettings {
    /// Optional cap on identifiers or keys returned by one prefix query
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_results: Option<usize>,

    /// Limit applied when a prefix query does not name one
    pub default_limit: usize,
}

impl Default for IndexSettings {
    fn default() -> Self {
        let trie = NiihauTrieConfig::default();
        Self {
            max_results: trie.max_results(),
            default_limit: trie.default_limit(),
        }
    }
}

impl Validate for IndexSettings {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_results == Some(0) {
            return Err(ConfigError::ValidationError(
                "max_results must be greater than 0".to_string(),
            ));
        }

        if self.default_limit == 0 {
            return Err(ConfigError::ValidationError(
                "default_limit must be greater than 0".to_string(),
            ));
        }

        if let Some(cap) = self.max_results {
            if self.default_limit > cap {
                return Err(ConfigError::ValueOutOfRange {
                    key: "index.default_limit".to_string(),
                    message: format!("{} exceeds max_results ({})", self.default_limit, cap),
                });
            }
        }

        Ok(())
    }
}

impl From<&IndexSettings> for NiihauTrieConfig {
    fn from(settings: &IndexSettings) -> Self {
        let config = NiihauTrieConfig::new().with_default_limit(settings.default_limit);
        match settings.max_results {
            Some(cap) => config.with_max_results(cap),
            None => config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_trie_defaults() {
        let settings = IndexSettings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(NiihauTrieConfig::from(&settings), NiihauTrieConfig::default());
    }

    #[test]
    fn test_no_cap_by_default() {
        let settings = IndexSettings::default();
        assert_eq!(settings.max_results, None);

        let settings = IndexSettings {
            max_results: None,
            default_limit: 50_000,
        };
        assert!(settings.validate().is_ok());
        assert_eq!(NiihauTrieConfig::from(&settings).effective_limit(20_000), 20_000);
    }

    #[test]
    fn test_default_limit_above_cap_is_rejected() {
        let settings = IndexSettings {
            max_results: Some(5),
            default_limit: 6,
        };
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::ValueOutOfRange { .. })
        ));
    }

    #[test]
    fn test_zero_values_are_rejected() {
        let settings = IndexSettings {
            max_results: Some(0),
            default_limit: 1,
        };
        assert!(settings.validate().is_err());

        let settings = IndexSettings {
            max_results: None,
            default_limit: 0,
        };
        assert!(settings.validate().is_err());
    }
}
