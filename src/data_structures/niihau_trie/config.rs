// Copyright (c) 2025 Niihau Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Configuration for the Niihau Trie.

/// Configuration for the Niihau Trie.
///
/// Keys are always case-folded, so the only tunables concern how much a
/// prefix query may return.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NiihauTrieConfig {
    /// Optional cap applied to every prefix query, whatever limit the caller asks for
    max_results: Option<usize>,

    /// Limit used by prefix queries that do not name one
    default_limit: usize,
}

impl NiihauTrieConfig {
    /// Create a new default configuration.
    ///
    /// Default values:
    /// - max_results: none, callers' limits are honored as given
    /// - default_limit: 10
    pub fn new() -> Self {
        Self {
            max_results: None,
            default_limit: 10,
        }
    }

    /// Set the hard cap on prefix query results.
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        if max_results == 0 {
            panic!("Max results must be greater than 0");
        }
        self.max_results = Some(max_results);
        self
    }

    /// Set the limit used when a prefix query does not specify one.
    pub fn with_default_limit(mut self, default_limit: usize) -> Self {
        if default_limit == 0 {
            panic!("Default limit must be greater than 0");
        }
        self.default_limit = default_limit;
        self
    }

    /// Get the cap on prefix query results, if one was set
    pub fn max_results(&self) -> Option<usize> {
        self.max_results
    }

    /// Get the limit used by prefix queries that do not name one
    pub fn default_limit(&self) -> usize {
        self.default_limit
    }

    /// Clamp a caller-supplied limit to the configured cap, if any.
    pub fn effective_limit(&self, requested: usize) -> usize {
        self.max_results
            .map_or(requested, |cap| requested.min(cap))
    }
}

impl Default for NiihauTrieConfig {
    fn default() -> Self {
        Self::new()
    }
}
