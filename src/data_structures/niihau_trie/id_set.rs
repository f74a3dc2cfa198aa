// Copyright (c) 2025 Niihau Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Identifier set stored at each trie position.
//!
//! An `IdSet` holds the distinct identifiers whose key terminates at one node.
//! It is also used transiently by prefix queries to deduplicate identifiers
//! collected from several nodes.

use fnv::FnvBuildHasher;
use hashbrown::HashSet;
use std::hash::Hash;

/// Marker trait for values the index can store.
///
/// Identifiers are opaque to the index: they only need value equality,
/// hashing and cheap cloning when results are materialized.
pub trait Identifier: Eq + Hash + Clone {}

impl<T: Eq + Hash + Clone> Identifier for T {}

/// Unordered collection of distinct identifiers.
#[derive(Debug, Clone)]
pub struct IdSet<I: Identifier> {
    ids: HashSet<I, FnvBuildHasher>,
}

impl<I: Identifier> IdSet<I> {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self {
            ids: HashSet::with_hasher(FnvBuildHasher::default()),
        }
    }

    /// Adds `id` if absent.
    ///
    /// # Returns
    ///
    /// `true` if the identifier was not already a member.
    pub fn add(&mut self, id: I) -> bool {
        self.ids.insert(id)
    }

    /// Removes `id` if present.
    ///
    /// # Returns
    ///
    /// `true` if the identifier was a member.
    pub fn remove(&mut self, id: &I) -> bool {
        self.ids.remove(id)
    }

    /// Returns `true` if `id` is a member.
    pub fn contains(&self, id: &I) -> bool {
        self.ids.contains(id)
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns `true` if the set has no members.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Materializes the current members. Order is unspecified.
    pub fn values(&self) -> Vec<I> {
        self.ids.iter().cloned().collect()
    }

    /// Borrowing iterator over the members.
    pub fn iter(&self) -> impl Iterator<Item = &I> + '_ {
        self.ids.iter()
    }
}

impl<I: Identifier> Default for IdSet<I> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_is_idempotent() {
        let mut set = IdSet::new();
        assert!(set.add(7u32));
        assert!(!set.add(7u32));
        assert_eq!(set.len(), 1);
        assert_eq!(set.values(), vec![7]);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut set = IdSet::new();
        set.add(1u32);
        set.add(2u32);
        assert!(!set.remove(&3));
        assert_eq!(set.len(), 2);

        assert!(set.remove(&1));
        assert!(!set.contains(&1));
        assert!(set.contains(&2));
    }

    #[test]
    fn test_values_materializes_every_member() {
        let mut set = IdSet::new();
        for id in ["a", "b", "c", "b"] {
            set.add(id);
        }
        let mut values = set.values();
        values.sort_unstable();
        assert_eq!(values, vec!["a", "b", "c"]);
        assert_eq!(set.iter().count(), 3);
    }

    #[test]
    fn test_empty_set() {
        let set = IdSet::<u64>::default();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert!(set.values().is_empty());
    }
}
