// Copyright (c) 2025 Niihau Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the Niihau Trie.
//!
//! A node is one position in the prefix tree. It owns its children outright
//! and carries the identifiers whose key ends exactly at this position.
//! Nodes do no locking; the trie serializes access to the whole graph.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fmt;
use std::mem;

use super::id_set::{IdSet, Identifier};

/// A node in the Niihau Trie.
pub struct TrieNode<I: Identifier> {
    /// Children keyed by the next character, kept in ascending order
    children: BTreeMap<char, TrieNode<I>>,

    /// Identifiers whose key terminates here
    ids: IdSet<I>,
}

impl<I: Identifier> TrieNode<I> {
    /// Creates a new empty trie node.
    pub fn new() -> Self {
        Self {
            children: BTreeMap::new(),
            ids: IdSet::new(),
        }
    }

    /// Returns the child reached through `ch`, if any.
    pub fn child(&self, ch: char) -> Option<&TrieNode<I>> {
        self.children.get(&ch)
    }

    /// Mutable access to the child reached through `ch`, if any.
    pub fn child_mut(&mut self, ch: char) -> Option<&mut TrieNode<I>> {
        self.children.get_mut(&ch)
    }

    /// Returns the child for `ch`, attaching a new empty node first if needed.
    ///
    /// The flag is `true` when a node was created.
    pub fn child_or_insert(&mut self, ch: char) -> (&mut TrieNode<I>, bool) {
        match self.children.entry(ch) {
            Entry::Occupied(entry) => (entry.into_mut(), false),
            Entry::Vacant(entry) => (entry.insert(TrieNode::new()), true),
        }
    }

    /// Attaches `node` under `ch`, replacing any existing subtree.
    pub fn set_child(&mut self, ch: char, node: TrieNode<I>) {
        self.children.insert(ch, node);
    }

    /// Detaches and returns the subtree under `ch`.
    pub fn remove_child(&mut self, ch: char) -> Option<TrieNode<I>> {
        self.children.remove(&ch)
    }

    /// Characters that lead to children, in ascending order.
    pub fn children(&self) -> impl Iterator<Item = char> + '_ {
        self.children.keys().copied()
    }

    /// Child nodes paired with their edge character, in ascending order.
    pub fn child_nodes(&self) -> impl DoubleEndedIterator<Item = (char, &TrieNode<I>)> + '_ {
        self.children.iter().map(|(ch, node)| (*ch, node))
    }

    /// Number of direct children.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Returns `true` if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Adds `id` to this node's identifiers. Returns `true` if it was new.
    pub fn save(&mut self, id: I) -> bool {
        self.ids.add(id)
    }

    /// Removes `id` from this node's identifiers. Returns `true` if it was present.
    pub fn remove_value(&mut self, id: &I) -> bool {
        self.ids.remove(id)
    }

    /// Returns `true` if `id` terminates at this node.
    pub fn contains_value(&self, id: &I) -> bool {
        self.ids.contains(id)
    }

    /// Materializes this node's identifiers.
    pub fn values(&self) -> Vec<I> {
        self.ids.values()
    }

    /// The identifier set stored at this node.
    pub fn ids(&self) -> &IdSet<I> {
        &self.ids
    }

    /// Number of identifiers stored at this node.
    pub fn value_count(&self) -> usize {
        self.ids.len()
    }

    /// A node with neither identifiers nor children must not stay linked.
    pub fn is_prunable(&self) -> bool {
        self.ids.is_empty() && self.is_leaf()
    }
}

impl<I: Identifier> Default for TrieNode<I> {
    fn default() -> Self {
        Self::new()
    }
}

/// Detached subtrees are torn down with an explicit stack, so a chain as long
/// as the longest key never recurses through nested `BTreeMap` drops.
impl<I: Identifier> Drop for TrieNode<I> {
    fn drop(&mut self) {
        let mut pending: Vec<TrieNode<I>> = mem::take(&mut self.children).into_values().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(mem::take(&mut node.children).into_values());
        }
    }
}

impl<I: Identifier + fmt::Debug> fmt::Debug for TrieNode<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrieNode")
            .field("children", &self.children.keys().collect::<Vec<_>>())
            .field("ids", &self.ids)
            .finish()
    }
}
