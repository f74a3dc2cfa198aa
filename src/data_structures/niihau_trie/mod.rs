//! Niihau Trie Implementation
//!
//! This module provides a concurrent prefix index mapping case-insensitive
//! text keys to sets of opaque record identifiers. It backs "search as you
//! type" lookups over a primary record store: exact lookups, bounded prefix
//! lookups, insertion and removal with pruning.
//!
//! The whole node graph sits behind a single `parking_lot::RwLock`. Writers
//! (`add`, `remove`, `extend`, `clear`) hold it exclusively for the entire
//! walk; readers share it for the entire walk, including prefix traversal.

mod config;
mod error;
mod id_set;
mod node;
mod record_id;

use std::fmt;

use parking_lot::RwLock;

pub use self::config::NiihauTrieConfig;
pub use error::RecordIdError;
pub use id_set::{IdSet, Identifier};
pub use node::TrieNode;
pub use record_id::{RecordId, RECORD_ID_LEN};

/// Copy of a terminal node taken while the write lock was held.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeSnapshot<I> {
    /// Identifiers stored at the node after the operation
    pub values: Vec<I>,

    /// Characters leading to the node's children, ascending
    pub children: Vec<char>,

    /// Whether the operation added a new identifier
    pub inserted: bool,
}

/// Size counters for a trie.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndexStats {
    /// Distinct keys that carry at least one identifier
    pub keys: usize,

    /// Total (key, identifier) pairs
    pub entries: usize,

    /// Nodes in the graph, root included
    pub nodes: usize,
}

/// Niihau Trie is a thread-safe prefix index from text keys to identifier sets.
///
/// Key features:
/// * Case-insensitive keys (folded with `to_lowercase`, walked per `char`)
/// * Idempotent insertion per (key, identifier) pair
/// * Removal prunes paths left without identifiers or children
/// * Bounded prefix queries visiting children in ascending order
/// * Coarse reader/writer locking over the whole graph
pub struct NiihauTrie<I: Identifier = RecordId> {
    /// The root node; represents the empty prefix and never stores identifiers
    root: RwLock<TrieNode<I>>,

    /// Configuration options
    config: NiihauTrieConfig,
}

/// Case-folds a key into the characters used to walk the tree.
fn normalize(key: &str) -> Vec<char> {
    key.to_lowercase().chars().collect()
}

impl<I: Identifier> NiihauTrie<I> {
    /// Creates a new empty `NiihauTrie` with default configuration.
    pub fn new() -> Self {
        Self::with_config(NiihauTrieConfig::default())
    }

    /// Creates a new empty `NiihauTrie` with the specified configuration.
    pub fn with_config(config: NiihauTrieConfig) -> Self {
        Self {
            root: RwLock::new(TrieNode::new()),
            config,
        }
    }

    /// The configuration this trie was built with.
    pub fn config(&self) -> &NiihauTrieConfig {
        &self.config
    }

    /// Associates `id` with `key`.
    ///
    /// Walks from the root one character at a time, creating missing nodes,
    /// and stores `id` at the terminal node unless it is already there.
    ///
    /// # Returns
    ///
    /// A snapshot of the terminal node, or `None` if the key is empty. Empty
    /// keys would address the root, which never stores identifiers.
    pub fn add(&self, key: &str, id: I) -> Option<NodeSnapshot<I>> {
        let chars = normalize(key);
        if chars.is_empty() {
            tracing::trace!("ignoring add for empty key");
            return None;
        }

        let mut root = self.root.write();
        let (node, created) = Self::insert_path(&mut root, &chars);
        let inserted = node.save(id);
        tracing::trace!(key = %key, created, inserted, "add");

        Some(NodeSnapshot {
            values: node.values(),
            children: node.children().collect(),
            inserted,
        })
    }

    /// Walks `chars` from `node`, attaching empty nodes where the path is missing.
    fn insert_path<'a>(node: &'a mut TrieNode<I>, chars: &[char]) -> (&'a mut TrieNode<I>, usize) {
        let mut current = node;
        let mut created = 0;
        for &c in chars {
            let (next, is_new) = current.child_or_insert(c);
            if is_new {
                created += 1;
            }
            current = next;
        }
        (current, created)
    }

    /// Adds every (key, identifier) pair under a single write lock.
    ///
    /// # Returns
    ///
    /// The number of pairs that were not already present.
    pub fn extend<K, T>(&self, entries: T) -> usize
    where
        K: AsRef<str>,
        T: IntoIterator<Item = (K, I)>,
    {
        let mut root = self.root.write();
        let mut inserted = 0;
        let mut skipped = 0;
        for (key, id) in entries {
            let chars = normalize(key.as_ref());
            if chars.is_empty() {
                skipped += 1;
                continue;
            }
            let (node, _) = Self::insert_path(&mut root, &chars);
            if node.save(id) {
                inserted += 1;
            }
        }
        tracing::debug!(inserted, skipped, "bulk insert finished");
        inserted
    }

    /// Removes the pair (`key`, `id`).
    ///
    /// Nodes left with neither identifiers nor children are detached on the
    /// way back up, so a dead suffix collapses to the nearest ancestor still
    /// in use. Removing a pair that does not exist is a no-op.
    ///
    /// # Returns
    ///
    /// `true` if the pair was present.
    pub fn remove(&self, key: &str, id: &I) -> bool {
        let chars = normalize(key);
        if chars.is_empty() {
            return false;
        }

        let mut root = self.root.write();
        let Some(cut) = Self::plan_removal(&root, &chars, id) else {
            tracing::trace!(key = %key, "remove: pair absent");
            return false;
        };

        if let Some(tip) = Self::find_tip_mut(&mut root, &chars) {
            tip.remove_value(id);
        }
        // The root stays even when it becomes prunable.
        if let Some(depth) = cut {
            if let Some(parent) = Self::find_tip_mut(&mut root, &chars[..depth]) {
                parent.remove_child(chars[depth]);
            }
        }
        tracing::trace!(key = %key, pruned = cut.map_or(0, |depth| chars.len() - depth), "remove");
        true
    }

    /// Decides, before anything is mutated, which edge removing (`chars`, `id`)
    /// leaves dangling.
    ///
    /// Returns `None` if the pair is not stored, `Some(None)` if no node
    /// becomes garbage, and `Some(Some(depth))` if the edge `chars[depth]`
    /// must be detached from the node at `depth`.
    fn plan_removal(root: &TrieNode<I>, chars: &[char], id: &I) -> Option<Option<usize>> {
        let mut path = Vec::with_capacity(chars.len());
        let mut current = root;
        for &c in chars {
            current = current.child(c)?;
            path.push(current);
        }
        if !current.contains_value(id) {
            return None;
        }

        // path[depth] is the node reached through chars[depth].
        let last = path.len() - 1;
        let mut cut = None;
        for (depth, node) in path.iter().enumerate().rev() {
            let emptied = if depth == last {
                node.value_count() == 1 && node.is_leaf()
            } else {
                node.value_count() == 0 && node.child_count() == 1
            };
            if !emptied {
                break;
            }
            cut = Some(depth);
        }
        Some(cut)
    }

    /// Follows `chars` from `node` without creating anything.
    fn find_tip<'a>(node: &'a TrieNode<I>, chars: &[char]) -> Option<&'a TrieNode<I>> {
        chars
            .iter()
            .try_fold(node, |current, &c| current.child(c))
    }

    fn find_tip_mut<'a>(node: &'a mut TrieNode<I>, chars: &[char]) -> Option<&'a mut TrieNode<I>> {
        let mut current = node;
        for &c in chars {
            current = current.child_mut(c)?;
        }
        Some(current)
    }

    /// Returns the identifiers stored exactly at `key`.
    ///
    /// Missing paths and nodes without identifiers both yield an empty vector.
    /// Identifiers stored under longer keys are not included.
    pub fn get(&self, key: &str) -> Vec<I> {
        let chars = normalize(key);
        if chars.is_empty() {
            return Vec::new();
        }

        let root = self.root.read();
        Self::find_tip(&root, &chars)
            .map(TrieNode::values)
            .unwrap_or_default()
    }

    /// Returns `true` if `id` is stored exactly at `key`.
    pub fn contains(&self, key: &str, id: &I) -> bool {
        let chars = normalize(key);
        if chars.is_empty() {
            return false;
        }

        let root = self.root.read();
        Self::find_tip(&root, &chars).is_some_and(|node| node.contains_value(id))
    }

    /// Collects up to `limit` distinct identifiers stored at or below `prefix`.
    ///
    /// The subtree is walked depth first; each node contributes its own
    /// identifiers before its children are visited in ascending character
    /// order. The walk stops as soon as the limit is reached. `limit` is
    /// clamped to `max_results` only when the configuration sets one. The
    /// empty prefix covers the whole index.
    pub fn get_many(&self, prefix: &str, limit: usize) -> Vec<I> {
        let limit = self.config.effective_limit(limit);
        let chars = normalize(prefix);
        let mut collector = Collector::new(limit);
        if limit == 0 {
            return collector.finish();
        }

        let root = self.root.read();
        if let Some(tip) = Self::find_tip(&root, &chars) {
            collector.visit(tip);
        }
        collector.finish()
    }

    /// [`get_many`](Self::get_many) with the configured default limit.
    pub fn get_many_default(&self, prefix: &str) -> Vec<I> {
        self.get_many(prefix, self.config.default_limit())
    }

    /// Returns up to `limit` keys starting with `prefix` that carry identifiers.
    ///
    /// Keys come back case-folded, in the same depth-first ascending order
    /// `get_many` visits nodes.
    pub fn keys_with_prefix(&self, prefix: &str, limit: usize) -> Vec<String> {
        let limit = self.config.effective_limit(limit);
        let chars = normalize(prefix);
        let mut keys = Vec::new();
        if limit == 0 {
            return keys;
        }

        let root = self.root.read();
        let Some(tip) = Self::find_tip(&root, &chars) else {
            return keys;
        };

        // Each entry carries the edge into the node and the path length of
        // its parent, so one buffer serves the whole walk.
        let mut path = chars;
        let mut stack = vec![(tip, None, path.len())];
        while let Some((node, edge, depth)) = stack.pop() {
            path.truncate(depth);
            path.extend(edge);
            if !node.ids().is_empty() {
                keys.push(path.iter().collect());
                if keys.len() >= limit {
                    break;
                }
            }
            let depth = path.len();
            stack.extend(
                node.child_nodes()
                    .rev()
                    .map(|(c, child)| (child, Some(c), depth)),
            );
        }
        keys
    }

    /// Number of (key, identifier) pairs in the trie.
    ///
    /// This requires traversing the entire trie, so it's an O(n) operation.
    pub fn len(&self) -> usize {
        self.stats().entries
    }

    /// Returns `true` if no identifiers are stored.
    pub fn is_empty(&self) -> bool {
        self.root.read().is_leaf()
    }

    /// Counts keys, entries and nodes in one traversal.
    pub fn stats(&self) -> IndexStats {
        let root = self.root.read();
        let mut stats = IndexStats::default();
        let mut stack: Vec<&TrieNode<I>> = vec![&*root];
        while let Some(node) = stack.pop() {
            stats.nodes += 1;
            let values = node.value_count();
            if values > 0 {
                stats.keys += 1;
                stats.entries += values;
            }
            stack.extend(node.child_nodes().map(|(_, child)| child));
        }
        stats
    }

    /// Drops every node below the root.
    pub fn clear(&self) {
        let mut root = self.root.write();
        *root = TrieNode::new();
        tracing::debug!("trie cleared");
    }
}

/// Bounded accumulator for prefix queries.
///
/// `seen` deduplicates identifiers reachable through several keys while
/// `found` keeps them in discovery order.
struct Collector<I: Identifier> {
    limit: usize,
    seen: IdSet<I>,
    found: Vec<I>,
}

impl<I: Identifier> Collector<I> {
    fn new(limit: usize) -> Self {
        Self {
            limit,
            seen: IdSet::new(),
            found: Vec::new(),
        }
    }

    fn is_full(&self) -> bool {
        self.found.len() >= self.limit
    }

    /// Depth first from `tip`; children are pushed in reverse so the smallest
    /// character is popped first.
    fn visit(&mut self, tip: &TrieNode<I>) {
        let mut stack = vec![tip];
        while let Some(node) = stack.pop() {
            for id in node.ids().iter() {
                if self.is_full() {
                    return;
                }
                if self.seen.add(id.clone()) {
                    self.found.push(id.clone());
                }
            }
            if self.is_full() {
                return;
            }
            stack.extend(node.child_nodes().rev().map(|(_, child)| child));
        }
    }

    fn finish(self) -> Vec<I> {
        self.found
    }
}

impl<I: Identifier> Default for NiihauTrie<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: Identifier + fmt::Debug> fmt::Debug for NiihauTrie<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NiihauTrie")
            .field("stats", &self.stats())
            .field("config", &self.config)
            .finish()
    }
}

impl<K: AsRef<str>, I: Identifier> FromIterator<(K, I)> for NiihauTrie<I> {
    fn from_iter<T: IntoIterator<Item = (K, I)>>(iter: T) -> Self {
        let trie = Self::new();
        trie.extend(iter);
        trie
    }
}
