//! Data structures for the Niihau index.
//!
//! The trie engine lives in [`niihau_trie`]; the commonly used types are
//! re-exported here.

pub mod niihau_trie;

pub use niihau_trie::{IdSet, IndexStats, NiihauTrie, NiihauTrieConfig, RecordId, TrieNode};
