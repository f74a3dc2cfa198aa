//! Niihau Index Library
//!
//! A concurrent, in-memory prefix index mapping case-insensitive text keys to
//! sets of opaque record identifiers. It serves as a secondary index inside a
//! data-access layer, e.g. for "search as you type" over a primary record
//! store, and is rebuilt from that store rather than persisted.
//!
//! # Architecture
//!
//! - [`data_structures::niihau_trie`] holds the trie engine: identifier sets,
//!   trie nodes and the locked façade.
//! - [`config`] loads and validates layered settings.
//! - [`error`] defines the error types of the ambient layers; index
//!   operations themselves never fail.
//!
//! # Example
//!
//! ```
//! use niihau_index_lib::data_structures::NiihauTrie;
//!
//! let index = NiihauTrie::<u32>::new();
//! index.add("Car", 1);
//! index.add("cart", 2);
//!
//! assert_eq!(index.get("CAR"), vec![1]);
//! assert_eq!(index.get_many("ca", 10).len(), 2);
//! ```

pub mod config;
pub mod data_structures;
pub mod error;

#[cfg(test)]
pub(crate) mod tests;

use data_structures::niihau_trie::{Identifier, NiihauTrie, NiihauTrieConfig};

/// Version information for the Niihau index.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library initialization function.
///
/// Loads the default configuration into the global slot.
pub fn init() -> error::NiihauResult<()> {
    config::init_default_config()?;
    Ok(())
}

/// Builds an empty index using the global index settings, or the built-in
/// defaults when no global configuration has been initialized.
pub fn index_from_global_config<I: Identifier>() -> NiihauTrie<I> {
    let trie_config = config::get_global_config()
        .map(|global| NiihauTrieConfig::from(&global.get().index))
        .unwrap_or_default();
    NiihauTrie::with_config(trie_config)
}
