//! Test modules for the Niihau index.
//!
//! This module contains crate-level tests that cut across components:
//! - Configuration loading and validation
//! - Error type behaviour
//! - Property-based and table-driven tests of the trie
//! - Shared strategies and fixtures

pub mod error_tests;
pub mod test_utils;

pub use test_utils::{id_strategy, key_strategy, TestFixture};
