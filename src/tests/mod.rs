//! Test modules for Lanai Spell.
//!
//! This module contains crate-level testing infrastructure, including:
//! - Configuration loading and validation tests
//! - Error type and reporting tests
//! - Spell-check session tests
//! - Shared fixtures and proptest strategies
//!
//! Data structure tests live next to the structures they cover.

pub mod config_tests;
pub mod session_tests;

// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{dictionary_strategy, TestFixture};
