//! Common test utilities for packignore CLI and scenario tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated instance directory plus a private config home
//! - Assertion macros: `assert_success!`, `assert_output_contains!`
//! - Fixtures: A small game-instance tree used across tests

#![allow(dead_code)]

pub mod assertions;
pub mod env;
pub mod fixtures;

pub use assertions::*;
pub use env::*;
pub use fixtures::*;
