//! Repository Implementations
//!
//! Concrete implementations of domain repository ports.

mod packignore;

pub use packignore::{parse_lines, render, PackIgnoreRepository, DEFAULT_IGNORE_FILE};
