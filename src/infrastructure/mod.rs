//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - File system implementations (LocalFs, LocalTree, MemoryTree)
//! - `repositories/` - Repository implementations (`.packignore` files)

pub mod fs;
pub mod repositories;

// Re-export for convenience
pub use fs::{LocalFs, LocalTree, MemoryTree};
pub use repositories::PackIgnoreRepository;
