//! File System Implementations
//!
//! Concrete implementations of the FileSystem and TreeSource ports.

mod config_home;
mod local;
mod memory;

pub use config_home::{user_config_dir, CONFIG_HOME_VAR};
pub use local::{LocalFs, LocalTree};
pub use memory::MemoryTree;
