//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod exclusion_repository;
pub mod file_system;

pub use exclusion_repository::{ExclusionRepository, RepositoryError, RepositoryResult};
pub use file_system::{FileSystem, FsError, FsResult, TreeSource};
