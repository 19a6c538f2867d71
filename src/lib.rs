//! packignore - exclusion-aware archive manifests
//!
//! Mark files and directories of a tree as excluded, render the tree with
//! tri-state checkboxes, and list exactly the files an archive of the tree
//! must contain. Excluded directories are never opened.
//!
//! ```
//! use packignore::{enumerate, ExclusionSet, MemoryTree, PathSyntax};
//!
//! let tree = MemoryTree::from_files(["build/out.o", "src/tmp/x.log", "src/main.c", "README"])
//!     .recording();
//! let exclusions = ExclusionSet::from_paths(PathSyntax::default(), ["build", "src/tmp"]);
//!
//! let files: Vec<String> = enumerate(&tree, &exclusions)?.collect();
//! assert_eq!(files, ["README", "src/main.c"]);
//! assert!(!tree.was_read("build"));
//! # Ok::<(), packignore::PackError>(())
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{EditUseCase, ExportOptions, ExportResult, ExportUseCase, TreeModel};
pub use config::Config;
pub use domain::entities::ExclusionSet;
pub use domain::ports::{ExclusionRepository, TreeSource};
pub use domain::services::{derive_state, enumerate, Diagnostic, Enumeration, Manifest};
pub use domain::value_objects::{EntryKind, PathSyntax, TreeEntry, TriState};
pub use error::{PackError, PackResult};
pub use infrastructure::{LocalFs, LocalTree, MemoryTree, PackIgnoreRepository};
