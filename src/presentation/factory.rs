//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::Path;

use crate::application::{EditUseCase, ExportUseCase, TreeModel};
use crate::domain::entities::ExclusionSet;
use crate::domain::value_objects::PathSyntax;
use crate::infrastructure::{LocalTree, PackIgnoreRepository};

/// Type alias for the concrete ExportUseCase with all dependencies
pub type ConcreteExportUseCase = ExportUseCase<PackIgnoreRepository>;

/// Type alias for the concrete EditUseCase with all dependencies
pub type ConcreteEditUseCase = EditUseCase<PackIgnoreRepository>;

/// Create an export use case backed by `.packignore` files on disk
pub fn create_export_use_case() -> ConcreteExportUseCase {
    ExportUseCase::new(PackIgnoreRepository::new())
}

/// Create an edit use case backed by `.packignore` files on disk
pub fn create_edit_use_case() -> ConcreteEditUseCase {
    EditUseCase::new(PackIgnoreRepository::new())
}

/// Tree source over the directory at `root`
pub fn create_tree_source(root: &Path, syntax: PathSyntax) -> LocalTree {
    LocalTree::new(root, syntax)
}

/// Tree model over the directory at `root`
pub fn create_tree_model(root: &Path, exclusions: ExclusionSet) -> TreeModel<LocalTree> {
    let source = create_tree_source(root, exclusions.syntax());
    TreeModel::new(source, exclusions)
}
