//! Export Use Case
//!
//! Orchestrates manifest generation.

use crate::domain::ports::{ExclusionRepository, TreeSource};
use crate::domain::services::enumerate;
use crate::error::PackResult;

use super::options::ExportOptions;
use super::result::ExportResult;

/// Export use case - lists the files an archive of the tree must contain
pub struct ExportUseCase<R>
where
    R: ExclusionRepository,
{
    repository: R,
}

impl<R> ExportUseCase<R>
where
    R: ExclusionRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Enumerate `source` with the exclusions saved at `options.ignore_file`.
    ///
    /// Fails only when the root of `source` cannot be listed.
    pub fn execute<S: TreeSource>(
        &self,
        source: S,
        options: &ExportOptions,
    ) -> PackResult<ExportResult> {
        let exclusions = self
            .repository
            .load_or_empty(&options.ignore_file, options.syntax);
        let manifest = enumerate(source, &exclusions)?.finish();
        Ok(ExportResult::from_manifest(manifest, exclusions.len()))
    }
}
