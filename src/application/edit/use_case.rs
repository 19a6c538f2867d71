//! Edit Use Case
//!
//! Orchestrates load, mutate and save of the exclusion file.

use std::path::Path;

use crate::domain::entities::ExclusionSet;
use crate::domain::ports::ExclusionRepository;
use crate::domain::value_objects::PathSyntax;

use super::result::{EditResult, SaveWarning, StillCovered};

/// Direction of an edit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditAction {
    Exclude,
    Include,
}

/// Edit use case - mutates the exclusion file of a tree
pub struct EditUseCase<R>
where
    R: ExclusionRepository,
{
    repository: R,
}

impl<R> EditUseCase<R>
where
    R: ExclusionRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Load the exclusions stored at `ignore_file`.
    pub fn load(&self, ignore_file: &Path, syntax: PathSyntax) -> ExclusionSet {
        self.repository.load_or_empty(ignore_file, syntax)
    }

    pub fn exclude<S: AsRef<str>>(
        &self,
        ignore_file: &Path,
        syntax: PathSyntax,
        paths: &[S],
    ) -> EditResult {
        self.execute(ignore_file, syntax, paths, EditAction::Exclude)
    }

    pub fn include<S: AsRef<str>>(
        &self,
        ignore_file: &Path,
        syntax: PathSyntax,
        paths: &[S],
    ) -> EditResult {
        self.execute(ignore_file, syntax, paths, EditAction::Include)
    }

    /// Apply `action` to every path and save when anything changed.
    ///
    /// An exclusion file that exists but cannot be read is never overwritten;
    /// the edit is reported with a `SaveWarning` instead.
    pub fn execute<S: AsRef<str>>(
        &self,
        ignore_file: &Path,
        syntax: PathSyntax,
        paths: &[S],
        action: EditAction,
    ) -> EditResult {
        let (mut set, load_error) = match self.repository.load(ignore_file, syntax) {
            Ok(set) => (set, None),
            Err(err) => (ExclusionSet::with_syntax(syntax), Some(err)),
        };
        let mut result = EditResult::new();

        for path in paths {
            let path = path.as_ref();
            if syntax.is_malformed(path) {
                result.malformed.push(path.to_string());
                continue;
            }

            let changed = match action {
                EditAction::Exclude => set.insert(path),
                EditAction::Include => set.remove(path),
            };
            let normalized = syntax.normalize(path);
            if changed {
                result.changed.push(normalized.clone());
            } else {
                result.unchanged.push(normalized.clone());
            }

            if action == EditAction::Include {
                if let Some(cover) = set.cover(&normalized) {
                    result.still_covered.push(StillCovered {
                        path: normalized,
                        cover,
                    });
                }
            }
        }

        if result.has_changes() {
            let saved = match load_error {
                Some(err) => Err(err),
                None => self.repository.save(&set, ignore_file),
            };
            match saved {
                Ok(()) => result.saved = true,
                Err(err) => {
                    let warning = SaveWarning::from(err);
                    tracing::warn!("{warning}");
                    result.save_warning = Some(warning);
                }
            }
        }

        result.exclusions = set.to_flat_list();
        result
    }
}
