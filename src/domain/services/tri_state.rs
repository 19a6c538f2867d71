//! Tri-state derivation
//!
//! Computes the checkbox state of a tree row from the exclusion set and the
//! children a `TreeSource` knows about. Nothing is cached; callers derive
//! on demand for the rows they display.
//!
//! For an uncovered directory the rule is:
//! - `Mixed` when at least one reachable descendant is covered and at least
//!   one is not
//! - `Included` otherwise, including the empty directory and the directory
//!   whose every descendant is covered
//!
//! Only directories with exclusions recorded beneath them are listed, and the
//! scan stops as soon as both kinds of descendant have been seen.

use crate::domain::entities::ExclusionSet;
use crate::domain::ports::file_system::TreeSource;
use crate::domain::value_objects::{EntryKind, TriState};

/// Derive the state of the entry at `path`.
pub fn derive_state<S>(set: &ExclusionSet, source: &S, path: &str, kind: EntryKind) -> TriState
where
    S: TreeSource + ?Sized,
{
    TriStateDeriver::new(set, source).derive(path, kind)
}

/// Deriver bound to one exclusion set and one listing.
pub struct TriStateDeriver<'a, S: ?Sized> {
    set: &'a ExclusionSet,
    source: &'a S,
}

#[derive(Debug, Default)]
struct Seen {
    included: bool,
    excluded: bool,
}

impl Seen {
    fn both(&self) -> bool {
        self.included && self.excluded
    }
}

impl<'a, S> TriStateDeriver<'a, S>
where
    S: TreeSource + ?Sized,
{
    pub fn new(set: &'a ExclusionSet, source: &'a S) -> Self {
        Self { set, source }
    }

    pub fn derive(&self, path: &str, kind: EntryKind) -> TriState {
        if self.set.covers(path) {
            return TriState::Excluded;
        }
        if !kind.is_dir() || !self.set.has_exclusions_under(path) {
            return TriState::Included;
        }

        let mut seen = Seen::default();
        self.scan(path, &mut seen);
        if seen.both() {
            TriState::Mixed
        } else {
            TriState::Included
        }
    }

    /// Visit descendants of the uncovered directory `dir`; true once both
    /// kinds have been seen.
    fn scan(&self, dir: &str, seen: &mut Seen) -> bool {
        let children = match self.source.list_dir(dir) {
            Ok(children) => children,
            Err(err) => {
                tracing::trace!(dir, %err, "no children known");
                return false;
            }
        };

        let syntax = self.set.syntax();
        for child in children {
            let path = syntax.join(dir, &child.name);
            if self.set.covers(&path) {
                seen.excluded = true;
            } else {
                seen.included = true;
                if child.is_dir() && self.set.has_exclusions_under(&path) && self.scan(&path, seen)
                {
                    return true;
                }
            }
            if seen.both() {
                return true;
            }
        }
        false
    }
}
