//! Property tests for pruned enumeration and tri-state derivation.

use std::collections::BTreeSet;

use proptest::prelude::*;

use packignore::{derive_state, enumerate, EntryKind, ExclusionSet, MemoryTree, PathSyntax, TriState};

fn path() -> impl Strategy<Value = String> {
    let segment = prop::sample::select(vec!["a", "b", "c"]);
    prop::collection::vec(segment, 1..=4).prop_map(|segments| segments.join("/"))
}

fn is_under(path: &str, dir: &str) -> bool {
    path.starts_with(&format!("{dir}/"))
}

/// Files with no file standing where another file needs a directory.
fn files() -> impl Strategy<Value = BTreeSet<String>> {
    prop::collection::btree_set(path(), 1..16).prop_map(|files| {
        files
            .iter()
            .filter(|f| !files.iter().any(|g| is_under(g, f)))
            .cloned()
            .collect()
    })
}

/// Every directory implied by `files`, root excluded.
fn dirs(files: &BTreeSet<String>) -> BTreeSet<String> {
    let mut dirs = BTreeSet::new();
    for file in files {
        let segments: Vec<&str> = file.split('/').collect();
        for end in 1..segments.len() {
            dirs.insert(segments[..end].join("/"));
        }
    }
    dirs
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Enumeration yields exactly the uncovered files.
    #[test]
    fn property_enumeration_yields_uncovered_files(
        files in files(),
        excluded in prop::collection::vec(path(), 0..6),
    ) {
        let tree = MemoryTree::from_files(&files);
        let set = ExclusionSet::from_paths(PathSyntax::default(), &excluded);

        let yielded: BTreeSet<String> = enumerate(&tree, &set).unwrap().collect();
        let expected: BTreeSet<String> =
            files.iter().filter(|f| !set.covers(f)).cloned().collect();

        prop_assert_eq!(yielded, expected);
    }

    /// PROPERTY: No covered directory is ever listed.
    #[test]
    fn property_enumeration_never_opens_covered_dirs(
        files in files(),
        excluded in prop::collection::vec(path(), 0..6),
    ) {
        let tree = MemoryTree::from_files(&files).recording();
        let set = ExclusionSet::from_paths(PathSyntax::default(), &excluded);

        let manifest = enumerate(&tree, &set).unwrap().finish();

        prop_assert!(manifest.is_complete());
        for dir in tree.reads() {
            prop_assert!(!set.covers(&dir), "listed covered dir {}", dir);
        }
    }

    /// PROPERTY: An uncovered directory is Mixed iff it has both a covered
    /// and an uncovered descendant; a covered one is always Excluded.
    #[test]
    fn property_tri_state_matches_descendants(
        files in files(),
        excluded in prop::collection::vec(path(), 0..6),
    ) {
        let tree = MemoryTree::from_files(&files);
        let set = ExclusionSet::from_paths(PathSyntax::default(), &excluded);
        let dirs = dirs(&files);

        for dir in &dirs {
            let state = derive_state(&set, &tree, dir, EntryKind::Directory);
            if set.covers(dir) {
                prop_assert_eq!(state, TriState::Excluded);
                continue;
            }

            let descendants: Vec<&String> = files
                .iter()
                .chain(dirs.iter())
                .filter(|p| is_under(p, dir))
                .collect();
            let any_covered = descendants.iter().any(|p| set.covers(p));
            let any_uncovered = descendants.iter().any(|p| !set.covers(p));
            let expected = if any_covered && any_uncovered {
                TriState::Mixed
            } else {
                TriState::Included
            };
            prop_assert_eq!(state, expected, "dir {}", dir);
        }
    }
}
