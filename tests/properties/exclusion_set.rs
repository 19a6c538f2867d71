//! Property tests for exclusion set coverage and persistence.

use proptest::prelude::*;

use packignore::infrastructure::repositories::{parse_lines, render};
use packignore::{ExclusionSet, PathSyntax};

/// Paths over a tiny alphabet so generated paths share prefixes often.
fn path() -> impl Strategy<Value = String> {
    let segment = prop::sample::select(vec!["a", "b", "c", "d"]);
    prop::collection::vec(segment, 1..=4).prop_map(|segments| segments.join("/"))
}

fn paths() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(path(), 0..12)
}

/// Reference answer: some inserted path is `query` or one of its ancestors.
fn covered_by(inserted: &[String], query: &str) -> bool {
    inserted
        .iter()
        .any(|p| query == p || query.starts_with(&format!("{p}/")))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: `covers` equals "the path or an ancestor was inserted".
    #[test]
    fn property_covers_matches_prefix_model(inserted in paths(), query in path()) {
        let set = ExclusionSet::from_paths(PathSyntax::default(), &inserted);
        prop_assert_eq!(set.covers(&query), covered_by(&inserted, &query));
    }

    /// PROPERTY: Every descendant of an inserted path is covered.
    #[test]
    fn property_descendants_are_covered(inserted in path(), suffix in path()) {
        let mut set = ExclusionSet::new();
        set.insert(&inserted);
        prop_assert!(set.covers(&inserted));
        let descendant = format!("{inserted}/{suffix}");
        prop_assert!(set.covers(&descendant));
    }

    /// PROPERTY: Rebuilding from the flat list answers every query the same way.
    #[test]
    fn property_flat_list_preserves_coverage(inserted in paths(), queries in paths()) {
        let set = ExclusionSet::from_paths(PathSyntax::default(), &inserted);
        let mut rebuilt = ExclusionSet::new();
        rebuilt.from_flat_list(set.to_flat_list());

        for query in &queries {
            prop_assert_eq!(set.covers(query), rebuilt.covers(query));
        }
        prop_assert_eq!(rebuilt.to_flat_list(), set.to_flat_list());
    }

    /// PROPERTY: The file format keeps every exclusion.
    #[test]
    fn property_file_format_preserves_exclusions(inserted in paths()) {
        let set = ExclusionSet::from_paths(PathSyntax::default(), &inserted);
        let reloaded = ExclusionSet::from_paths(PathSyntax::default(), parse_lines(&render(&set)));
        prop_assert_eq!(reloaded, set);
    }

    /// PROPERTY: After `remove(P)`, P is covered only through a remaining
    /// strict ancestor.
    #[test]
    fn property_remove_leaves_only_ancestor_coverage(inserted in paths(), removed in path()) {
        let mut set = ExclusionSet::from_paths(PathSyntax::default(), &inserted);
        set.remove(&removed);

        let remaining: Vec<String> = inserted
            .iter()
            .filter(|p| !covered_by(std::slice::from_ref(&removed), p))
            .cloned()
            .collect();
        let ancestor_excluded = remaining.iter().any(|p| removed.starts_with(&format!("{p}/")));

        prop_assert_eq!(set.covers(&removed), ancestor_excluded);
        for path in set.to_flat_list() {
            prop_assert!(!covered_by(std::slice::from_ref(&removed), &path));
        }
    }

    /// PROPERTY: Insert and remove accept arbitrary input without panicking.
    #[test]
    fn property_arbitrary_paths_never_panic(s in "(?s).{0,64}") {
        let mut set = ExclusionSet::new();
        set.insert(&s);
        let _ = set.covers(&s);
        let _ = set.has_exclusions_under(&s);
        set.remove(&s);
        prop_assert!(!set.covers(&s));
    }
}
