//! Exclusion set entity - prefix tree of excluded paths
//!
//! Paths are stored one node per segment. A node marked excluded covers its
//! whole subtree, so coverage queries walk at most one node per segment of the
//! queried path, whatever the size of the set.
//!
//! Every leaf of the tree is an excluded node: `remove` prunes ancestors that
//! no longer lead to an exclusion. `has_exclusions_under` relies on this.
//!
//! There is no re-inclusion. Once `a` is excluded, `a/b` stays covered until
//! `a` itself is removed.

use std::borrow::Cow;
use std::collections::BTreeMap;

use crate::domain::value_objects::PathSyntax;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Node {
    /// Segment spelling as first inserted (keys may be case-folded)
    name: String,
    excluded: bool,
    children: BTreeMap<String, Node>,
}

impl Node {
    fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    fn is_dead(&self) -> bool {
        !self.excluded && self.children.is_empty()
    }

    fn count(&self) -> usize {
        usize::from(self.excluded) + self.children.values().map(Node::count).sum::<usize>()
    }
}

/// Set of excluded paths, stored as a prefix tree keyed by path segment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    syntax: PathSyntax,
    root: Node,
}

impl ExclusionSet {
    /// Empty set using `/` separators and case-sensitive segments.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_syntax(syntax: PathSyntax) -> Self {
        Self {
            syntax,
            root: Node::default(),
        }
    }

    /// Build a set from a flat list of paths.
    pub fn from_paths<I, S>(syntax: PathSyntax, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::with_syntax(syntax);
        set.from_flat_list(paths);
        set
    }

    pub fn syntax(&self) -> PathSyntax {
        self.syntax
    }

    /// Mark `path` as excluded.
    ///
    /// Returns `true` if the path was not already explicitly excluded.
    /// Paths without segments are ignored.
    pub fn insert(&mut self, path: &str) -> bool {
        let syntax = self.syntax;
        let mut node = &mut self.root;
        let mut depth = 0;
        for segment in syntax.segments(path) {
            node = node
                .children
                .entry(syntax.key(segment).into_owned())
                .or_insert_with(|| Node::named(segment));
            depth += 1;
        }
        if depth == 0 || node.excluded {
            return false;
        }
        node.excluded = true;
        true
    }

    /// Drop every exclusion recorded at or beneath `path`.
    ///
    /// Returns `true` if anything was removed. Exclusions recorded on an
    /// ancestor of `path` are untouched, so `path` may still be covered.
    pub fn remove(&mut self, path: &str) -> bool {
        let keys = self.keys(path);
        if keys.is_empty() {
            return false;
        }
        detach(&mut self.root, &keys)
    }

    /// True if `path` or any of its ancestors is excluded.
    pub fn covers(&self, path: &str) -> bool {
        let mut node = &self.root;
        for segment in self.syntax.segments(path) {
            if node.excluded {
                return true;
            }
            match node.children.get(self.syntax.key(segment).as_ref()) {
                Some(child) => node = child,
                None => return false,
            }
        }
        node.excluded
    }

    /// The shortest excluded prefix of `path`, i.e. the exclusion responsible
    /// for covering it.
    pub fn cover(&self, path: &str) -> Option<String> {
        let mut node = &self.root;
        let mut prefix = String::new();
        for segment in self.syntax.segments(path) {
            node = node.children.get(self.syntax.key(segment).as_ref())?;
            prefix = self.syntax.join(&prefix, &node.name);
            if node.excluded {
                return Some(prefix);
            }
        }
        None
    }

    /// True if `path` itself was explicitly excluded.
    pub fn contains(&self, path: &str) -> bool {
        !self.syntax.is_malformed(path) && self.find(path).is_some_and(|node| node.excluded)
    }

    /// True if an exclusion is recorded at `path` or anywhere beneath it.
    ///
    /// The empty path asks about the whole set.
    pub fn has_exclusions_under(&self, path: &str) -> bool {
        self.find(path).is_some_and(|node| !node.is_dead())
    }

    /// Every explicitly excluded path, pre-order, children in key order.
    pub fn to_flat_list(&self) -> Vec<String> {
        let mut out = Vec::new();
        collect(&self.root, "", self.syntax, &mut out);
        out
    }

    /// Replace the contents of the set with `paths`.
    pub fn from_flat_list<I, S>(&mut self, paths: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.clear();
        for path in paths {
            self.insert(path.as_ref());
        }
    }

    /// Number of explicitly excluded paths.
    pub fn len(&self) -> usize {
        self.root.count()
    }

    pub fn is_empty(&self) -> bool {
        self.root.children.is_empty()
    }

    pub fn clear(&mut self) {
        self.root = Node::default();
    }

    fn keys<'a>(&self, path: &'a str) -> Vec<Cow<'a, str>> {
        self.syntax
            .segments(path)
            .map(|segment| self.syntax.key(segment))
            .collect()
    }

    fn find(&self, path: &str) -> Option<&Node> {
        let mut node = &self.root;
        for segment in self.syntax.segments(path) {
            node = node.children.get(self.syntax.key(segment).as_ref())?;
        }
        Some(node)
    }
}

fn detach(node: &mut Node, keys: &[Cow<'_, str>]) -> bool {
    match keys {
        [] => false,
        [last] => node.children.remove(last.as_ref()).is_some(),
        [first, rest @ ..] => {
            let Some(child) = node.children.get_mut(first.as_ref()) else {
                return false;
            };
            let removed = detach(child, rest);
            if removed && child.is_dead() {
                node.children.remove(first.as_ref());
            }
            removed
        }
    }
}

fn collect(node: &Node, prefix: &str, syntax: PathSyntax, out: &mut Vec<String>) {
    for child in node.children.values() {
        let path = syntax.join(prefix, &child.name);
        if child.excluded {
            out.push(path.clone());
        }
        collect(child, &path, syntax, out);
    }
}
