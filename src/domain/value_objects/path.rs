//! Path syntax value object
//!
//! Splits separator-delimited path strings into segments and folds segments
//! into lookup keys. The separator and case sensitivity are fixed when the
//! syntax is constructed.
//!
//! - Empty segments (leading, trailing or doubled separators) are dropped
//! - `.` segments are dropped, so `./build` and `build` name the same path
//! - A path with no remaining segments is malformed and names nothing

use std::borrow::Cow;
use std::fmt;

/// Separator used when nothing else is configured.
pub const DEFAULT_SEPARATOR: char = '/';

/// How path strings are split and compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PathSyntax {
    separator: char,
    case_sensitive: bool,
}

impl Default for PathSyntax {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR,
            case_sensitive: true,
        }
    }
}

impl PathSyntax {
    pub fn new(separator: char, case_sensitive: bool) -> Self {
        Self {
            separator,
            case_sensitive,
        }
    }

    pub fn separator(&self) -> char {
        self.separator
    }

    /// Iterate over the meaningful segments of `path`.
    pub fn segments<'a>(&self, path: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        let separator = self.separator;
        path.split(separator)
            .filter(|segment| !segment.is_empty() && *segment != ".")
    }

    /// Lookup key for a single segment.
    pub fn key<'a>(&self, segment: &'a str) -> Cow<'a, str> {
        if self.case_sensitive {
            Cow::Borrowed(segment)
        } else {
            Cow::Owned(segment.to_lowercase())
        }
    }

    /// True if `path` contains no segments at all (`""`, `"/"`, `"./"`).
    pub fn is_malformed(&self, path: &str) -> bool {
        self.segments(path).next().is_none()
    }

    /// Rebuild `path` from its segments, dropping redundant separators.
    pub fn normalize(&self, path: &str) -> String {
        let mut out = String::with_capacity(path.len());
        for segment in self.segments(path) {
            if !out.is_empty() {
                out.push(self.separator);
            }
            out.push_str(segment);
        }
        out
    }

    /// Append `name` to `parent`. An empty parent is the root.
    pub fn join(&self, parent: &str, name: &str) -> String {
        if parent.is_empty() {
            name.to_string()
        } else {
            format!("{}{}{}", parent, self.separator, name)
        }
    }

    /// `path` without its final segment; the root for single-segment paths.
    pub fn parent(&self, path: &str) -> String {
        let segments: Vec<&str> = self.segments(path).collect();
        match segments.split_last() {
            Some((_, parents)) => parents.join(&self.separator.to_string()),
            None => String::new(),
        }
    }

    /// Final segment of `path`, if any.
    pub fn file_name<'a>(&self, path: &'a str) -> Option<&'a str> {
        self.segments(path).last()
    }
}

impl fmt::Display for PathSyntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let case = if self.case_sensitive {
            "case-sensitive"
        } else {
            "case-insensitive"
        };
        write!(f, "'{}' separated, {}", self.separator, case)
    }
}
