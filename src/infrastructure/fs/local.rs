//! Local File System Implementation
//!
//! `LocalFs` implements the FileSystem port for local disk operations.
//! `LocalTree` implements the TreeSource port over a real directory.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult, TreeSource};
use crate::domain::value_objects::{EntryKind, PathSyntax, TreeEntry};

/// Local file system implementation
///
/// Writes go through a temporary file in the target directory followed by a
/// rename, so readers never see a half-written file.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    /// Invalid UTF-8 is replaced with U+FFFD, so only the affected lines change.
    fn read(&self, path: &Path) -> FsResult<String> {
        let bytes = std::fs::read(path).map_err(|e| FsError::from_io(path, e))?;
        match String::from_utf8(bytes) {
            Ok(content) => Ok(content),
            Err(err) => {
                tracing::warn!(path = %path.display(), "file is not valid UTF-8; decoding lossily");
                Ok(String::from_utf8_lossy(err.as_bytes()).into_owned())
            }
        }
    }

    fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(parent).map_err(|e| FsError::from_io(parent, e))?;

        let mut temp =
            tempfile::NamedTempFile::new_in(parent).map_err(|e| FsError::from_io(parent, e))?;
        temp.write_all(content.as_bytes())
            .and_then(|()| temp.as_file().sync_all())
            .map_err(|e| FsError::from_io(path, e))?;
        temp.persist(path)
            .map_err(|e| FsError::from_io(path, e.error))?;
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

/// A real directory tree, addressed by root-relative paths.
///
/// Symlinks are reported as files and never followed.
#[derive(Debug, Clone)]
pub struct LocalTree {
    root: PathBuf,
    syntax: PathSyntax,
}

impl LocalTree {
    pub fn new(root: impl Into<PathBuf>, syntax: PathSyntax) -> Self {
        Self {
            root: root.into(),
            syntax,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute location of a root-relative path.
    pub fn resolve(&self, relative: &str) -> PathBuf {
        let mut path = self.root.clone();
        for segment in self.syntax.segments(relative) {
            path.push(segment);
        }
        path
    }
}

impl TreeSource for LocalTree {
    fn list_dir(&self, dir: &str) -> FsResult<Vec<TreeEntry>> {
        let path = self.resolve(dir);
        let reader = std::fs::read_dir(&path).map_err(|e| FsError::from_io(&path, e))?;

        let mut entries = Vec::new();
        for entry in reader {
            let entry = entry.map_err(|e| FsError::from_io(&path, e))?;
            let file_type = entry
                .file_type()
                .map_err(|e| FsError::from_io(entry.path(), e))?;
            let name = match entry.file_name().into_string() {
                Ok(name) => name,
                Err(raw) => {
                    tracing::warn!(
                        dir = %path.display(),
                        name = ?raw,
                        "skipping entry with non UTF-8 name"
                    );
                    continue;
                }
            };
            let kind = if file_type.is_dir() {
                EntryKind::Directory
            } else {
                EntryKind::File
            };
            entries.push(TreeEntry { name, kind });
        }
        Ok(entries)
    }
}
