//! Input Tree Traversal
//!
//! A worklist-based walk over an input path, yielding regular files lazily,
//! and a separate deepest-first deletion pass for consumed input.

use std::io;
use std::path::{Path, PathBuf};

/// Lazily walks a file or directory tree, yielding every regular file
/// transitively under the root. Finite and non-restartable; directory
/// entries are expanded as the iterator advances.
pub struct FileWalker {
    stack: Vec<PathBuf>,
}

/// Starts a walk rooted at `root`. A root that is itself a regular file
/// yields exactly that file.
pub fn walk(root: &Path) -> FileWalker {
    FileWalker {
        stack: vec![root.to_path_buf()],
    }
}

impl Iterator for FileWalker {
    type Item = io::Result<PathBuf>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(path) = self.stack.pop() {
            let metadata = match std::fs::metadata(&path) {
                Ok(metadata) => metadata,
                Err(e) => return Some(Err(e)),
            };

            if metadata.is_dir() {
                let entries = match std::fs::read_dir(&path) {
                    Ok(entries) => entries,
                    Err(e) => return Some(Err(e)),
                };
                for entry in entries {
                    match entry {
                        Ok(entry) => self.stack.push(entry.path()),
                        Err(e) => return Some(Err(e)),
                    }
                }
            } else if metadata.is_file() {
                return Some(Ok(path));
            }
            // Anything else (sockets, dangling links) is not indexable input.
        }

        None
    }
}

/// Deletes a consumed input tree, best effort.
///
/// Collects every path under `root`, then removes them deepest-first so no
/// directory is removed before its contents. Individual failures are logged
/// and do not stop the pass; the input is transient either way.
pub fn remove_tree(root: &Path) {
    let mut paths = Vec::new();
    collect(root, &mut paths);
    paths.sort_by_key(|path| std::cmp::Reverse(path.components().count()));

    for path in paths {
        let result = if path.is_dir() {
            std::fs::remove_dir(&path)
        } else {
            std::fs::remove_file(&path)
        };
        if let Err(e) = result {
            tracing::warn!("Failed to delete {}: {}", path.display(), e);
        }
    }
}

fn collect(path: &Path, paths: &mut Vec<PathBuf>) {
    if path.symlink_metadata().is_err() {
        return;
    }
    paths.push(path.to_path_buf());

    if path.is_dir() {
        let entries = match std::fs::read_dir(path) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!("Failed to list {}: {}", path.display(), e);
                return;
            }
        };
        for entry in entries.flatten() {
            collect(&entry.path(), paths);
        }
    }
}
