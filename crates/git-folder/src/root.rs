// Copyright 2026 Oxide Computer Company

//! Locating the root of a git working tree without running git.

use camino::{Utf8Path, Utf8PathBuf};
use std::path::{Path, PathBuf};

/// The name of the directory that marks a git repository root.
pub const GIT_DIR_NAME: &str = ".git";

/// Finds the root of the git repository containing `path`.
///
/// Walks from `path` towards the filesystem root, returning the first
/// directory that has a `.git` subdirectory. Returns `None` if no ancestor
/// (including `path` itself) has one. `path` does not need to exist;
/// relative paths are made absolute against the current directory first.
///
/// This only inspects the filesystem, so it works even if git is not
/// installed. It is not atomic with respect to concurrent changes to the
/// directory tree.
///
/// Only a `.git` *directory* counts: linked worktrees and submodules, where
/// `.git` is a file, resolve to the enclosing repository instead.
///
/// `path` must be valid UTF-8. Use [`find_git_root_std`] for arbitrary
/// paths.
pub fn find_git_root(path: impl AsRef<Utf8Path>) -> Option<Utf8PathBuf> {
    // Ancestors of a UTF-8 path are UTF-8, unless a relative path was
    // made absolute against a non-UTF-8 current directory.
    find_git_root_std(path.as_ref())
        .and_then(|root| Utf8PathBuf::from_path_buf(root).ok())
}

/// Like [`find_git_root`], but accepts and returns paths that need not be
/// valid UTF-8.
pub fn find_git_root_std(path: impl AsRef<Path>) -> Option<PathBuf> {
    let path = path.as_ref();
    let start = std::path::absolute(path).unwrap_or_else(|_| path.to_owned());

    let mut candidate = start.as_path();
    loop {
        if candidate.join(GIT_DIR_NAME).is_dir() {
            return Some(candidate.to_owned());
        }
        // parent() is None at the filesystem root.
        candidate = candidate.parent()?;
    }
}
