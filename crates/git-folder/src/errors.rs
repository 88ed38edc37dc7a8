// Copyright 2026 Oxide Computer Company

//! Error types for locating repositories and running git.

use camino::Utf8PathBuf;
use std::{ffi::OsString, fmt, io};
use thiserror::Error;

/// An error that occurs while opening a [`GitFolder`](crate::GitFolder) or
/// running one of its queries.
///
/// Use [`GitError::kind`] to branch on the category of failure without
/// matching on payloads.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GitError {
    /// No ancestor of the working directory contains a `.git` directory.
    #[error("unable to find git repository root from: {cwd}")]
    NotGitRepository {
        /// The working directory the search started from.
        cwd: Utf8PathBuf,
    },

    /// The git executable could not be launched.
    ///
    /// Any failure to spawn the process maps here while the working
    /// directory still exists, including permission errors.
    #[error("failed to run git at {binary:?} in {cwd}")]
    ExecutableNotFound {
        /// The configured path or name of the git executable.
        binary: String,
        /// The working directory the command would have run in.
        cwd: Utf8PathBuf,
        /// The underlying I/O error from spawning the process.
        #[source]
        source: io::Error,
    },

    /// git ran but exited unsuccessfully.
    #[error(
        "git command `{command}` failed in {cwd} ({exit_status}): {}",
        .stderr.trim_end()
    )]
    CommandFailed {
        /// The full command line, space-separated.
        command: String,
        /// The working directory the command ran in.
        cwd: Utf8PathBuf,
        /// A human-readable description of the exit status (e.g.,
        /// "exit status: 128" or "signal: 9").
        exit_status: String,
        /// The stderr output from git, decoded lossily.
        stderr: String,
    },

    /// The working directory could not be resolved to a canonical UTF-8
    /// directory, or it disappeared before a query ran.
    #[error("failed to resolve working directory {path}")]
    ResolvePath {
        /// The path as provided.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The environment variable naming the git binary is not valid UTF-8.
    #[error(
        "${var} environment variable is not valid \
         UTF-8: {value:?}"
    )]
    NonUtf8Env {
        /// The environment variable name.
        var: &'static str,
        /// The non-UTF-8 value.
        value: OsString,
    },
}

impl GitError {
    /// Returns the category of this error.
    pub fn kind(&self) -> GitErrorKind {
        match self {
            GitError::NotGitRepository { .. } => GitErrorKind::NotGitRepository,
            GitError::ExecutableNotFound { .. } => {
                GitErrorKind::ExecutableNotFound
            }
            GitError::CommandFailed { .. } => GitErrorKind::CommandFailed,
            GitError::ResolvePath { .. } => GitErrorKind::ResolvePath,
            GitError::NonUtf8Env { .. } => GitErrorKind::NonUtf8Env,
        }
    }
}

/// The category of a [`GitError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum GitErrorKind {
    /// See [`GitError::NotGitRepository`].
    NotGitRepository,
    /// See [`GitError::ExecutableNotFound`].
    ExecutableNotFound,
    /// See [`GitError::CommandFailed`].
    CommandFailed,
    /// See [`GitError::ResolvePath`].
    ResolvePath,
    /// See [`GitError::NonUtf8Env`].
    NonUtf8Env,
}

impl fmt::Display for GitErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GitErrorKind::NotGitRepository => write!(f, "not a git repository"),
            GitErrorKind::ExecutableNotFound => {
                write!(f, "git executable not found")
            }
            GitErrorKind::CommandFailed => write!(f, "git command failed"),
            GitErrorKind::ResolvePath => write!(f, "path resolution failed"),
            GitErrorKind::NonUtf8Env => write!(f, "non-UTF-8 environment"),
        }
    }
}
