// Copyright 2026 Oxide Computer Company

//! Locate git repositories and classify the files in them.
//!
//! This crate answers the question "which files in this directory matter to
//! git?" by running `git ls-files`, without reimplementing any git
//! internals. It is intended for build and packaging tools that need to
//! enumerate the files of a project.
//!
//! There are two entry points:
//!
//! * [`find_git_root`] walks up from a path looking for a `.git` directory.
//!   It only touches the filesystem, so it works when git is not installed,
//!   and returns `None` if there is no repository.
//! * [`GitFolder`] binds a directory to its repository root and lists
//!   [tracked](GitFolder::tracked_files), [new](GitFolder::new_files), and
//!   [removed](GitFolder::removed_files) files. Opening a folder outside a
//!   repository is an error ([`GitError::NotGitRepository`]).
//!
//! # Examples
//!
//! ```no_run
//! use git_folder::{GitErrorKind, GitFolder};
//!
//! match GitFolder::open(".") {
//!     Ok(folder) => {
//!         for path in folder.tracked_files()? {
//!             println!("{}", path.display());
//!         }
//!     }
//!     Err(err) if err.kind() == GitErrorKind::NotGitRepository => {
//!         // Fall back to walking the directory.
//!     }
//!     Err(err) => return Err(err),
//! }
//! # Ok::<(), git_folder::GitError>(())
//! ```
//!
//! # Testing
//!
//! Process spawning goes through the [`CommandRunner`] trait. Use
//! [`GitFolder::with_runner`] to substitute canned output.

#![deny(missing_docs)]

mod decode;
mod errors;
mod folder;
mod root;
mod runner;

pub use errors::{GitError, GitErrorKind};
pub use folder::{DEFAULT_GIT_BINARY, FileSet, GitFolder};
pub use root::{GIT_DIR_NAME, find_git_root, find_git_root_std};
pub use runner::{CommandRunner, RunOutput, SystemRunner};
