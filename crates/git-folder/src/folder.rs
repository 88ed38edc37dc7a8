// Copyright 2026 Oxide Computer Company

//! A directory inside a git working tree.

use crate::{
    GitError,
    decode::{decode_record, parse_records},
    root::find_git_root,
    runner::{CommandRunner, SystemRunner},
};
use camino::{Utf8Path, Utf8PathBuf};
use fs_err as fs;
use std::{collections::BTreeSet, fmt, path::PathBuf};

/// The git executable used when none is configured.
pub const DEFAULT_GIT_BINARY: &str = "git";

/// A set of absolute file paths returned by a [`GitFolder`] query.
///
/// Paths are [`std::path::PathBuf`] rather than UTF-8 paths because git
/// reports file names as raw bytes.
pub type FileSet = BTreeSet<PathBuf>;

/// Reads the git binary path from an environment variable, falling back
/// to `default` if the variable is unset or blank.
fn read_git_env(
    var: &'static str,
    default: &str,
) -> Result<String, GitError> {
    match std::env::var(var) {
        Ok(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Ok(default.to_string())
            } else {
                Ok(trimmed.to_string())
            }
        }
        Err(std::env::VarError::NotPresent) => Ok(default.to_string()),
        Err(std::env::VarError::NotUnicode(value)) => {
            Err(GitError::NonUtf8Env { var, value })
        }
    }
}

/// A directory within a git repository, used to classify the files under
/// it.
///
/// Each query runs `git ls-files` once in [`cwd`](Self::cwd) and returns a
/// fresh [`FileSet`]; nothing is cached between calls.
///
/// # Examples
///
/// ```no_run
/// use git_folder::GitFolder;
///
/// let folder = GitFolder::open("crates/my-crate")?;
/// let mut files = folder.tracked_files()?;
/// files.extend(folder.new_files()?);
/// for removed in folder.removed_files()? {
///     files.remove(&removed);
/// }
/// # Ok::<(), git_folder::GitError>(())
/// ```
#[derive(Debug, Clone)]
pub struct GitFolder<R = SystemRunner> {
    cwd: Utf8PathBuf,
    root: Utf8PathBuf,
    binary: String,
    runner: R,
}

impl GitFolder {
    /// Opens the directory `cwd`, using `git` from `PATH`.
    ///
    /// `cwd` is canonicalized. Returns
    /// [`GitError::NotGitRepository`] if neither it nor any of its ancestors
    /// contains a `.git` directory, whether or not `cwd` exists. Returns
    /// [`GitError::ResolvePath`] if `cwd` is inside a repository but is not
    /// an existing directory.
    ///
    /// `cwd` must be valid UTF-8, as must its canonical form.
    pub fn open(cwd: impl AsRef<Utf8Path>) -> Result<Self, GitError> {
        Self::with_binary(cwd, DEFAULT_GIT_BINARY)
    }

    /// Opens the directory `cwd`, running git from `binary`.
    ///
    /// `binary` is only used when a query runs, so a missing executable is
    /// reported by the query as [`GitError::ExecutableNotFound`].
    pub fn with_binary(
        cwd: impl AsRef<Utf8Path>,
        binary: impl Into<String>,
    ) -> Result<Self, GitError> {
        let cwd = cwd.as_ref();
        let cwd = match resolve_dir(cwd) {
            Ok(cwd) => cwd,
            Err(error) => {
                if find_git_root(cwd).is_none() {
                    let cwd = camino::absolute_utf8(cwd)
                        .unwrap_or_else(|_| cwd.to_owned());
                    return Err(GitError::NotGitRepository { cwd });
                }
                return Err(error);
            }
        };
        let Some(root) = find_git_root(&cwd) else {
            return Err(GitError::NotGitRepository { cwd });
        };
        tracing::debug!(%cwd, %root, "found git repository root");

        Ok(GitFolder {
            cwd,
            root,
            binary: binary.into(),
            runner: SystemRunner,
        })
    }

    /// Opens the directory `cwd`, using the `$GIT` environment variable
    /// or `"git"`.
    ///
    /// Returns [`GitError::NonUtf8Env`] if `$GIT` is set but is not valid
    /// UTF-8.
    pub fn from_env(cwd: impl AsRef<Utf8Path>) -> Result<Self, GitError> {
        let binary = read_git_env("GIT", DEFAULT_GIT_BINARY)?;
        Self::with_binary(cwd, binary)
    }
}

impl<R: CommandRunner> GitFolder<R> {
    /// Replaces the runner used to spawn git.
    pub fn with_runner<S: CommandRunner>(self, runner: S) -> GitFolder<S> {
        GitFolder {
            cwd: self.cwd,
            root: self.root,
            binary: self.binary,
            runner,
        }
    }

    /// The root of the git repository.
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    /// The canonicalized working directory queries run in.
    pub fn cwd(&self) -> &Utf8Path {
        &self.cwd
    }

    /// The git executable queries run.
    pub fn binary(&self) -> &str {
        &self.binary
    }

    /// Runs git with `args` in [`cwd`](Self::cwd) and returns its stdout.
    ///
    /// Returns [`GitError::ExecutableNotFound`] if git could not be started,
    /// [`GitError::ResolvePath`] if `cwd` no longer exists, and
    /// [`GitError::CommandFailed`] if git exited unsuccessfully.
    pub fn run_git(&self, args: &[&str]) -> Result<Vec<u8>, GitError> {
        tracing::debug!(
            binary = %self.binary,
            ?args,
            cwd = %self.cwd,
            "running git"
        );

        let output = self
            .runner
            .run(&self.binary, args, &self.cwd)
            .map_err(|source| {
                // Spawning also fails if the working directory has gone
                // away since the folder was opened.
                if self.cwd.is_dir() {
                    GitError::ExecutableNotFound {
                        binary: self.binary.clone(),
                        cwd: self.cwd.clone(),
                        source,
                    }
                } else {
                    GitError::ResolvePath { path: self.cwd.clone(), source }
                }
            })?;

        if output.success {
            Ok(output.stdout)
        } else {
            Err(GitError::CommandFailed {
                command: self.command_line(args),
                cwd: self.cwd.clone(),
                exit_status: output.exit_status,
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            })
        }
    }

    /// Returns all files in the index under `cwd`, including files in
    /// submodules.
    pub fn tracked_files(&self) -> Result<FileSet, GitError> {
        self.ls_files(&["ls-files", "--recurse-submodules", "-z"])
    }

    /// Returns files under `cwd` that are neither tracked nor ignored.
    pub fn new_files(&self) -> Result<FileSet, GitError> {
        self.ls_files(&["ls-files", "--others", "--exclude-standard", "-z"])
    }

    /// Returns tracked files under `cwd` that have been deleted from the
    /// working tree.
    pub fn removed_files(&self) -> Result<FileSet, GitError> {
        self.ls_files(&["ls-files", "--deleted", "-z"])
    }

    fn ls_files(&self, args: &[&str]) -> Result<FileSet, GitError> {
        let raw = self.run_git(args)?;
        let files: FileSet = parse_records(&raw)
            .map(|record| self.cwd.as_std_path().join(decode_record(record)))
            .collect();
        tracing::trace!(?args, count = files.len(), "parsed ls-files output");
        Ok(files)
    }

    fn command_line(&self, args: &[&str]) -> String {
        let mut line = self.binary.clone();
        for arg in args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }
}

impl<R> fmt::Display for GitFolder<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "git folder {}", self.cwd)
    }
}

/// Canonicalizes `path`, which must name an existing directory.
fn resolve_dir(path: &Utf8Path) -> Result<Utf8PathBuf, GitError> {
    let resolve_err = |source: std::io::Error| GitError::ResolvePath {
        path: path.to_owned(),
        source,
    };

    let canonical = fs::canonicalize(path).map_err(resolve_err)?;
    let canonical = Utf8PathBuf::from_path_buf(canonical).map_err(|p| {
        resolve_err(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("canonical path is not valid UTF-8: {}", p.display()),
        ))
    })?;
    if !canonical.is_dir() {
        return Err(resolve_err(std::io::Error::new(
            std::io::ErrorKind::NotADirectory,
            format!("{canonical} is not a directory"),
        )));
    }
    Ok(canonical)
}
