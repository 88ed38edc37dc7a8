// Copyright 2026 Oxide Computer Company

//! The seam between [`GitFolder`](crate::GitFolder) and process spawning.

use camino::Utf8Path;
use std::{
    fmt, io,
    process::{Command, Stdio},
};

/// The captured result of a finished command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOutput {
    /// Whether the command exited with status zero.
    pub success: bool,
    /// A human-readable description of the exit status (e.g.,
    /// "exit status: 128" or "signal: 9").
    pub exit_status: String,
    /// Everything the command wrote to stdout.
    pub stdout: Vec<u8>,
    /// Everything the command wrote to stderr.
    pub stderr: Vec<u8>,
}

/// Runs an external command to completion and captures its output.
///
/// [`SystemRunner`] spawns real processes. Tests substitute an
/// implementation that returns canned output.
pub trait CommandRunner: fmt::Debug {
    /// Runs `binary` with `args` in `cwd`, blocking until it exits.
    ///
    /// Returns an `Err` only if the process could not be started. A process
    /// that starts and then fails is reported through
    /// [`RunOutput::success`].
    fn run(
        &self,
        binary: &str,
        args: &[&str],
        cwd: &Utf8Path,
    ) -> io::Result<RunOutput>;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
    fn run(
        &self,
        binary: &str,
        args: &[&str],
        cwd: &Utf8Path,
    ) -> io::Result<RunOutput> {
        (**self).run(binary, args, cwd)
    }
}

/// A [`CommandRunner`] that spawns child processes with
/// [`std::process::Command`].
///
/// stdin is not inherited; stdout and stderr are fully buffered.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(
        &self,
        binary: &str,
        args: &[&str],
        cwd: &Utf8Path,
    ) -> io::Result<RunOutput> {
        let output = Command::new(binary)
            .current_dir(cwd)
            .args(args)
            .stdin(Stdio::null())
            .output()?;

        Ok(RunOutput {
            success: output.status.success(),
            exit_status: output.status.to_string(),
            stdout: output.stdout,
            stderr: output.stderr,
        })
    }
}
