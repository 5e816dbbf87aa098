// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Git command wrappers for status, staging, committing and pushing.

use crate::error::GitError;
use console::Term;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use super::repo::Repository;
use super::status::{parse_porcelain, FileChange};

/// Result of a single git operation.
pub type GitResult<T> = std::result::Result<T, GitError>;

/// The version-control operations a batch run depends on.
///
/// Every call is blocking. Implementations report failure as a value and
/// never panic, so callers can record the error and carry on.
pub trait Vcs {
    /// All tracked and untracked changes, in the order reported.
    fn changed_files(&self) -> GitResult<Vec<FileChange>>;

    /// Stage one path.
    fn stage(&self, path: &str) -> GitResult<()>;

    /// Commit exactly `paths`, leaving anything else in the index alone.
    fn commit(&self, message: &str, paths: &[String]) -> GitResult<()>;

    /// Push `branch` to `remote`.
    fn push(&self, remote: &str, branch: &str) -> GitResult<()>;

    /// Name of the checked-out branch.
    fn current_branch(&self) -> GitResult<String>;

    /// Whether mutating operations only pretend to succeed.
    fn is_dry_run(&self) -> bool {
        false
    }
}

/// [`Vcs`] backed by the `git` executable.
#[derive(Debug, Clone)]
pub struct GitCli {
    workdir: PathBuf,
    dry_run: bool,
    echo: Term,
}

impl GitCli {
    /// Run git commands inside `workdir`.
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
            dry_run: false,
            echo: Term::stdout(),
        }
    }

    /// Print mutating commands instead of running them.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Terminal that dry-run commands are printed to.
    pub fn with_echo(mut self, echo: Term) -> Self {
        self.echo = echo;
        self
    }

    /// Get the working directory commands run in.
    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// Run git and return its output if it exited successfully.
    fn output(&self, args: &[&str]) -> GitResult<Output> {
        let command = args.join(" ");
        tracing::debug!("Running: git {}", command);

        // Paths come from git itself, so `*` or `:` in a name is literal
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.workdir)
            .env("GIT_LITERAL_PATHSPECS", "1")
            .output()
            .map_err(|e| GitError::SpawnFailed {
                command: command.clone(),
                message: e.to_string(),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let message = if stderr.is_empty() {
                // git commit reports "nothing to commit" on stdout
                let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
                if stdout.is_empty() {
                    format!("exited with {}", output.status)
                } else {
                    stdout
                }
            } else {
                stderr
            };
            return Err(GitError::CommandFailed { command, message });
        }

        Ok(output)
    }

    /// Run a command that changes the repository, honouring dry-run.
    fn run_mutating(&self, args: &[&str]) -> GitResult<()> {
        if self.dry_run {
            let _ = self.echo.write_line(&format!("Would run: git {}", args.join(" ")));
            return Ok(());
        }

        let output = self.output(args)?;
        let stdout = String::from_utf8_lossy(&output.stdout);
        if !stdout.trim().is_empty() {
            tracing::debug!("{}", stdout.trim_end());
        }
        Ok(())
    }
}

impl Vcs for GitCli {
    fn changed_files(&self) -> GitResult<Vec<FileChange>> {
        let output = self.output(&[
            "-c",
            "core.quotePath=true",
            "status",
            "--porcelain",
            "-uall",
        ])?;
        Ok(parse_porcelain(&output.stdout))
    }

    fn stage(&self, path: &str) -> GitResult<()> {
        self.run_mutating(&["add", "--", path])
    }

    fn commit(&self, message: &str, paths: &[String]) -> GitResult<()> {
        let mut args = vec!["commit", "-m", message, "--only", "--"];
        args.extend(paths.iter().map(String::as_str));
        self.run_mutating(&args)
    }

    fn push(&self, remote: &str, branch: &str) -> GitResult<()> {
        self.run_mutating(&["push", remote, branch])
    }

    fn current_branch(&self) -> GitResult<String> {
        Repository::open(&self.workdir)?.branch_name()
    }

    fn is_dry_run(&self) -> bool {
        self.dry_run
    }
}
