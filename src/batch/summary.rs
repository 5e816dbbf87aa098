// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Outcome of a batch run.

use console::style;
use serde::Serialize;

use crate::error::GitError;

/// A git operation performed during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Stage,
    Commit,
    Push,
}

impl Operation {
    /// Short name used in output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Stage => "stage",
            Operation::Commit => "commit",
            Operation::Push => "push",
        }
    }
}

/// One failed git operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Failure {
    pub operation: Operation,

    /// The file involved, if the operation was about a single file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    pub message: String,
}

/// Success and failure counts for one kind of operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OpStats {
    pub succeeded: usize,
    pub failed: usize,
}

impl OpStats {
    fn record(&mut self, ok: bool) {
        if ok {
            self.succeeded += 1;
        } else {
            self.failed += 1;
        }
    }
}

/// What happened to the push at the end of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PushOutcome {
    /// Nothing was pending, so the run ended before pushing.
    NotAttempted,
    /// Pushing is disabled.
    Skipped,
    Pushed { remote: String, branch: String },
    Failed {
        remote: String,
        branch: String,
        message: String,
    },
}

/// Aggregated result of a batch run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Number of changed files the status query reported.
    pub files_found: usize,

    /// Configured target commit count.
    pub target_commits: usize,

    /// Commits the plan called for.
    pub planned_commits: usize,

    /// Commits git actually created. Always zero in a dry run.
    pub commits_created: usize,

    /// Git commands were printed instead of run.
    pub dry_run: bool,

    pub stage: OpStats,
    pub commit: OpStats,
    pub push: PushOutcome,
    pub push_stats: OpStats,

    /// Every failed operation, in the order it happened.
    pub failures: Vec<Failure>,
}

impl RunSummary {
    /// Start a summary for a run.
    pub fn new(files_found: usize, target_commits: usize) -> Self {
        Self {
            files_found,
            target_commits,
            planned_commits: 0,
            commits_created: 0,
            dry_run: false,
            stage: OpStats::default(),
            commit: OpStats::default(),
            push: PushOutcome::NotAttempted,
            push_stats: OpStats::default(),
            failures: Vec::new(),
        }
    }

    /// Record the result of staging a file.
    pub fn record_stage(&mut self, path: &str, result: &Result<(), GitError>) {
        self.stage.record(result.is_ok());
        if let Err(e) = result {
            self.push_failure(Operation::Stage, Some(path), e);
        }
    }

    /// Record the result of a commit. `path` is set for single-file commits.
    pub fn record_commit(&mut self, path: Option<&str>, result: &Result<(), GitError>) {
        self.commit.record(result.is_ok());
        match result {
            Ok(()) if self.dry_run => {}
            Ok(()) => self.commits_created += 1,
            Err(e) => self.push_failure(Operation::Commit, path, e),
        }
    }

    /// Record the push outcome.
    pub fn record_push(&mut self, outcome: PushOutcome) {
        match &outcome {
            PushOutcome::Pushed { .. } => self.push_stats.record(true),
            PushOutcome::Failed { message, .. } => {
                self.push_stats.record(false);
                self.failures.push(Failure {
                    operation: Operation::Push,
                    path: None,
                    message: message.clone(),
                });
            }
            PushOutcome::NotAttempted | PushOutcome::Skipped => {}
        }
        self.push = outcome;
    }

    fn push_failure(&mut self, operation: Operation, path: Option<&str>, err: &GitError) {
        self.failures.push(Failure {
            operation,
            path: path.map(str::to_string),
            message: err.to_string(),
        });
    }

    /// Whether any operation failed.
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Render the summary as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Print a human-readable summary to stdout.
    pub fn print(&self) {
        if self.files_found == 0 {
            return;
        }

        if self.dry_run {
            println!(
                "{} {} of {} planned commits would be created",
                style("Summary (dry run):").bold(),
                self.commit.succeeded,
                self.planned_commits
            );
        } else {
            println!(
                "{} {} of {} planned commits created",
                style("Summary:").bold(),
                self.commits_created,
                self.planned_commits
            );
        }
        println!(
            "  {} {} ok, {} failed",
            style("stage ").dim(),
            self.stage.succeeded,
            self.stage.failed
        );
        println!(
            "  {} {} ok, {} failed",
            style("commit").dim(),
            self.commit.succeeded,
            self.commit.failed
        );

        let push = match &self.push {
            PushOutcome::NotAttempted => style("not attempted".to_string()).dim(),
            PushOutcome::Skipped => style("skipped".to_string()).dim(),
            PushOutcome::Pushed { remote, branch } => {
                style(format!("✓ {}/{}", remote, branch)).green()
            }
            PushOutcome::Failed { remote, branch, .. } => {
                style(format!("✗ {}/{}", remote, branch)).red()
            }
        };
        println!(
            "  {} {} ok, {} failed  {}",
            style("push  ").dim(),
            self.push_stats.succeeded,
            self.push_stats.failed,
            push
        );

        if self.has_failures() {
            println!();
            println!("{}", style("Failures:").red().bold());
            for failure in &self.failures {
                match &failure.path {
                    Some(path) => println!(
                        "  {} {} {}: {}",
                        style("✗").red(),
                        failure.operation.as_str(),
                        path,
                        failure.message
                    ),
                    None => println!(
                        "  {} {}: {}",
                        style("✗").red(),
                        failure.operation.as_str(),
                        failure.message
                    ),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failed(command: &str) -> Result<(), GitError> {
        Err(GitError::CommandFailed {
            command: command.to_string(),
            message: "boom".to_string(),
        })
    }

    #[test]
    fn test_record_commit_counts_only_successes() {
        let mut summary = RunSummary::new(3, 111);
        summary.record_commit(Some("a"), &Ok(()));
        summary.record_commit(Some("b"), &failed("commit -m x"));
        summary.record_commit(None, &Ok(()));

        assert_eq!(summary.commits_created, 2);
        assert_eq!(summary.commit, OpStats { succeeded: 2, failed: 1 });
        assert_eq!(summary.failures.len(), 1);
        assert_eq!(summary.failures[0].operation, Operation::Commit);
        assert_eq!(summary.failures[0].path.as_deref(), Some("b"));
    }

    #[test]
    fn test_record_stage() {
        let mut summary = RunSummary::new(2, 111);
        summary.record_stage("a", &Ok(()));
        summary.record_stage("b", &failed("add -- b"));

        assert_eq!(summary.stage, OpStats { succeeded: 1, failed: 1 });
        assert!(summary.has_failures());
        assert!(summary.failures[0].message.contains("boom"));
    }

    #[test]
    fn test_record_push_failure() {
        let mut summary = RunSummary::new(1, 111);
        summary.record_push(PushOutcome::Failed {
            remote: "origin".to_string(),
            branch: "main".to_string(),
            message: "rejected".to_string(),
        });

        assert_eq!(summary.push_stats, OpStats { succeeded: 0, failed: 1 });
        assert_eq!(summary.failures[0].operation, Operation::Push);
    }

    #[test]
    fn test_json_shape() {
        let mut summary = RunSummary::new(1, 5);
        summary.planned_commits = 1;
        summary.record_stage("a.txt", &Ok(()));
        summary.record_commit(Some("a.txt"), &Ok(()));
        summary.record_push(PushOutcome::Pushed {
            remote: "origin".to_string(),
            branch: "main".to_string(),
        });

        let value: serde_json::Value = serde_json::from_str(&summary.to_json().unwrap()).unwrap();
        assert_eq!(value["files_found"], 1);
        assert_eq!(value["commits_created"], 1);
        assert_eq!(value["push"]["status"], "pushed");
        assert_eq!(value["push"]["branch"], "main");
        assert_eq!(value["push_stats"]["succeeded"], 1);
        assert_eq!(value["dry_run"], false);
        assert_eq!(value["stage"]["succeeded"], 1);
        assert!(value["failures"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_new_summary_has_not_attempted_push() {
        let summary = RunSummary::new(0, 111);
        assert_eq!(summary.push, PushOutcome::NotAttempted);
        assert_eq!(summary.push_stats, OpStats::default());
    }

    #[test]
    fn test_dry_run_creates_no_commits() {
        let mut summary = RunSummary::new(2, 111);
        summary.dry_run = true;
        summary.record_commit(Some("a"), &Ok(()));
        summary.record_commit(Some("b"), &Ok(()));

        assert_eq!(summary.commits_created, 0);
        assert_eq!(summary.commit.succeeded, 2);
    }
}
