// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! The batch committer: status, per-file commits, final commit, push.

use console::{style, Term};

use crate::config::BcConfig;
use crate::error::GitError;
use crate::git::Vcs;

use super::plan::{basename, ChangeSet, CommitPlan};
use super::summary::{PushOutcome, RunSummary};

/// Branch pushed when the checked-out branch cannot be determined.
const FALLBACK_BRANCH: &str = "HEAD";

/// Commits pending changes in batches and pushes the result.
pub struct BatchCommitter<'a, V: Vcs> {
    vcs: &'a V,
    config: &'a BcConfig,
    term: Option<Term>,
}

impl<'a, V: Vcs> BatchCommitter<'a, V> {
    /// Create a committer that prints progress to stdout.
    pub fn new(vcs: &'a V, config: &'a BcConfig) -> Self {
        Self {
            vcs,
            config,
            term: Some(Term::stdout()),
        }
    }

    /// Print progress to a different terminal.
    pub fn with_term(mut self, term: Term) -> Self {
        self.term = Some(term);
        self
    }

    /// Do not print progress.
    pub fn quiet(mut self) -> Self {
        self.term = None;
        self
    }

    /// Run the batch. Individual git failures are recorded, never returned.
    pub fn run(&self) -> RunSummary {
        let target = self.config.batch.target_commits;
        let changes = self.read_changes();

        let mut summary = RunSummary::new(changes.len(), target);
        summary.dry_run = self.vcs.is_dry_run();
        self.say(&format!("Found {} pending changes.", changes.len()));

        if changes.is_empty() {
            self.say("No changes to commit.");
            return summary;
        }

        let plan = CommitPlan::new(&changes, target);
        summary.planned_commits = plan.commit_count();

        if changes.len() < target {
            self.say(&format!(
                "Note: Only {} files available. Will create {} commits.",
                changes.len(),
                changes.len()
            ));
        }

        for (i, change) in plan.singles().iter().enumerate() {
            let path = change.path.as_str();
            self.say(&format!("[{}/{}] Committing {}...", i + 1, target, path));

            let staged = self.vcs.stage(path);
            self.report(&staged);
            summary.record_stage(path, &staged);

            let message = self.config.batch.single_message_for(basename(path));
            let committed = self.vcs.commit(&message, &change.pathspecs());
            self.report(&committed);
            summary.record_commit(Some(path), &committed);
        }

        let remainder = plan.remainder();
        if !remainder.is_empty() {
            self.say(&format!(
                "[{}/{}] Committing remaining {} files...",
                plan.singles().len() + 1,
                target,
                remainder.len()
            ));

            // Files that failed to stage are left out of the final commit
            let mut paths = Vec::new();
            for change in remainder {
                let staged = self.vcs.stage(&change.path);
                self.report(&staged);
                summary.record_stage(&change.path, &staged);
                if staged.is_ok() {
                    paths.extend(change.pathspecs());
                }
            }

            let committed = self.vcs.commit(&self.config.batch.final_message, &paths);
            self.report(&committed);
            summary.record_commit(None, &committed);
        }

        if summary.dry_run {
            self.say(&format!(
                "Finished. Dry run, would create {} commits.",
                summary.commit.succeeded
            ));
        } else {
            self.say(&format!(
                "Finished. Created {} commits.",
                summary.commits_created
            ));
        }

        summary.record_push(self.push());
        summary
    }

    /// Query pending changes; a failed query counts as no changes.
    fn read_changes(&self) -> ChangeSet {
        match self.vcs.changed_files() {
            Ok(files) => ChangeSet::new(files),
            Err(e) => {
                tracing::warn!("Status query failed, treating as no changes: {}", e);
                ChangeSet::default()
            }
        }
    }

    fn push(&self) -> PushOutcome {
        let push = &self.config.push;
        if !push.enabled {
            self.say("Skipping push.");
            return PushOutcome::Skipped;
        }

        let branch = match &push.branch {
            Some(branch) => branch.clone(),
            None => self.vcs.current_branch().unwrap_or_else(|e| {
                tracing::debug!("Could not resolve current branch ({}), pushing HEAD", e);
                FALLBACK_BRANCH.to_string()
            }),
        };

        self.say(&format!("Pushing to {}...", push.remote));
        match self.vcs.push(&push.remote, &branch) {
            Ok(()) => PushOutcome::Pushed {
                remote: push.remote.clone(),
                branch,
            },
            Err(e) => {
                self.report::<()>(&Err(e.clone()));
                PushOutcome::Failed {
                    remote: push.remote.clone(),
                    branch,
                    message: e.to_string(),
                }
            }
        }
    }

    fn say(&self, line: &str) {
        if let Some(term) = &self.term {
            let _ = term.write_line(line);
        }
    }

    fn report<T>(&self, result: &Result<T, GitError>) {
        if let Err(e) = result {
            tracing::warn!("{}", e);
            self.say(&format!("{} {}", style("Error:").red(), e));
        }
    }
}
