// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Splitting pending changes into commits.

use std::path::Path;

use crate::git::FileChange;

/// Files reported by the status query, in the order reported.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSet {
    files: Vec<FileChange>,
}

impl ChangeSet {
    /// Create a change set from reported files.
    pub fn new(files: Vec<FileChange>) -> Self {
        Self { files }
    }

    /// Number of changed files.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// The changed files.
    pub fn files(&self) -> &[FileChange] {
        &self.files
    }
}

impl From<Vec<FileChange>> for ChangeSet {
    fn from(files: Vec<FileChange>) -> Self {
        Self::new(files)
    }
}

/// Which files get their own commit and which share the final one.
///
/// With `n` files and a target of `t` commits: when `n <= t` every file is
/// committed on its own; otherwise the first `t - 1` files are and the rest
/// go into one final commit, for exactly `t` commits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitPlan<'a> {
    singles: &'a [FileChange],
    remainder: &'a [FileChange],
}

impl<'a> CommitPlan<'a> {
    /// Plan commits for a change set. A target of zero is treated as one.
    pub fn new(changes: &'a ChangeSet, target: usize) -> Self {
        let split = split_index(changes.len(), target);
        let (singles, remainder) = changes.files().split_at(split);
        Self { singles, remainder }
    }

    /// Files committed one per commit, in change set order.
    pub fn singles(&self) -> &'a [FileChange] {
        self.singles
    }

    /// Files sharing the final commit; empty when there is no final commit.
    pub fn remainder(&self) -> &'a [FileChange] {
        self.remainder
    }

    /// Number of commits the plan produces.
    pub fn commit_count(&self) -> usize {
        self.singles.len() + usize::from(!self.remainder.is_empty())
    }
}

/// Number of files that get their own commit.
pub fn split_index(total: usize, target: usize) -> usize {
    let target = target.max(1);
    if total <= target {
        total
    } else {
        target - 1
    }
}

/// File name of a path, or the path itself when it has none.
pub fn basename(path: &str) -> &str {
    Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn changes(n: usize) -> ChangeSet {
        (0..n)
            .map(|i| FileChange::new(format!("src/file_{i}.rs")))
            .collect::<Vec<_>>()
            .into()
    }

    #[test]
    fn test_empty_change_set() {
        let set = changes(0);
        let plan = CommitPlan::new(&set, 111);
        assert!(plan.singles().is_empty());
        assert!(plan.remainder().is_empty());
        assert_eq!(plan.commit_count(), 0);
    }

    #[test]
    fn test_fewer_files_than_target() {
        let set = changes(3);
        let plan = CommitPlan::new(&set, 111);
        assert_eq!(plan.singles().len(), 3);
        assert!(plan.remainder().is_empty());
        assert_eq!(plan.commit_count(), 3);
    }

    #[test]
    fn test_exactly_target_files_all_individual() {
        let set = changes(111);
        let plan = CommitPlan::new(&set, 111);
        assert_eq!(plan.singles().len(), 111);
        assert!(plan.remainder().is_empty());
        assert_eq!(plan.commit_count(), 111);
    }

    #[test]
    fn test_more_files_than_target() {
        let set = changes(150);
        let plan = CommitPlan::new(&set, 111);
        assert_eq!(plan.singles().len(), 110);
        assert_eq!(plan.remainder().len(), 40);
        assert_eq!(plan.commit_count(), 111);
        assert_eq!(plan.singles()[0].path, "src/file_0.rs");
        assert_eq!(plan.remainder()[0].path, "src/file_110.rs");
    }

    #[test]
    fn test_commit_count_never_exceeds_target() {
        for target in 1..=6 {
            for n in 0..=12 {
                let set = changes(n);
                let plan = CommitPlan::new(&set, target);
                assert_eq!(plan.commit_count(), n.min(target), "n={n} t={target}");
                assert_eq!(plan.singles().len() + plan.remainder().len(), n);
            }
        }
    }

    #[test]
    fn test_target_of_one_squashes_everything() {
        let set = changes(4);
        let plan = CommitPlan::new(&set, 1);
        assert!(plan.singles().is_empty());
        assert_eq!(plan.remainder().len(), 4);
    }

    #[test]
    fn test_zero_target_behaves_like_one() {
        assert_eq!(split_index(5, 0), 0);
        assert_eq!(split_index(1, 0), 1);
    }

    #[test]
    fn test_basename() {
        assert_eq!(basename("src/git/mod.rs"), "mod.rs");
        assert_eq!(basename("README.md"), "README.md");
        assert_eq!(basename("dir with space/a b.txt"), "a b.txt");
        assert_eq!(basename(".."), "..");
    }
}
