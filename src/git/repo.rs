// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Repository discovery.

use crate::error::GitError;
use git2::Repository as Git2Repo;
use std::path::{Path, PathBuf};

/// Wrapper around git2::Repository for the lookups a batch run needs.
pub struct Repository {
    inner: Git2Repo,
    workdir: PathBuf,
}

impl Repository {
    /// Open the repository containing `path`.
    pub fn open(path: &Path) -> Result<Self, GitError> {
        let repo = Git2Repo::discover(path).map_err(|e| {
            if e.code() == git2::ErrorCode::NotFound {
                GitError::NotARepository
            } else {
                GitError::OpenFailed {
                    message: e.message().to_string(),
                }
            }
        })?;

        let workdir = repo
            .workdir()
            .ok_or_else(|| GitError::OpenFailed {
                message: "Repository has no working directory (bare repository)".to_string(),
            })?
            .to_path_buf();

        Ok(Self {
            inner: repo,
            workdir,
        })
    }

    /// Get the working directory path.
    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// Get the current branch name.
    pub fn branch_name(&self) -> Result<String, GitError> {
        let head = match self.inner.head() {
            Ok(head) => head,
            // Unborn branch: HEAD points at a ref that has no commit yet.
            Err(e) if e.code() == git2::ErrorCode::UnbornBranch => {
                return self.unborn_branch_name();
            }
            Err(e) => {
                return Err(GitError::BranchFailed {
                    message: e.message().to_string(),
                })
            }
        };

        if head.is_branch() {
            let name = head.shorthand().ok_or_else(|| GitError::BranchFailed {
                message: "Invalid branch name encoding".to_string(),
            })?;
            Ok(name.to_string())
        } else {
            Err(GitError::DetachedHead)
        }
    }

    fn unborn_branch_name(&self) -> Result<String, GitError> {
        let head = self.inner.find_reference("HEAD")?;
        head.symbolic_target()
            .and_then(|target| target.strip_prefix("refs/heads/"))
            .map(str::to_string)
            .ok_or(GitError::DetachedHead)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, Repository) {
        let dir = TempDir::new().unwrap();
        let repo = Git2Repo::init(dir.path()).unwrap();

        // Create initial commit
        {
            let sig = git2::Signature::now("Test User", "test@example.com").unwrap();
            let tree_id = {
                let mut index = repo.index().unwrap();
                index.write_tree().unwrap()
            };
            let tree = repo.find_tree(tree_id).unwrap();
            repo.commit(Some("HEAD"), &sig, &sig, "Initial commit", &tree, &[])
                .unwrap();
        }

        let wrapper = Repository::open(dir.path()).unwrap();
        (dir, wrapper)
    }

    #[test]
    fn test_open_repo() {
        let (dir, repo) = create_test_repo();
        assert_eq!(
            repo.workdir().canonicalize().unwrap(),
            dir.path().canonicalize().unwrap()
        );
    }

    #[test]
    fn test_open_from_subdirectory() {
        let (dir, _repo) = create_test_repo();
        let nested = dir.path().join("src");
        std::fs::create_dir_all(&nested).unwrap();
        assert!(Repository::open(&nested).is_ok());
    }

    #[test]
    fn test_not_a_repo() {
        let dir = TempDir::new().unwrap();
        let result = Repository::open(dir.path());
        assert!(matches!(result, Err(GitError::NotARepository)));
    }

    #[test]
    fn test_branch_name() {
        let (_dir, repo) = create_test_repo();
        // Default branch might be master or main depending on git config
        let branch = repo.branch_name().unwrap();
        assert!(!branch.is_empty());
    }

    #[test]
    fn test_branch_name_unborn() {
        let dir = TempDir::new().unwrap();
        let raw = Git2Repo::init(dir.path()).unwrap();
        raw.set_head("refs/heads/trunk").unwrap();

        let repo = Repository::open(dir.path()).unwrap();
        assert_eq!(repo.branch_name().unwrap(), "trunk");
    }

    #[test]
    fn test_detached_head() {
        let (dir, repo) = create_test_repo();
        let head = repo.inner.head().unwrap().target().unwrap();
        repo.inner.set_head_detached(head).unwrap();

        let reopened = Repository::open(dir.path()).unwrap();
        assert!(matches!(reopened.branch_name(), Err(GitError::DetachedHead)));
    }
}
