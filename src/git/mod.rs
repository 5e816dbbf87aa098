// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Git integration module.
//!
//! Git is driven as a subprocess through the [`Vcs`] trait; `git2` is only
//! used to discover the repository root and the checked-out branch.

pub mod commands;
mod repo;
pub mod status;

pub use commands::{GitCli, GitResult, Vcs};
pub use repo::Repository;
pub use status::{parse_porcelain, FileChange};
