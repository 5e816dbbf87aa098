// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Batch committing of pending changes.
//!
//! A run reads the pending changes once, commits the first files one by
//! one, squashes whatever exceeds the target into a final commit and then
//! pushes.

mod committer;
pub mod plan;
mod summary;

pub use committer::BatchCommitter;
pub use plan::{basename, split_index, ChangeSet, CommitPlan};
pub use summary::{Failure, OpStats, Operation, PushOutcome, RunSummary};
