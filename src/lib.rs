// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! batch-commit - commit pending Git changes in a fixed number of commits.
//!
//! A run asks git for every pending change, gives each file its own commit
//! until the target count is about to be reached, squashes the rest into one
//! final commit and pushes the branch.
//!
//! # Example
//!
//! ```no_run
//! use batchcommit::batch::BatchCommitter;
//! use batchcommit::config::BcConfig;
//! use batchcommit::git::GitCli;
//!
//! let config = BcConfig::default();
//! let git = GitCli::new(".");
//! let summary = BatchCommitter::new(&git, &config).run();
//! println!("created {} commits", summary.commits_created);
//! ```

// Module declarations
pub mod batch;
pub mod cli;
pub mod config;
pub mod error;
pub mod git;

// Re-exports for convenience
pub use config::BcConfig;
pub use error::{BcError, Result};

/// Version information embedded at compile time.
pub mod version {
    /// The current version of batch-commit.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match (GIT_SHA, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => {
                format!("{} ({} {})", VERSION, &sha[..7.min(sha.len())], date)
            }
            (Some(sha), None) => {
                format!("{} ({})", VERSION, &sha[..7.min(sha.len())])
            }
            _ => VERSION.to_string(),
        }
    }

}
