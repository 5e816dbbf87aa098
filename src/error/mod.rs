// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for batch-commit.
//!
//! Only failures that happen before a batch run starts (configuration,
//! argument validation) escape to the caller. Failures of individual git
//! invocations during a run are carried as values in the run summary.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for batch-commit operations.
#[derive(Error, Debug)]
pub enum BcError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Git-related errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GitError {
    #[error("Not a git repository")]
    NotARepository,

    #[error("Failed to open repository: {message}")]
    OpenFailed { message: String },

    #[error("Failed to get branch: {message}")]
    BranchFailed { message: String },

    #[error("Detached HEAD state")]
    DetachedHead,

    #[error("Failed to run git {command}: {message}")]
    SpawnFailed { command: String, message: String },

    #[error("Git command failed: {command} - {message}")]
    CommandFailed { command: String, message: String },
}

impl From<git2::Error> for GitError {
    fn from(err: git2::Error) -> Self {
        GitError::OpenFailed {
            message: err.message().to_string(),
        }
    }
}

/// Result type alias for batch-commit operations.
pub type Result<T> = std::result::Result<T, BcError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: std::error::Error + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| BcError::WithContext {
            context: context.into(),
            message: e.to_string(),
        })
    }
}
