// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

/// batch-commit - commit pending changes in a fixed number of commits
///
/// Every changed file gets its own commit until the target is reached; the
/// rest go into one final commit. The result is pushed afterwards.
#[derive(Parser, Debug)]
#[command(name = "batch-commit")]
#[command(author = "Eshan Roy")]
#[command(version)]
#[command(about = "Split pending changes into a fixed number of commits and push", long_about = None)]
pub struct Cli {
    /// Number of commits to create (overrides the config file)
    #[arg(short, long, env = "BATCH_COMMIT_TARGET", value_name = "N")]
    pub target: Option<usize>,

    /// Remote to push to (overrides the config file)
    #[arg(long, value_name = "NAME")]
    pub remote: Option<String>,

    /// Branch to push (defaults to the checked-out branch)
    #[arg(long, value_name = "NAME")]
    pub branch: Option<String>,

    /// Create the commits but do not push
    #[arg(long)]
    pub no_push: bool,

    /// Show what would be done without actually doing it
    #[arg(long)]
    pub dry_run: bool,

    /// Run as if started in this directory
    #[arg(short = 'C', long = "repo", value_name = "PATH")]
    pub repo: Option<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the effective configuration and exit
    #[arg(long)]
    pub print_config: bool,

    /// Output format for the final summary
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,
}

/// Output format for CI and scripting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text output (default)
    Text,
    /// JSON output for machine parsing
    Json,
}
