// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI module for batch-commit.
//!
//! This module handles command-line argument parsing and dispatch.

pub mod args;
mod dispatch;

pub use args::{Cli, OutputFormat};
pub use dispatch::run;
