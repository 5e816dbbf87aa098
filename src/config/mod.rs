// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for batch-commit.
//!
//! This module handles loading and parsing configuration from
//! `batch-commit.toml` files, with built-in defaults for every field.

pub mod default;
mod loader;
mod schema;

pub use default::default_config;
pub use loader::{find_config_file_from, load_config_from, load_config_in, parse_config};
pub use schema::*;
