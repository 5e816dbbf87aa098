// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Default configuration values.

use super::schema::{BatchConfig, BcConfig, PushConfig};

/// Number of commits a run aims to produce.
pub const DEFAULT_TARGET_COMMITS: usize = 111;

/// Placeholder replaced by the file name in singleton commit messages.
pub const BASENAME_PLACEHOLDER: &str = "{basename}";

/// Message template for commits that carry a single file.
pub const DEFAULT_SINGLE_MESSAGE: &str = "feat: update {basename}";

/// Message for the final commit that carries every remaining file.
pub const DEFAULT_FINAL_MESSAGE: &str = "refactor: complete project updates";

/// Remote pushed to after the commits are created.
pub const DEFAULT_REMOTE: &str = "origin";

/// Get the default configuration.
pub fn default_config() -> BcConfig {
    BcConfig::default()
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            target_commits: DEFAULT_TARGET_COMMITS,
            single_message: DEFAULT_SINGLE_MESSAGE.to_string(),
            final_message: DEFAULT_FINAL_MESSAGE.to_string(),
        }
    }
}

impl Default for PushConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            remote: DEFAULT_REMOTE.to_string(),
            branch: None,
        }
    }
}
