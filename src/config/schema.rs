// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.
//!
//! Defines all configuration structures that can be loaded from
//! batch-commit.toml.

use serde::{Deserialize, Serialize};

use super::default::BASENAME_PLACEHOLDER;
use crate::error::{BcError, ConfigError, Result};

/// The main configuration structure for batch-commit.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct BcConfig {
    /// How pending changes are split into commits.
    pub batch: BatchConfig,

    /// What happens after the commits are created.
    pub push: PushConfig,
}

impl BcConfig {
    /// Load configuration by searching upward from `dir`.
    pub fn load_in(dir: &std::path::Path) -> Result<Self> {
        super::loader::load_config_in(dir)
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        super::loader::load_config_from(path)
    }

    /// Reject values a run cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.batch.target_commits == 0 {
            return Err(invalid("batch.target_commits", "must be at least 1"));
        }

        if !self.batch.single_message.contains(BASENAME_PLACEHOLDER) {
            return Err(invalid(
                "batch.single_message",
                &format!("must contain the {} placeholder", BASENAME_PLACEHOLDER),
            ));
        }

        if self.batch.final_message.trim().is_empty() {
            return Err(invalid("batch.final_message", "must not be empty"));
        }

        if self.push.remote.trim().is_empty() {
            return Err(invalid("push.remote", "must not be empty"));
        }

        Ok(())
    }
}

fn invalid(key: &str, message: &str) -> BcError {
    BcError::Config(ConfigError::InvalidValue {
        key: key.to_string(),
        message: message.to_string(),
    })
}

/// Batch splitting configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BatchConfig {
    /// Number of commits a run produces when enough files are pending.
    pub target_commits: usize,

    /// Message template for single-file commits.
    pub single_message: String,

    /// Message for the final catch-all commit.
    pub final_message: String,
}

impl BatchConfig {
    /// Render the single-file commit message for a file name.
    pub fn single_message_for(&self, basename: &str) -> String {
        self.single_message.replace(BASENAME_PLACEHOLDER, basename)
    }
}

/// Push configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PushConfig {
    /// Whether to push at the end of a run.
    pub enabled: bool,

    /// Remote to push to.
    pub remote: String,

    /// Branch to push (defaults to the checked-out branch).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_message_for() {
        let batch = BatchConfig::default();
        assert_eq!(batch.single_message_for("main.rs"), "feat: update main.rs");
    }

    #[test]
    fn test_custom_single_message() {
        let batch = BatchConfig {
            single_message: "chore({basename}): sync {basename}".to_string(),
            ..BatchConfig::default()
        };
        assert_eq!(
            batch.single_message_for("a.txt"),
            "chore(a.txt): sync a.txt"
        );
    }

    #[test]
    fn test_validate_rejects_zero_target() {
        let mut config = BcConfig::default();
        config.batch.target_commits = 0;

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("batch.target_commits"));
    }

    #[test]
    fn test_validate_rejects_template_without_placeholder() {
        let mut config = BcConfig::default();
        config.batch.single_message = "feat: update".to_string();

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("batch.single_message"));
    }

    #[test]
    fn test_validate_rejects_empty_remote() {
        let mut config = BcConfig::default();
        config.push.remote = "  ".to_string();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_serialize_roundtrips_through_toml() {
        let mut config = BcConfig::default();
        config.push.branch = Some("main".to_string());

        let text = toml::to_string(&config).unwrap();
        assert!(text.contains("target_commits = 111"));
        assert!(text.contains("branch = \"main\""));
    }
}
