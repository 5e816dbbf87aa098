// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration loading.

use crate::error::{BcError, ConfigError, Result, ResultExt};
use std::path::{Path, PathBuf};

use super::schema::BcConfig;

/// Configuration file names to search for, in order of priority.
const CONFIG_FILES: &[&str] = &[
    "batch-commit.toml",
    ".batch-commit.toml",
    ".config/batch-commit.toml",
];

/// Find the configuration file starting from a specific directory.
pub fn find_config_file_from(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        for config_name in CONFIG_FILES {
            let config_path = current.join(config_name);
            if config_path.exists() {
                return Some(config_path);
            }
        }

        // Try parent directory
        if !current.pop() {
            break;
        }
    }

    // Also check user's home directory
    if let Some(home) = dirs::home_dir() {
        for config_name in CONFIG_FILES {
            let config_path = home.join(config_name);
            if config_path.exists() {
                return Some(config_path);
            }
        }
    }

    // Check XDG config directory
    if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("batch-commit").join("config.toml");
        if config_path.exists() {
            return Some(config_path);
        }
    }

    None
}

/// Load configuration for a working directory, falling back to defaults.
pub fn load_config_in(dir: &Path) -> Result<BcConfig> {
    match find_config_file_from(dir) {
        Some(path) => load_config_from(&path),
        None => {
            tracing::debug!("No configuration file found, using defaults");
            Ok(BcConfig::default())
        }
    }
}

/// Load configuration from a specific path.
pub fn load_config_from(path: &Path) -> Result<BcConfig> {
    tracing::debug!("Loading configuration from: {:?}", path);

    if !path.exists() {
        return Err(BcError::Config(ConfigError::NotFound {
            path: path.to_path_buf(),
        }));
    }

    let content = std::fs::read_to_string(path)
        .context(format!("Failed to read {}", path.display()))?;

    parse_config(&content)
}

/// Parse configuration from a TOML string.
pub fn parse_config(content: &str) -> Result<BcConfig> {
    toml::from_str(content).map_err(|e| {
        BcError::Config(ConfigError::ParseError {
            message: format!("Failed to parse TOML: {}", e),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_empty_config() {
        let config = parse_config("").unwrap();
        assert_eq!(config, BcConfig::default());
    }

    #[test]
    fn test_parse_custom_config() {
        let toml = r#"
[batch]
target_commits = 20
final_message = "chore: sweep"

[push]
enabled = false
remote = "upstream"
branch = "develop"
"#;
        let config = parse_config(toml).unwrap();
        assert_eq!(config.batch.target_commits, 20);
        assert_eq!(config.batch.final_message, "chore: sweep");
        assert_eq!(config.batch.single_message, "feat: update {basename}");
        assert!(!config.push.enabled);
        assert_eq!(config.push.remote, "upstream");
        assert_eq!(config.push.branch.as_deref(), Some("develop"));
    }

    #[test]
    fn test_parse_invalid_toml() {
        let result = parse_config("[batch\ntarget_commits = ");
        assert!(matches!(
            result,
            Err(BcError::Config(ConfigError::ParseError { .. }))
        ));
    }

    #[test]
    fn test_parse_wrong_type() {
        let result = parse_config("[batch]\ntarget_commits = \"many\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = load_config_from(&dir.path().join("nope.toml"));
        assert!(matches!(
            result,
            Err(BcError::Config(ConfigError::NotFound { .. }))
        ));
    }

    #[test]
    fn test_find_config_in_parent() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("batch-commit.toml"),
            "[batch]\ntarget_commits = 7\n",
        )
        .unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let found = find_config_file_from(&nested).unwrap();
        assert_eq!(found, dir.path().join("batch-commit.toml"));

        let config = load_config_in(&nested).unwrap();
        assert_eq!(config.batch.target_commits, 7);
    }

    #[test]
    fn test_dotfile_config() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(".batch-commit.toml"),
            "[push]\nremote = \"mirror\"\n",
        )
        .unwrap();

        let config = load_config_in(dir.path()).unwrap();
        assert_eq!(config.push.remote, "mirror");
    }
}
