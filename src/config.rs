use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::domain::SelectionPolicy;
use crate::error::{Result, VersionError};

/// File name looked up in the working directory and the user config directory
pub const CONFIG_FILE_NAME: &str = "installer-version.toml";

/// Represents the complete configuration for installer-version.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub selection: SelectionConfig,
}

fn default_true() -> bool {
    true
}

/// Controls which versions are eligible when picking the latest release.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct SelectionConfig {
    #[serde(default = "default_true")]
    pub allow_specifiers: bool,

    #[serde(default = "default_true")]
    pub allow_commit_builds: bool,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        SelectionConfig {
            allow_specifiers: true,
            allow_commit_builds: true,
        }
    }
}

impl From<&SelectionConfig> for SelectionPolicy {
    fn from(config: &SelectionConfig) -> Self {
        SelectionPolicy {
            allow_specifiers: config.allow_specifiers,
            allow_commit_builds: config.allow_commit_builds,
        }
    }
}

/// Parses configuration from TOML text
pub fn parse_config(config_str: &str) -> Result<Config> {
    toml::from_str(config_str).map_err(|e| VersionError::config(e.to_string()))
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `installer-version.toml` in current directory
/// 3. `installer-version.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let local = Path::new(".").join(CONFIG_FILE_NAME);
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if local.exists() {
        fs::read_to_string(local)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    parse_config(&config_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_selection_section() {
        let config = parse_config("[selection]\nallow_specifiers = false\n").unwrap();
        assert!(!config.selection.allow_specifiers);
        assert!(config.selection.allow_commit_builds);
    }

    #[test]
    fn test_invalid_value_is_config_error() {
        let err = parse_config("[selection]\nallow_specifiers = \"nope\"\n").unwrap_err();
        assert!(matches!(err, VersionError::Config(_)));
    }

    #[test]
    fn test_selection_into_policy() {
        let selection = SelectionConfig {
            allow_specifiers: false,
            allow_commit_builds: true,
        };
        let policy = SelectionPolicy::from(&selection);
        assert!(!policy.allow_specifiers);
        assert!(policy.allow_commit_builds);
    }
}
