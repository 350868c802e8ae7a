//! Configuration file parsing and discovery

use crate::config::types::Config;
use crate::error::{ConfigError, PipeError};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Default configuration file names to search for
const CONFIG_FILE_NAMES: &[&str] = &["sitepipe.yml", "sitepipe.yaml"];

/// Find the configuration file by searching current and parent directories
pub fn find_config_file() -> Option<PathBuf> {
    let start = env::current_dir().ok()?;
    find_config_file_from(start)
}

/// Find the configuration file starting from a specific directory
pub fn find_config_file_from(start_dir: PathBuf) -> Option<PathBuf> {
    let mut current_dir = start_dir;

    loop {
        for file_name in CONFIG_FILE_NAMES {
            let config_path = current_dir.join(file_name);
            if config_path.exists() && config_path.is_file() {
                return Some(config_path);
            }
        }

        // Try parent directory
        match current_dir.parent() {
            Some(parent) => current_dir = parent.to_path_buf(),
            None => return None,
        }
    }
}

/// Parse a configuration file from a path
pub fn parse_config_file(path: &Path) -> Result<Config, PipeError> {
    let contents = fs::read_to_string(path).map_err(|e| {
        ConfigError::Invalid(format!("Failed to read '{}': {}", path.display(), e))
    })?;

    parse_config(&contents)
}

/// Parse configuration from a string
pub fn parse_config(yaml: &str) -> Result<Config, PipeError> {
    let config: Config = serde_yaml::from_str(yaml)?;
    Ok(config)
}

/// Parse configuration with automatic file discovery
///
/// A missing config file is not an error: the built-in defaults describe
/// the conventional project layout.
pub fn parse_config_auto() -> Result<(Config, Option<PathBuf>), PipeError> {
    match find_config_file() {
        Some(path) => {
            let config = parse_config_file(&path)?;
            Ok((config, Some(path)))
        }
        None => Ok((Config::default(), None)),
    }
}
