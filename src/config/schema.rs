//! Configuration validation
//!
//! This module provides validation logic for configuration files.

use crate::config::types::Config;
use crate::error::{ConfigError, ConfigResult};

/// Validate a complete configuration
pub fn validate_config(config: &Config) -> ConfigResult<()> {
    for target in &config.clean {
        validate_clean_target(target)?;
    }

    if config.site.source.trim().is_empty() {
        return Err(ConfigError::Invalid(
            "site.source must not be empty".to_string(),
        ));
    }
    if config.site.bin.trim().is_empty() {
        return Err(ConfigError::Invalid(
            "site.bin must not be empty".to_string(),
        ));
    }
    if config.hosting.bin.trim().is_empty() {
        return Err(ConfigError::Invalid(
            "hosting.bin must not be empty".to_string(),
        ));
    }
    if config.hosting.private_key_env.trim().is_empty()
        || config.hosting.api_key_env.trim().is_empty()
    {
        return Err(ConfigError::Invalid(
            "hosting credential variable names must not be empty".to_string(),
        ));
    }

    if let Some(interpreter) = &config.interpreter {
        if interpreter.is_empty() {
            return Err(ConfigError::Invalid(
                "interpreter must name a binary".to_string(),
            ));
        }
    }

    Ok(())
}

/// Validate a single clean target
///
/// Rejects empty targets and anything that resolves to the filesystem root.
fn validate_clean_target(target: &str) -> ConfigResult<()> {
    let trimmed = target.trim();

    if trimmed.is_empty() {
        return Err(ConfigError::Invalid(
            "clean targets must not be empty".to_string(),
        ));
    }

    if trimmed.trim_end_matches('/').is_empty() {
        return Err(ConfigError::Invalid(format!(
            "refusing to clean filesystem root: '{}'",
            target
        )));
    }

    Ok(())
}
