//! Error types for Sitepipe

use std::io;
use thiserror::Error;

/// Result type alias for Sitepipe operations
pub type Result<T> = std::result::Result<T, PipeError>;

/// Main error type for Sitepipe
#[derive(Error, Debug)]
pub enum PipeError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Step execution errors
    #[error("Execution error: {0}")]
    Execution(#[from] ExecutionError),

    /// Variable interpolation errors
    #[error("Interpolation error: {0}")]
    Interpolation(#[from] InterpolationError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// YAML parsing errors
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl PipeError {
    /// Exit code to hand back to the shell.
    ///
    /// A failed external command keeps its own exit code; everything else
    /// maps to 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            PipeError::Execution(ExecutionError::CommandFailed(Some(code))) => *code,
            _ => 1,
        }
    }
}

/// Configuration parsing and validation errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Step execution errors
#[derive(Error, Debug)]
pub enum ExecutionError {
    #[error("Command failed with exit code {0:?}")]
    CommandFailed(Option<i32>),

    #[error("Failed to clean '{path}': {reason}")]
    Clean { path: String, reason: String },
}

/// Variable interpolation errors
#[derive(Error, Debug)]
pub enum InterpolationError {
    #[error("Recursive interpolation detected")]
    RecursiveInterpolation,
}

/// Specialized result type for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Specialized result type for execution operations
pub type ExecutionResult<T> = std::result::Result<T, ExecutionError>;

/// Specialized result type for interpolation operations
pub type InterpolationResult<T> = std::result::Result<T, InterpolationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_from_failed_command() {
        let err = PipeError::Execution(ExecutionError::CommandFailed(Some(7)));
        assert_eq!(err.exit_code(), 7);
    }

    #[test]
    fn test_exit_code_without_status() {
        let err = PipeError::Execution(ExecutionError::CommandFailed(None));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_exit_code_for_config_error() {
        let err = PipeError::Config(ConfigError::Invalid("bad".to_string()));
        assert_eq!(err.exit_code(), 1);
    }
}
