//! Error types for nexttask
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

/// All error types that can occur in nexttask
#[derive(Debug, Error)]
pub enum NextTaskError {
    /// Configuration could not be read, parsed, or failed validation
    #[error("Config error: {0}")]
    Config(String),

    /// IO error while prompting or reading input
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML deserialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type alias for nexttask operations
pub type Result<T> = std::result::Result<T, NextTaskError>;
