//! Error types.

use thiserror::Error;

/// Reasons a comment produced no classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ClassifyError {
    /// Text was empty or whitespace-only.
    #[error("please enter a comment to analyze")]
    EmptyInput,

    /// No emoji and no word tokens were found.
    #[error("could not detect sentiment; try a longer comment or add some emoji")]
    NoSignal,

    /// Classification is switched off in the configuration.
    #[error("sentiment classification is disabled")]
    Disabled,
}

/// Errors that can occur while loading classifier configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error reading a configuration file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A value is outside its permitted range.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Result type for classification.
pub type Result<T> = std::result::Result<T, ClassifyError>;
