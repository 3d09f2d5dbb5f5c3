use std::io;

use thiserror::Error;

/// Library-wide error type for wordslides operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Required interpreter could not be run.
    #[error("{program} is not installed or not on PATH: {details}")]
    RuntimeNotFound { program: String, details: String },

    /// Isolated dependency environment could not be created.
    #[error("Failed to create virtual environment with '{command}': {details}")]
    EnvironmentCreation { command: String, details: String },

    /// Package installer reported a failure.
    #[error("Dependency installation failed running '{command}': {details}")]
    DependencyInstall { command: String, details: String },

    /// Placeholder image could not be produced.
    #[error("Failed to generate placeholder image '{asset}': {details}")]
    AssetGeneration { asset: String, details: String },

    /// Embedded template could not be rendered.
    #[error("Template error in '{name}': {details}")]
    Template { name: String, details: String },

    /// Environment file could not be parsed.
    #[error("Malformed .env file: {0}")]
    MalformedEnvFile(String),

    /// Setting value present but unusable.
    #[error("Invalid value '{value}' for {key}: {reason}")]
    InvalidSetting { key: String, value: String, reason: String },

    /// Path escapes the workspace root.
    #[error("Path traversal detected: {0}")]
    PathTraversal(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
