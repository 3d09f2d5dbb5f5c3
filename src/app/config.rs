//! Configuration loading.
//!
//! Two sources: `BootstrapOptions` from the process environment, and the
//! application `Settings` from the workspace `.env` file.

use crate::domain::layout::ENV_FILE;
use crate::domain::{AppError, Settings};
use crate::ports::RepositoryFilesystem;

/// Overrides the interpreter used to create the virtual environment.
pub const PYTHON_ENV_VAR: &str = "WORDSLIDES_PYTHON";
pub const DEFAULT_PYTHON: &str = "python3";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapOptions {
    pub interpreter: String,
}

impl Default for BootstrapOptions {
    fn default() -> Self {
        Self { interpreter: DEFAULT_PYTHON.to_string() }
    }
}

impl BootstrapOptions {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        match lookup(PYTHON_ENV_VAR).map(|v| v.trim().to_string()) {
            Some(interpreter) if !interpreter.is_empty() => Self { interpreter },
            _ => Self::default(),
        }
    }
}

/// Load settings from `.env`, or `None` when the file does not exist.
pub fn load_settings<F: RepositoryFilesystem>(fs: &F) -> Result<Option<Settings>, AppError> {
    if !fs.file_exists(ENV_FILE) {
        return Ok(None);
    }
    let content = fs.read_file(ENV_FILE)?;
    Settings::from_env_content(&content).map(Some)
}
