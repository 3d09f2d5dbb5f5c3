//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::PathBuf;

use crate::adapters::filesystem::FilesystemStore;
use crate::adapters::python_command::PythonCommandAdapter;
use crate::app::AppContext;
use crate::app::commands::{bootstrap, check, clean};
use crate::app::config::BootstrapOptions;

pub use crate::app::commands::bootstrap::{BootstrapReport, FileOutcome, ScriptPermissions};
pub use crate::app::commands::check::CheckReport;
pub use crate::app::commands::clean::CleanOutcome;
pub use crate::domain::AppError;

/// Create an `AppContext` for a given path.
fn create_context(
    path: PathBuf,
    options: &BootstrapOptions,
) -> AppContext<FilesystemStore, PythonCommandAdapter> {
    let filesystem = FilesystemStore::new(path.clone());
    let runtime = PythonCommandAdapter::new(path, options.interpreter.clone());
    AppContext::new(filesystem, runtime)
}

// =============================================================================
// Bootstrap Command API
// =============================================================================

/// Bootstrap the workspace in the current directory.
pub fn bootstrap() -> Result<BootstrapReport, AppError> {
    bootstrap_at(std::env::current_dir()?, &BootstrapOptions::from_env())
}

/// Bootstrap the workspace at the specified path.
pub fn bootstrap_at(
    path: impl Into<PathBuf>,
    options: &BootstrapOptions,
) -> Result<BootstrapReport, AppError> {
    let ctx = create_context(path.into(), options);
    bootstrap::execute(&ctx)
}

// =============================================================================
// Check / Clean Command API
// =============================================================================

/// Check the workspace in the current directory.
pub fn check() -> Result<CheckReport, AppError> {
    check_at(std::env::current_dir()?)
}

/// Check the workspace at the specified path.
pub fn check_at(path: impl Into<PathBuf>) -> Result<CheckReport, AppError> {
    check::execute(&FilesystemStore::new(path.into()))
}

/// Empty the temporary upload directory under the current directory.
pub fn clean() -> Result<CleanOutcome, AppError> {
    clean_at(std::env::current_dir()?)
}

/// Empty the temporary upload directory under the specified path.
pub fn clean_at(path: impl Into<PathBuf>) -> Result<CleanOutcome, AppError> {
    clean::execute(&FilesystemStore::new(path.into()))
}
