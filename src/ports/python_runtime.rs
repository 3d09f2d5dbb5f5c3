//! Python interpreter and package installer.

use crate::domain::AppError;

/// Port for the external Python toolchain driven by the bootstrap.
///
/// Paths are relative to the workspace root the implementation is bound to.
pub trait PythonRuntime {
    /// Report the interpreter version, failing when it cannot be run.
    fn version(&self) -> Result<String, AppError>;

    /// Create an isolated environment at `venv_dir`.
    fn create_environment(&self, venv_dir: &str) -> Result<(), AppError>;

    /// Upgrade the package installer inside the environment.
    fn upgrade_installer(&self, venv_dir: &str) -> Result<(), AppError>;

    /// Install every requirement listed in `manifest` into the environment.
    fn install_requirements(&self, venv_dir: &str, manifest: &str) -> Result<(), AppError>;
}
