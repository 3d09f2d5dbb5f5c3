//! Bootstrap command: bring a fresh checkout to a runnable state.
//!
//! Steps run strictly in order and the first failure aborts the run. The
//! executable-bit step is the one exception: each failure is logged and
//! recorded in the report.

mod steps;

use crate::app::AppContext;
use crate::domain::AppError;
use crate::domain::layout::{REQUIREMENTS_FILE, VENV_DIR};
use crate::ports::{PythonRuntime, RepositoryFilesystem};

/// Whether a guarded file was written by this run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    Created,
    Preserved,
}

/// Result of the best-effort executable-bit step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptPermissions {
    pub marked: Vec<String>,
    /// Path and error for every script that could not be marked.
    pub failed: Vec<(String, String)>,
}

/// Summary of a completed bootstrap run.
#[derive(Debug, Clone)]
pub struct BootstrapReport {
    pub python_version: String,
    pub venv_dir: &'static str,
    pub directories: Vec<&'static str>,
    pub images: Vec<String>,
    pub env_file: FileOutcome,
    pub sample_document: FileOutcome,
    pub scripts: ScriptPermissions,
}

pub fn execute<F, P>(ctx: &AppContext<F, P>) -> Result<BootstrapReport, AppError>
where
    F: RepositoryFilesystem,
    P: PythonRuntime,
{
    let fs = ctx.filesystem();
    let runtime = ctx.runtime();

    let python_version = runtime.version()?;
    log::info!("found {python_version}");

    runtime.create_environment(VENV_DIR)?;
    log::info!("created virtual environment at {VENV_DIR}/");

    runtime.upgrade_installer(VENV_DIR)?;
    runtime.install_requirements(VENV_DIR, REQUIREMENTS_FILE)?;
    log::info!("installed dependencies from {REQUIREMENTS_FILE}");

    let directories = steps::create_directories(fs)?;
    let images = steps::write_placeholder_images(fs)?;
    let env_file = steps::write_env_file(fs)?;
    let sample_document = steps::write_sample_document(fs)?;

    let scripts = steps::mark_scripts_executable(fs);

    Ok(BootstrapReport {
        python_version,
        venv_dir: VENV_DIR,
        directories,
        images,
        env_file,
        sample_document,
        scripts,
    })
}
