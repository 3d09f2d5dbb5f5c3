use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::domain::AppError;
use crate::domain::layout::venv_python;
use crate::ports::PythonRuntime;

/// Drives the Python toolchain through child processes.
#[derive(Debug, Clone)]
pub struct PythonCommandAdapter {
    root: PathBuf,
    interpreter: String,
}

/// Stage of the toolchain a command belongs to; selects the error variant.
#[derive(Debug, Clone, Copy)]
enum Stage {
    Probe,
    Environment,
    Install,
}

impl PythonCommandAdapter {
    pub fn new(root: PathBuf, interpreter: impl Into<String>) -> Self {
        Self { root, interpreter: interpreter.into() }
    }

    fn env_python(&self, venv_dir: &str) -> PathBuf {
        self.root.join(venv_python(Path::new(venv_dir)))
    }

    fn run(&self, program: &Path, args: &[&str], stage: Stage) -> Result<String, AppError> {
        let display = format!("{} {}", program.display(), args.join(" "));
        log::debug!("running {display}");

        let output =
            Command::new(program).args(args).current_dir(&self.root).output().map_err(|e| {
                let details = match e.kind() {
                    ErrorKind::NotFound => format!("{} not found", program.display()),
                    _ => e.to_string(),
                };
                stage_error(stage, program, display.clone(), details)
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let details = if stderr.is_empty() {
                format!("exited with {}", output.status)
            } else {
                stderr
            };
            return Err(stage_error(stage, program, display, details));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

fn stage_error(stage: Stage, program: &Path, command: String, details: String) -> AppError {
    match stage {
        Stage::Probe => {
            AppError::RuntimeNotFound { program: program.display().to_string(), details }
        }
        Stage::Environment => AppError::EnvironmentCreation { command, details },
        Stage::Install => AppError::DependencyInstall { command, details },
    }
}

impl PythonRuntime for PythonCommandAdapter {
    fn version(&self) -> Result<String, AppError> {
        let interpreter = PathBuf::from(&self.interpreter);
        let stdout = self.run(&interpreter, &["--version"], Stage::Probe)?;
        // Python 2 reports its version on stderr only.
        if stdout.is_empty() {
            return Err(AppError::RuntimeNotFound {
                program: self.interpreter.clone(),
                details: "no version reported".to_string(),
            });
        }
        Ok(stdout)
    }

    fn create_environment(&self, venv_dir: &str) -> Result<(), AppError> {
        let interpreter = PathBuf::from(&self.interpreter);
        self.run(&interpreter, &["-m", "venv", venv_dir], Stage::Environment)?;
        Ok(())
    }

    fn upgrade_installer(&self, venv_dir: &str) -> Result<(), AppError> {
        let python = self.env_python(venv_dir);
        self.run(&python, &["-m", "pip", "install", "--upgrade", "pip"], Stage::Install)?;
        Ok(())
    }

    fn install_requirements(&self, venv_dir: &str, manifest: &str) -> Result<(), AppError> {
        let python = self.env_python(venv_dir);
        self.run(&python, &["-m", "pip", "install", "-r", manifest], Stage::Install)?;
        Ok(())
    }
}
