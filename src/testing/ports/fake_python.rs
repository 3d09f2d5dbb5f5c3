use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::PythonRuntime;

/// Scripted `PythonRuntime` that records every call.
pub struct FakePython {
    calls: Mutex<Vec<String>>,
    installed: bool,
    environment_fails: bool,
    upgrade_fails: bool,
    install_fails: bool,
}

impl Default for FakePython {
    fn default() -> Self {
        Self::new()
    }
}

impl FakePython {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            installed: true,
            environment_fails: false,
            upgrade_fails: false,
            install_fails: false,
        }
    }

    /// Interpreter that cannot be found.
    pub fn missing() -> Self {
        Self { installed: false, ..Self::new() }
    }

    /// Interpreter whose `venv` module fails.
    pub fn failing_environment() -> Self {
        Self { environment_fails: true, ..Self::new() }
    }

    /// Interpreter whose installer self-upgrade fails.
    pub fn failing_upgrade() -> Self {
        Self { upgrade_fails: true, ..Self::new() }
    }

    /// Interpreter whose requirement installation fails.
    pub fn failing_install() -> Self {
        Self { install_fails: true, ..Self::new() }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

impl PythonRuntime for FakePython {
    fn version(&self) -> Result<String, AppError> {
        self.record("version".to_string());
        if !self.installed {
            return Err(AppError::RuntimeNotFound {
                program: "python3".to_string(),
                details: "python3 not found".to_string(),
            });
        }
        Ok("Python 3.11.9".to_string())
    }

    fn create_environment(&self, venv_dir: &str) -> Result<(), AppError> {
        self.record(format!("venv {venv_dir}"));
        if self.environment_fails {
            return Err(AppError::EnvironmentCreation {
                command: format!("python3 -m venv {venv_dir}"),
                details: "ensurepip is not available".to_string(),
            });
        }
        Ok(())
    }

    fn upgrade_installer(&self, venv_dir: &str) -> Result<(), AppError> {
        self.record(format!("upgrade-pip {venv_dir}"));
        if self.upgrade_fails {
            return Err(AppError::DependencyInstall {
                command: "pip install --upgrade pip".to_string(),
                details: "Could not fetch URL".to_string(),
            });
        }
        Ok(())
    }

    fn install_requirements(&self, venv_dir: &str, manifest: &str) -> Result<(), AppError> {
        self.record(format!("install {venv_dir} {manifest}"));
        if self.install_fails {
            return Err(AppError::DependencyInstall {
                command: format!("pip install -r {manifest}"),
                details: "No matching distribution found".to_string(),
            });
        }
        Ok(())
    }
}
