//! Test double for `RepositoryFilesystem`.

use std::collections::BTreeSet;
use std::io;
use std::path::PathBuf;

use crate::domain::AppError;
use crate::ports::RepositoryFilesystem;

use super::test_files::TestFiles;

/// In-memory implementation of `RepositoryFilesystem` for unit tests.
#[derive(Clone, Debug)]
pub struct MockRepositoryFs {
    files: TestFiles,
    fail_set_executable: Option<String>,
    fail_remove: Option<String>,
}

impl MockRepositoryFs {
    pub fn new(files: TestFiles) -> Self {
        Self { files, fail_set_executable: None, fail_remove: None }
    }

    /// Make `set_executable` fail for one specific path.
    pub fn failing_set_executable(mut self, path: &str) -> Self {
        self.fail_set_executable = Some(path.to_string());
        self
    }

    /// Make `remove_file` fail for one specific path.
    pub fn failing_remove(mut self, path: &str) -> Self {
        self.fail_remove = Some(path.to_string());
        self
    }
}

fn denied(path: &str) -> AppError {
    AppError::from(io::Error::new(io::ErrorKind::PermissionDenied, format!("denied: {path}")))
}

impl RepositoryFilesystem for MockRepositoryFs {
    fn read_file(&self, path: &str) -> Result<String, AppError> {
        self.files.text(path).ok_or_else(|| {
            AppError::from(io::Error::new(io::ErrorKind::NotFound, "Mock file not found"))
        })
    }

    fn write_file(&self, path: &str, content: &str) -> Result<(), AppError> {
        self.files.add(path, content);
        Ok(())
    }

    fn write_bytes(&self, path: &str, content: &[u8]) -> Result<(), AppError> {
        self.files.add_bytes(path, content);
        Ok(())
    }

    fn remove_file(&self, path: &str) -> Result<(), AppError> {
        if self.fail_remove.as_deref() == Some(path) {
            return Err(denied(path));
        }
        self.files.files.lock().unwrap().remove(path);
        Ok(())
    }

    fn list_dir(&self, path: &str) -> Result<Vec<PathBuf>, AppError> {
        if !self.is_dir(path) {
            return Err(AppError::from(io::Error::new(
                io::ErrorKind::NotFound,
                "Mock directory not found",
            )));
        }
        let prefix = format!("{}/", path.trim_end_matches('/'));
        let mut children = BTreeSet::new();
        let dirs = self.files.dirs.lock().unwrap();
        let files = self.files.files.lock().unwrap();
        for key in dirs.iter().chain(files.keys()) {
            if let Some(suffix) = key.strip_prefix(&prefix) {
                let child = suffix.split('/').next().unwrap_or(suffix);
                if !child.is_empty() {
                    children.insert(format!("{prefix}{child}"));
                }
            }
        }
        Ok(children.into_iter().map(PathBuf::from).collect())
    }

    fn set_executable(&self, path: &str) -> Result<(), AppError> {
        if self.fail_set_executable.as_deref() == Some(path) {
            return Err(denied(path));
        }
        self.files.executables.lock().unwrap().insert(path.to_string());
        Ok(())
    }

    fn file_exists(&self, path: &str) -> bool {
        self.files.files.lock().unwrap().contains_key(path) || self.files.has_dir(path)
    }

    fn is_dir(&self, path: &str) -> bool {
        self.files.has_dir(path.trim_end_matches('/'))
    }

    fn create_dir_all(&self, path: &str) -> Result<(), AppError> {
        self.files.add_dir(path);
        Ok(())
    }

    fn resolve_path(&self, path: &str) -> PathBuf {
        PathBuf::from(path)
    }
}
