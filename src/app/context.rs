use crate::ports::{PythonRuntime, RepositoryFilesystem};

/// Application context holding dependencies for command execution.
pub struct AppContext<F: RepositoryFilesystem, P: PythonRuntime> {
    filesystem: F,
    runtime: P,
}

impl<F: RepositoryFilesystem, P: PythonRuntime> AppContext<F, P> {
    /// Create a new application context.
    pub fn new(filesystem: F, runtime: P) -> Self {
        Self { filesystem, runtime }
    }

    /// Get a reference to the workspace filesystem.
    pub fn filesystem(&self) -> &F {
        &self.filesystem
    }

    /// Get a reference to the Python toolchain.
    pub fn runtime(&self) -> &P {
        &self.runtime
    }
}
