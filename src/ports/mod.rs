mod python_runtime;
mod repository_filesystem;

pub use python_runtime::PythonRuntime;
pub use repository_filesystem::RepositoryFilesystem;
