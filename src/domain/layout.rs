//! Fixed project layout, relative to the workspace root.

use std::path::{Path, PathBuf};

/// Isolated Python dependency environment.
pub const VENV_DIR: &str = "venv";

/// Dependency manifest consumed by the package installer.
pub const REQUIREMENTS_FILE: &str = "requirements.txt";

/// Credentials and tunables read by the application at startup.
pub const ENV_FILE: &str = ".env";

/// Smoke-test input document.
pub const SAMPLE_DOCUMENT: &str = "tests/sample_files/sample1.docx";

/// Helper scripts that get their executable bit normalized.
pub const SCRIPTS_DIR: &str = "scripts";

/// Scratch space for in-flight uploads.
pub const TEMP_UPLOAD_DIR: &str = "uploads/temp";

/// Destination of the generated placeholder backgrounds.
pub const DEFAULT_IMAGES_DIR: &str = "assets/default_images";

/// Directories created by the bootstrap, in creation order.
pub const PROJECT_DIRS: [&str; 13] = [
    "uploads/word_files",
    TEMP_UPLOAD_DIR,
    "outputs/presentations",
    "outputs/previews",
    "assets/fonts",
    "assets/templates",
    DEFAULT_IMAGES_DIR,
    "logs",
    "config",
    "tests/sample_files",
    "static/js",
    "docs",
    SCRIPTS_DIR,
];

/// Interpreter inside a virtual environment.
pub fn venv_python(venv_dir: &Path) -> PathBuf {
    if cfg!(windows) {
        venv_dir.join("Scripts").join("python.exe")
    } else {
        venv_dir.join("bin").join("python")
    }
}
