//! Shared testing harness for `wordslides` integration tests.

use assert_cmd::Command;
use std::collections::BTreeSet;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use wordslides::domain::layout::PROJECT_DIRS;

/// Shell stand-in for a Python interpreter: answers `--version`, creates a
/// venv by copying itself into `<dir>/bin/python`, and fails `pip install -r`
/// when the manifest is missing or names `does-not-exist`. `FAKE_PYTHON_FAIL`
/// set to `venv` or `upgrade` makes that stage exit non-zero.
const FAKE_PYTHON: &str = r#"#!/bin/sh
if [ "$1" = "--version" ]; then
    echo "Python 3.11.9"
    exit 0
fi
if [ "$1" = "-m" ] && [ "$2" = "venv" ]; then
    if [ "$FAKE_PYTHON_FAIL" = "venv" ]; then
        echo "Error: ensurepip is not available" >&2
        exit 1
    fi
    mkdir -p "$3/bin"
    cp "$0" "$3/bin/python"
    exit 0
fi
if [ "$1" = "-m" ] && [ "$2" = "pip" ]; then
    if [ "$4" = "--upgrade" ] && [ "$FAKE_PYTHON_FAIL" = "upgrade" ]; then
        echo "ERROR: Could not fetch URL https://pypi.org/simple/pip/" >&2
        exit 1
    fi
    if [ "$4" = "-r" ]; then
        if [ ! -f "$5" ]; then
            echo "ERROR: Could not open requirements file: $5" >&2
            exit 1
        fi
        if grep -q "does-not-exist" "$5"; then
            echo "ERROR: No matching distribution found for does-not-exist" >&2
            exit 1
        fi
    fi
    exit 0
fi
echo "unexpected arguments: $*" >&2
exit 2
"#;

/// Testing harness providing an isolated environment for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
    python: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment with a resolvable requirements file.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        let bin_dir = root.path().join("bin");
        fs::create_dir_all(&bin_dir).expect("Failed to create fake bin directory");
        let python = bin_dir.join("python3");
        fs::write(&python, FAKE_PYTHON).expect("Failed to write fake python");
        fs::set_permissions(&python, fs::Permissions::from_mode(0o755))
            .expect("Failed to make fake python executable");

        let ctx = Self { root, work_dir, python };
        ctx.write("requirements.txt", "flask\n");
        ctx
    }

    /// Path to the workspace directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled binary within the workspace.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("wordslides").expect("Failed to locate wordslides binary");
        cmd.current_dir(&self.work_dir)
            .env("WORDSLIDES_PYTHON", &self.python)
            .env_remove("RUST_LOG")
            .env_remove("FAKE_PYTHON_FAIL");
        cmd
    }

    /// Like `cli`, but the fake interpreter fails at `stage` (`venv` or `upgrade`).
    pub fn cli_failing_at(&self, stage: &str) -> Command {
        let mut cmd = self.cli();
        cmd.env("FAKE_PYTHON_FAIL", stage);
        cmd
    }

    /// Like `cli`, but with an interpreter path that does not exist.
    pub fn cli_without_python(&self) -> Command {
        let mut cmd = self.cli();
        cmd.env("WORDSLIDES_PYTHON", self.root.path().join("bin/missing-python3"));
        cmd
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.work_dir.join(relative)
    }

    pub fn write(&self, relative: &str, content: &str) {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(path, content).expect("Failed to write test file");
    }

    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.path(relative)).expect("Failed to read test file")
    }

    /// Every directory and file under the workspace, relative and sorted.
    pub fn tree(&self) -> BTreeSet<String> {
        let mut entries = BTreeSet::new();
        collect(&self.work_dir, &self.work_dir, &mut entries);
        entries
    }

    pub fn assert_project_dirs_exist(&self) {
        for dir in PROJECT_DIRS {
            assert!(self.path(dir).is_dir(), "{dir} should exist");
        }
    }

    pub fn assert_no_project_dirs(&self) {
        for dir in PROJECT_DIRS {
            assert!(!self.path(dir).exists(), "{dir} should not exist");
        }
    }

    /// Value of `key` in the workspace `.env`.
    pub fn env_value(&self, key: &str) -> Option<String> {
        let prefix = format!("{key}=");
        self.read(".env").lines().find_map(|l| l.strip_prefix(&prefix).map(str::to_string))
    }
}

#[allow(dead_code)]
fn collect(root: &Path, dir: &Path, out: &mut BTreeSet<String>) {
    for entry in fs::read_dir(dir).expect("Failed to read directory") {
        let path = entry.expect("Failed to read entry").path();
        let relative = path.strip_prefix(root).unwrap().to_string_lossy().to_string();
        out.insert(relative);
        if path.is_dir() {
            collect(root, &path, out);
        }
    }
}
