use std::path::Path;

use crate::adapters::assets::scaffold_assets::{render_env_file, sample_document};
use crate::domain::layout::{
    DEFAULT_IMAGES_DIR, ENV_FILE, PROJECT_DIRS, SAMPLE_DOCUMENT, SCRIPTS_DIR,
};
use crate::domain::secret::generate_secret_key;
use crate::domain::{AppError, PlaceholderRole};
use crate::ports::RepositoryFilesystem;

use super::{FileOutcome, ScriptPermissions};

pub(super) fn create_directories<F: RepositoryFilesystem>(
    fs: &F,
) -> Result<Vec<&'static str>, AppError> {
    for dir in PROJECT_DIRS {
        fs.create_dir_all(dir)?;
    }
    log::info!("ensured {} project directories", PROJECT_DIRS.len());
    Ok(PROJECT_DIRS.to_vec())
}

/// Always rewrites; output is deterministic so repeats are harmless.
pub(super) fn write_placeholder_images<F: RepositoryFilesystem>(
    fs: &F,
) -> Result<Vec<String>, AppError> {
    let mut written = Vec::with_capacity(PlaceholderRole::ALL.len());
    for role in PlaceholderRole::ALL {
        let path = format!("{}/{}", DEFAULT_IMAGES_DIR, role.file_name());
        let bytes = role.encode_jpeg()?;
        fs.write_bytes(&path, &bytes)?;
        log::debug!("wrote {} placeholder ({} bytes) to {path}", role.name(), bytes.len());
        written.push(path);
    }
    Ok(written)
}

pub(super) fn write_env_file<F: RepositoryFilesystem>(fs: &F) -> Result<FileOutcome, AppError> {
    if fs.file_exists(ENV_FILE) {
        log::info!("{ENV_FILE} already exists, leaving it unchanged");
        return Ok(FileOutcome::Preserved);
    }
    let content = render_env_file(&generate_secret_key())?;
    fs.write_file(ENV_FILE, &content)?;
    Ok(FileOutcome::Created)
}

pub(super) fn write_sample_document<F: RepositoryFilesystem>(
    fs: &F,
) -> Result<FileOutcome, AppError> {
    if fs.file_exists(SAMPLE_DOCUMENT) {
        return Ok(FileOutcome::Preserved);
    }
    fs.write_file(SAMPLE_DOCUMENT, sample_document()?)?;
    Ok(FileOutcome::Created)
}

/// Best effort: every failure is logged and recorded, never returned.
pub(super) fn mark_scripts_executable<F: RepositoryFilesystem>(fs: &F) -> ScriptPermissions {
    let mut outcome = ScriptPermissions::default();
    let entries = match fs.list_dir(SCRIPTS_DIR) {
        Ok(entries) => entries,
        Err(err) => {
            log::warn!("could not list {SCRIPTS_DIR}/: {err}");
            outcome.failed.push((SCRIPTS_DIR.to_string(), err.to_string()));
            return outcome;
        }
    };
    for entry in entries {
        let path = relative_str(&entry);
        if fs.is_dir(&path) {
            continue;
        }
        match fs.set_executable(&path) {
            Ok(()) => outcome.marked.push(path),
            Err(err) => {
                log::warn!("could not mark {path} executable: {err}");
                outcome.failed.push((path, err.to_string()));
            }
        }
    }
    outcome
}

fn relative_str(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
