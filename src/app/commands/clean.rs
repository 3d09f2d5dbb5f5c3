//! Clean command: empty the temporary upload directory.

use crate::domain::AppError;
use crate::domain::layout::TEMP_UPLOAD_DIR;
use crate::ports::RepositoryFilesystem;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanOutcome {
    pub removed: Vec<String>,
    pub failed: Vec<(String, String)>,
}

/// Remove regular files directly under the temp directory.
///
/// Subdirectories are left in place. A failure on one file is logged and
/// recorded, and cleaning moves on to the next.
pub fn execute<F: RepositoryFilesystem>(fs: &F) -> Result<CleanOutcome, AppError> {
    let mut outcome = CleanOutcome::default();
    if !fs.is_dir(TEMP_UPLOAD_DIR) {
        return Ok(outcome);
    }

    for entry in fs.list_dir(TEMP_UPLOAD_DIR)? {
        let path = entry.to_string_lossy().replace('\\', "/");
        if fs.is_dir(&path) {
            continue;
        }
        match fs.remove_file(&path) {
            Ok(()) => outcome.removed.push(path),
            Err(err) => {
                log::warn!("error deleting {path}: {err}");
                outcome.failed.push((path, err.to_string()));
            }
        }
    }

    Ok(outcome)
}
