//! Clean command implementation.

use crate::domain::AppError;

pub fn run_clean() -> Result<(), AppError> {
    let outcome = crate::app::api::clean()?;
    println!("✅ Removed {} temporary file(s)", outcome.removed.len());
    for (path, error) in &outcome.failed {
        println!("⚠️  Error deleting {}: {}", path, error);
    }
    Ok(())
}
