//! Check command implementation.

use crate::domain::AppError;

pub fn run_check(json: bool) -> Result<i32, AppError> {
    let report = crate::app::api::check()?;

    if json {
        let rendered = serde_json::to_string_pretty(&report)
            .map_err(|e| AppError::config_error(format!("Failed to serialize report: {e}")))?;
        println!("{}", rendered);
    } else if report.is_healthy() {
        println!("✅ Workspace is ready (model: {})", report.openai.model);
        println!(
            "   Uploads: .{} up to {} MiB",
            report.allowed_extensions.join(", ."),
            report.max_upload_bytes / (1024 * 1024)
        );
    } else {
        println!("⚠️  Workspace needs attention:");
        for issue in report.issues() {
            println!("  • {}", issue);
        }
    }

    Ok(if report.is_healthy() { 0 } else { 1 })
}
