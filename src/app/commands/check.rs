//! Check command: report what still stands between the workspace and a
//! runnable application.

use serde::Serialize;

use crate::app::config::load_settings;
use crate::domain::layout::{DEFAULT_IMAGES_DIR, ENV_FILE, PROJECT_DIRS};
use crate::domain::settings::ALLOWED_EXTENSIONS;
use crate::domain::{AppError, OpenAiSettings, PlaceholderRole, Settings};
use crate::ports::RepositoryFilesystem;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckReport {
    pub env_file_present: bool,
    pub unconfigured_credentials: Vec<String>,
    pub default_secret_key: bool,
    pub missing_directories: Vec<String>,
    pub missing_images: Vec<String>,
    pub openai: OpenAiSettings,
    pub max_upload_bytes: u64,
    pub allowed_extensions: Vec<String>,
}

impl CheckReport {
    pub fn is_healthy(&self) -> bool {
        self.issues().is_empty()
    }

    /// Human-readable issue lines, empty when healthy.
    pub fn issues(&self) -> Vec<String> {
        let mut issues = Vec::new();
        if !self.env_file_present {
            issues.push(format!("{ENV_FILE} not found; run `wordslides bootstrap` first"));
        }
        for key in &self.unconfigured_credentials {
            issues.push(format!("{key} is not set in {ENV_FILE}"));
        }
        if self.default_secret_key {
            issues.push("FLASK_SECRET_KEY uses the insecure development default".to_string());
        }
        for dir in &self.missing_directories {
            issues.push(format!("missing directory {dir}/"));
        }
        for image in &self.missing_images {
            issues.push(format!("missing placeholder image {image}"));
        }
        issues
    }
}

pub fn execute<F: RepositoryFilesystem>(fs: &F) -> Result<CheckReport, AppError> {
    let loaded = load_settings(fs)?;
    let env_file_present = loaded.is_some();
    let settings = loaded.unwrap_or_else(Settings::default);

    let missing_directories =
        PROJECT_DIRS.iter().filter(|dir| !fs.is_dir(dir)).map(|dir| dir.to_string()).collect();

    let missing_images = PlaceholderRole::ALL
        .iter()
        .map(|role| format!("{}/{}", DEFAULT_IMAGES_DIR, role.file_name()))
        .filter(|path| !fs.file_exists(path))
        .collect();

    Ok(CheckReport {
        env_file_present,
        unconfigured_credentials: settings
            .unconfigured_credentials()
            .into_iter()
            .map(str::to_string)
            .collect(),
        default_secret_key: settings.uses_default_secret(),
        missing_directories,
        missing_images,
        openai: settings.openai,
        max_upload_bytes: settings.max_content_length,
        allowed_extensions: ALLOWED_EXTENSIONS.iter().map(|ext| ext.to_string()).collect(),
    })
}
