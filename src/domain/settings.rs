//! Typed application settings loaded from the `.env` file.
//!
//! Settings are parsed once and handed to whatever needs them; nothing reads
//! the process environment behind the caller's back.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::AppError;

pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";
pub const UNSPLASH_ACCESS_KEY: &str = "UNSPLASH_ACCESS_KEY";
pub const FLASK_SECRET_KEY: &str = "FLASK_SECRET_KEY";
pub const OPENAI_MODEL: &str = "OPENAI_MODEL";
pub const OPENAI_MAX_TOKENS: &str = "OPENAI_MAX_TOKENS";
pub const OPENAI_TEMPERATURE: &str = "OPENAI_TEMPERATURE";

/// Values written into a fresh `.env` that the user must replace.
pub const OPENAI_KEY_PLACEHOLDER: &str = "your_openai_api_key_here";
pub const UNSPLASH_KEY_PLACEHOLDER: &str = "your_unsplash_access_key_here";

pub const DEFAULT_SECRET_KEY: &str = "dev-secret-key-change-in-production";
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_MAX_TOKENS: u32 = 150;
pub const DEFAULT_TEMPERATURE: f32 = 0.5;

/// Upload size limit enforced by the web front end.
pub const MAX_CONTENT_LENGTH: u64 = 16 * 1024 * 1024;
pub const ALLOWED_EXTENSIONS: &[&str] = &["docx"];

/// Summarization model parameters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OpenAiSettings {
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl Default for OpenAiSettings {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub openai_api_key: Option<String>,
    pub unsplash_access_key: Option<String>,
    pub secret_key: String,
    pub openai: OpenAiSettings,
    pub max_content_length: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            unsplash_access_key: None,
            secret_key: DEFAULT_SECRET_KEY.to_string(),
            openai: OpenAiSettings::default(),
            max_content_length: MAX_CONTENT_LENGTH,
        }
    }
}

impl Settings {
    /// Parse dotenv-formatted content. Unknown keys are ignored.
    ///
    /// `$` substitution in a recognized key is rejected instead of being
    /// expanded from the process environment; single-quoted values are kept
    /// literally.
    pub fn from_env_content(content: &str) -> Result<Self, AppError> {
        reject_substitutions(content)?;
        let mut values = BTreeMap::new();
        for item in dotenvy::from_read_iter(content.as_bytes()) {
            let (key, value) = item.map_err(|e| AppError::MalformedEnvFile(e.to_string()))?;
            values.insert(key, value);
        }
        Self::from_map(&values)
    }

    pub fn from_map(values: &BTreeMap<String, String>) -> Result<Self, AppError> {
        let get = |key: &str| values.get(key).map(|v| v.trim()).filter(|v| !v.is_empty());
        let mut settings = Settings {
            openai_api_key: get(OPENAI_API_KEY).map(str::to_string),
            unsplash_access_key: get(UNSPLASH_ACCESS_KEY).map(str::to_string),
            ..Settings::default()
        };

        if let Some(secret) = get(FLASK_SECRET_KEY) {
            settings.secret_key = secret.to_string();
        }
        if let Some(model) = get(OPENAI_MODEL) {
            settings.openai.model = model.to_string();
        }
        if let Some(raw) = get(OPENAI_MAX_TOKENS) {
            settings.openai.max_tokens = parse_max_tokens(raw)?;
        }
        if let Some(raw) = get(OPENAI_TEMPERATURE) {
            settings.openai.temperature = parse_temperature(raw)?;
        }

        Ok(settings)
    }

    /// Credential keys that are missing or still hold the template placeholder.
    pub fn unconfigured_credentials(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if !is_configured(self.openai_api_key.as_deref(), OPENAI_KEY_PLACEHOLDER) {
            missing.push(OPENAI_API_KEY);
        }
        if !is_configured(self.unsplash_access_key.as_deref(), UNSPLASH_KEY_PLACEHOLDER) {
            missing.push(UNSPLASH_ACCESS_KEY);
        }
        missing
    }

    pub fn uses_default_secret(&self) -> bool {
        self.secret_key == DEFAULT_SECRET_KEY
    }
}

const RECOGNIZED_KEYS: [&str; 6] = [
    OPENAI_API_KEY,
    UNSPLASH_ACCESS_KEY,
    FLASK_SECRET_KEY,
    OPENAI_MODEL,
    OPENAI_MAX_TOKENS,
    OPENAI_TEMPERATURE,
];

fn reject_substitutions(content: &str) -> Result<(), AppError> {
    for line in content.lines() {
        let line = line.trim_start();
        let line = line.strip_prefix("export ").unwrap_or(line);
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        if !RECOGNIZED_KEYS.contains(&key) {
            continue;
        }
        let value = value.trim();
        if value.starts_with('\'') {
            continue;
        }
        // Unquoted values end at an inline comment.
        let checked = if value.starts_with('"') {
            value
        } else {
            value.split(" #").next().unwrap_or(value)
        };
        if checked.contains('$') {
            return Err(AppError::InvalidSetting {
                key: key.to_string(),
                value: value.to_string(),
                reason: "`$` substitution is not supported; single-quote the value to keep it \
                         literal"
                    .to_string(),
            });
        }
    }
    Ok(())
}

fn is_configured(value: Option<&str>, placeholder: &str) -> bool {
    matches!(value, Some(v) if v != placeholder)
}

fn parse_max_tokens(raw: &str) -> Result<u32, AppError> {
    match raw.parse::<u32>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(AppError::InvalidSetting {
            key: OPENAI_MAX_TOKENS.to_string(),
            value: raw.to_string(),
            reason: "expected a positive integer".to_string(),
        }),
    }
}

fn parse_temperature(raw: &str) -> Result<f32, AppError> {
    match raw.parse::<f32>() {
        Ok(value) if (0.0..=2.0).contains(&value) => Ok(value),
        _ => Err(AppError::InvalidSetting {
            key: OPENAI_TEMPERATURE.to_string(),
            value: raw.to_string(),
            reason: "expected a number between 0.0 and 2.0".to_string(),
        }),
    }
}
