use include_dir::{Dir, include_dir};
use minijinja::{Environment, context};

use crate::domain::AppError;
use crate::domain::layout::SAMPLE_DOCUMENT;
use crate::domain::settings::{
    DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_TEMPERATURE, OPENAI_KEY_PLACEHOLDER,
    UNSPLASH_KEY_PLACEHOLDER,
};

static SCAFFOLD_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/scaffold");

const ENV_TEMPLATE: &str = "env.j2";

pub fn scaffold_file_content(path: &str) -> Option<&'static str> {
    SCAFFOLD_DIR.get_file(path).and_then(|file| file.contents_utf8())
}

/// Fixed smoke-test document written on first bootstrap.
pub fn sample_document() -> Result<&'static str, AppError> {
    scaffold_file_content(SAMPLE_DOCUMENT).ok_or_else(|| AppError::Template {
        name: SAMPLE_DOCUMENT.to_string(),
        details: "missing from embedded scaffold".to_string(),
    })
}

/// Render a fresh `.env` carrying credential placeholders and `secret_key`.
pub fn render_env_file(secret_key: &str) -> Result<String, AppError> {
    let source = scaffold_file_content(ENV_TEMPLATE).ok_or_else(|| AppError::Template {
        name: ENV_TEMPLATE.to_string(),
        details: "missing from embedded scaffold".to_string(),
    })?;

    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);
    env.add_template(ENV_TEMPLATE, source).map_err(|e| template_error(&e))?;

    let template = env.get_template(ENV_TEMPLATE).map_err(|e| template_error(&e))?;
    template
        .render(context! {
            openai_api_key => OPENAI_KEY_PLACEHOLDER,
            unsplash_access_key => UNSPLASH_KEY_PLACEHOLDER,
            secret_key => secret_key,
            model => DEFAULT_MODEL,
            max_tokens => DEFAULT_MAX_TOKENS,
            temperature => DEFAULT_TEMPERATURE.to_string(),
        })
        .map_err(|e| template_error(&e))
}

fn template_error(err: &minijinja::Error) -> AppError {
    AppError::Template { name: ENV_TEMPLATE.to_string(), details: err.to_string() }
}
