//! wordslides: bootstrap the Word-to-PowerPoint converter workspace.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;


pub use app::api::{
    BootstrapReport, CheckReport, CleanOutcome, FileOutcome, ScriptPermissions, bootstrap,
    bootstrap_at, check, check_at, clean, clean_at,
};
pub use app::config::BootstrapOptions;
pub use domain::{AppError, OpenAiSettings, PlaceholderRole, Settings};
