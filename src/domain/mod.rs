//! Domain layer: layout constants, settings, placeholder rendering and errors.

mod error;
pub mod layout;
pub mod placeholder;
pub mod secret;
pub mod settings;

pub use error::AppError;
pub use placeholder::PlaceholderRole;
pub use settings::{OpenAiSettings, Settings};
