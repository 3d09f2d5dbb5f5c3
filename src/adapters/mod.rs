pub mod assets;
pub mod filesystem;
pub mod python_command;
