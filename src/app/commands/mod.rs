pub mod bootstrap;
pub mod check;
pub mod clean;
