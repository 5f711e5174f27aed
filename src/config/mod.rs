//! Configuration management module

pub mod builder;
pub mod credential;
pub mod loader;
pub mod validation;

pub use builder::SettingsBuilder;
pub use credential::Credential;
pub use loader::{Author, Settings};
pub use validation::ValidationError;
