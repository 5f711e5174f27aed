//! Utility modules for common functionality

pub mod sanitizers;

pub use sanitizers::sanitize_path_component;
