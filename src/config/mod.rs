//! Configuration loading for Marga.
//!
//! Loads all configuration from a single YAML file.

mod defaults;
mod error;
mod grid;
mod marga;
mod search;

// Re-export main types
pub use error::ConfigLoadError;
pub use marga::MargaConfig;

// Re-export section types
pub use grid::GridSection;
pub use search::SearchSection;
