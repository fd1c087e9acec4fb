//! Infrastructure layer for trivia-api
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod random;
pub mod store;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileCatalogConfig, FileConfig, FileLoggingConfig,
    FileServerConfig,
};
pub use random::ThreadRngPicker;
pub use store::{CatalogSeed, InMemoryCatalogStore, SeedError};
