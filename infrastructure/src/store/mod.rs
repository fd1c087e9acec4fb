//! Catalog store adapters
//!
//! - [`memory::InMemoryCatalogStore`] — process-local store behind a `RwLock`
//! - [`seed::CatalogSeed`] — TOML catalog seeds, including the built-in one

pub mod memory;
pub mod seed;

pub use memory::InMemoryCatalogStore;
pub use seed::{CatalogSeed, SeedError};
