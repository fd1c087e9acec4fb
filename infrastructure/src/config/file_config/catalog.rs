//! Catalog configuration from TOML (`[catalog]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw catalog seeding configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCatalogConfig {
    /// Additional seed file loaded after the built-in seed
    pub seed_file: Option<PathBuf>,
    /// Load the built-in categories and sample questions
    pub seed_defaults: bool,
}

impl Default for FileCatalogConfig {
    fn default() -> Self {
        Self {
            seed_file: None,
            seed_defaults: true,
        }
    }
}
