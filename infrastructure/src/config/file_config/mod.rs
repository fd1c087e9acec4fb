//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and validated before the server starts.

mod catalog;
mod logging;
mod server;

pub use catalog::FileCatalogConfig;
pub use logging::FileLoggingConfig;
pub use server::FileServerConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("server.port cannot be 0")]
    InvalidPort,

    #[error("server.host cannot be empty")]
    EmptyHost,

    #[error("catalog has no source: seed_defaults is false and no seed_file is set")]
    NoCatalogSource,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// HTTP listener settings
    pub server: FileServerConfig,
    /// Catalog seeding settings
    pub catalog: FileCatalogConfig,
    /// Log filter settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning every detected issue.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();

        if self.server.port == 0 {
            issues.push(ConfigValidationError::InvalidPort);
        }
        if self.server.host.trim().is_empty() {
            issues.push(ConfigValidationError::EmptyHost);
        }
        if !self.catalog.seed_defaults && self.catalog.seed_file.is_none() {
            issues.push(ConfigValidationError::NoCatalogSource);
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[server]
host = "0.0.0.0"
port = 8080

[catalog]
seed_file = "data/extra.toml"
seed_defaults = false

[logging]
level = "trivia=debug"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.catalog.seed_file, Some(PathBuf::from("data/extra.toml")));
        assert!(!config.catalog.seed_defaults);
        assert_eq!(config.logging.level.as_deref(), Some("trivia=debug"));
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[server]
port = 9000
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.server.port, 9000);
        // Defaults should apply
        assert_eq!(config.server.host, "127.0.0.1");
        assert!(config.catalog.seed_defaults);
        assert!(config.logging.level.is_none());
    }

    #[test]
    fn test_validate_valid_config() {
        assert!(FileConfig::default().validate().is_empty());
    }

    #[test]
    fn test_validate_reports_all_issues() {
        let mut config = FileConfig::default();
        config.server.port = 0;
        config.server.host = " ".to_string();
        config.catalog.seed_defaults = false;

        let issues = config.validate();
        assert_eq!(
            issues,
            vec![
                ConfigValidationError::InvalidPort,
                ConfigValidationError::EmptyHost,
                ConfigValidationError::NoCatalogSource,
            ]
        );
    }
}
