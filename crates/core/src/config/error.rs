//! Error types for configuration and template library loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the `.checklist-kit/` directory.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read a file from disk.
    #[error("Failed to read file at {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to parse TOML configuration.
    #[error("Failed to parse TOML file at {path}: {source}")]
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// Failed to parse a YAML template definition.
    #[error("Failed to parse YAML file at {path}: {source}")]
    YamlParse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    /// Failed to walk the templates directory.
    #[error("Failed to traverse directory {path}: {source}")]
    DirectoryWalk {
        path: PathBuf,
        source: walkdir::Error,
    },

    /// A template definition parsed but violates a template invariant.
    #[error("Invalid template in {path}: {reason}")]
    InvalidTemplate { path: PathBuf, reason: String },
}

/// Type alias for Result with ConfigError.
pub type ConfigResult<T> = Result<T, ConfigError>;
