//! Error types for configuration parsing and validation.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for configuration operations.
///
/// Covers errors from parsing, merging, and file operations. Registry
/// resolution itself never fails.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("Failed to read config file '{}': {source}", path.display())]
    FileRead {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the TOML configuration.
    #[error("Failed to parse TOML config: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to write configuration file (for init command).
    #[error("Failed to write config file '{}': {source}", path.display())]
    FileWrite {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Environment entry without a `=` separator.
    #[error("Invalid environment entry '{value}': expected 'KEY=VALUE'")]
    InvalidEnvPair {
        /// The invalid entry
        value: String,
    },

    /// Environment entry with an empty variable name.
    #[error("Invalid environment entry '{value}': variable name is empty")]
    EmptyEnvKey {
        /// The invalid entry
        value: String,
    },
}
