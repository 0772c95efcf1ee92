//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional to allow partial configuration
/// that can be merged with CLI arguments.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Runtime section
    #[serde(default)]
    pub runtime: RuntimeSection,

    /// Extra environment entries
    #[serde(default)]
    pub env: BTreeMap<String, String>,
}

/// Runtime configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuntimeSection {
    /// Runtime mode, sets `NODE_ENV`
    pub mode: Option<String>,

    /// Resolve as if running under the UI-test driver
    #[serde(default)]
    pub playwright: bool,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# nc-gui-consts Configuration File
#
# Precedence (highest first): --env / --mode on the command line,
# this file, then the process environment.

[runtime]
# Runtime mode, sets NODE_ENV. "production" selects the relative base URL
# (".."); any other mode selects http://localhost:8080.
# mode = "production"

# Resolve as if running under the UI-test driver (message duration 1s).
# OR-merged with --playwright: once true here, the CLI cannot turn it off.
# playwright = false

[env]
# Extra environment entries, same names as the process environment.
# ANT_MESSAGE_DURATION = "6"
"#
    .to_string()
}
