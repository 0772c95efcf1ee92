//! Validated configuration after merging CLI, TOML, and process sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::fmt;
use std::path::Path;

use crate::env::{EnvSnapshot, var};
use crate::registry::Registry;
use crate::vocabulary::{EnvTestDriverProbe, FixedTestDriverProbe, RuntimeMode};

use super::cli::{Cli, Command};
use super::error::ConfigError;
use super::toml::{TomlConfig, default_config_template};

/// Fully validated configuration ready for use by the application.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args, an optional
/// TOML config, and a process environment snapshot.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Subcommand to run (`show` when none was given)
    pub command: Command,

    /// Effective environment: process env overlaid with TOML then CLI entries
    pub env: EnvSnapshot,

    /// Entries contributed by CLI and TOML, before overlaying the process env
    pub overrides: EnvSnapshot,

    /// Force the UI-test driver probe on
    pub force_playwright: bool,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let command = match &self.command {
            Command::Show => "show".to_string(),
            Command::Export { format } => {
                format!("export({})", crate::registry::ExportFormat::from(*format))
            }
            Command::Init { output } => format!("init({})", output.display()),
        };

        write!(
            f,
            "Config {{ command: {}, mode: {}, overrides: {}, playwright: {} }}",
            command,
            RuntimeMode::from_env(&self.env),
            self.overrides.len(),
            if self.force_playwright {
                "forced"
            } else {
                "auto"
            },
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments, optional TOML
    /// config, and the process environment.
    ///
    /// CLI entries take precedence over TOML entries, which take precedence
    /// over `process_env`. Within each source, the mode option wins over an
    /// explicit `NODE_ENV` entry.
    ///
    /// # Errors
    ///
    /// Returns an error if a `--env` entry is not `KEY=VALUE` or has an
    /// empty key.
    pub fn from_raw(
        cli: &Cli,
        toml: Option<&TomlConfig>,
        process_env: &EnvSnapshot,
    ) -> Result<Self, ConfigError> {
        let toml_layer = Self::toml_layer(toml);
        let cli_layer = Self::cli_layer(cli)?;
        let overrides = toml_layer.overlay(&cli_layer);
        let env = process_env.overlay(&overrides);

        // Flags only enable, never disable
        let force_playwright = cli.playwright || toml.is_some_and(|t| t.runtime.playwright);

        Ok(Self {
            command: cli.command.clone().unwrap_or(Command::Show),
            env,
            overrides,
            force_playwright,
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI, optional config file, and
    /// the current process environment.
    ///
    /// If `cli.config` is set, loads the TOML file from that path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - A `--env` entry is malformed
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = if let Some(ref path) = cli.config {
            Some(TomlConfig::load(path)?)
        } else {
            None
        };

        Self::from_raw(cli, toml.as_ref(), &EnvSnapshot::from_process())
    }

    /// Resolves the registry from the effective environment.
    #[must_use]
    pub fn registry(&self) -> Registry {
        if self.force_playwright {
            Registry::resolve(&self.env, &FixedTestDriverProbe(true))
        } else {
            Registry::resolve(&self.env, &EnvTestDriverProbe::new(&self.env))
        }
    }

    fn toml_layer(toml: Option<&TomlConfig>) -> EnvSnapshot {
        let Some(toml) = toml else {
            return EnvSnapshot::new();
        };

        let entries = toml.env.iter().map(|(k, v)| (k.as_str(), v.as_str()));
        let mode = toml
            .runtime
            .mode
            .as_deref()
            .map(|mode| (var::NODE_ENV, mode));

        entries.chain(mode).collect()
    }

    fn cli_layer(cli: &Cli) -> Result<EnvSnapshot, ConfigError> {
        let mut pairs = cli
            .env
            .iter()
            .map(|entry| parse_env_pair(entry))
            .collect::<Result<Vec<_>, _>>()?;

        if let Some(ref mode) = cli.mode {
            pairs.push((var::NODE_ENV.to_string(), mode.clone()));
        }

        Ok(pairs.into_iter().collect())
    }
}

/// Parses a `KEY=VALUE` entry. The value may itself contain `=`.
fn parse_env_pair(entry: &str) -> Result<(String, String), ConfigError> {
    let (key, value) = entry
        .split_once('=')
        .ok_or_else(|| ConfigError::InvalidEnvPair {
            value: entry.to_string(),
        })?;

    let key = key.trim();
    if key.is_empty() {
        return Err(ConfigError::EmptyEnvKey {
            value: entry.to_string(),
        });
    }

    Ok((key.to_string(), value.to_string()))
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let content = default_config_template();
    std::fs::write(path, content).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })?;
    tracing::debug!("Wrote configuration template to {}", path.display());
    Ok(())
}
