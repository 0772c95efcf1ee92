//! Configuration layer for nc-gui-consts.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! The effective environment snapshot is built with the following priority
//! (highest to lowest):
//!
//! 1. **CLI entries** - `--env KEY=VALUE` and `--mode`
//! 2. **TOML config file** - `[env]` entries and `runtime.mode`
//! 3. **Process environment**
//!
//! Within one source, the mode option wins over an explicit `NODE_ENV` entry.
//!
//! # Boolean Flag Semantics
//!
//! `--playwright` and `runtime.playwright` use OR semantics: if either is
//! `true`, the registry resolves as if the UI-test driver were running. When
//! both are off, detection falls back to `PLAYWRIGHT` in the effective
//! environment.

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;

#[cfg(test)]
mod toml_tests;
#[cfg(test)]
mod validated_tests;

pub use cli::{Cli, Command, FormatArg};
pub use error::ConfigError;
pub use toml::{RuntimeSection, TomlConfig, default_config_template};
pub use validated::{ValidatedConfig, write_default_config};
