//! Tests for validated configuration.

use crate::env::EnvSnapshot;

use super::ConfigError;
use super::cli::{Cli, Command};
use super::toml::TomlConfig;
use super::validated::ValidatedConfig;

/// Helper to create CLI args from a slice
fn cli(args: &[&str]) -> Cli {
    let mut full_args = vec!["nc-gui-consts"];
    full_args.extend(args);
    Cli::parse_from_iter(full_args)
}

/// Helper to parse TOML config
fn toml(content: &str) -> TomlConfig {
    TomlConfig::parse(content).unwrap()
}

/// Helper to build a process environment snapshot
fn process(pairs: &[(&str, &str)]) -> EnvSnapshot {
    pairs.iter().copied().collect()
}

mod registry_tests;
