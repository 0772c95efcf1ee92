//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use super::defaults;

/// nc-gui-consts: UI constant registry
///
/// Resolves the UI constant registry from the environment and prints or
/// exports it.
#[derive(Debug, Parser)]
#[command(name = "nc-gui-consts")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run (default: show)
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to configuration file
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Environment entry in 'KEY=VALUE' format (can be specified multiple times)
    #[arg(long = "env", value_name = "KEY=VALUE", global = true)]
    pub env: Vec<String>,

    /// Runtime mode, shorthand for --env NODE_ENV=<MODE>
    #[arg(long, global = true)]
    pub mode: Option<String>,

    /// Resolve as if running under the UI-test driver
    #[arg(long, global = true)]
    pub playwright: bool,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

/// Subcommands for nc-gui-consts
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Print every constant as 'NAME = value'
    Show,

    /// Print the registry as a JSON or TOML document
    Export {
        /// Output format
        #[arg(long, short, value_enum, default_value_t = FormatArg::Json)]
        format: FormatArg,
    },

    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = defaults::CONFIG_FILE)]
        output: PathBuf,
    },
}

/// Export format argument for CLI parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// Pretty-printed JSON
    #[value(name = "json")]
    Json,
    /// TOML document
    #[value(name = "toml")]
    Toml,
}

impl From<FormatArg> for crate::registry::ExportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => Self::Json,
            FormatArg::Toml => Self::Toml,
        }
    }
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Returns true if this is the init command.
    #[must_use]
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Some(Command::Init { .. }))
    }
}
