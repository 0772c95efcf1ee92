//! Application execution logic.
//!
//! Resolves the registry from the validated configuration and writes it in
//! the form the command asks for.

use std::io::Write;

use thiserror::Error;

use nc_gui_consts::config::{Command, ValidatedConfig};
use nc_gui_consts::registry::{ExportError, ExportFormat, Registry, export};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// Failed to serialize the registry.
    #[error(transparent)]
    Export(#[from] ExportError),

    /// Failed to write output.
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

/// Executes the configured command, writing its output to `out`.
///
/// `init` is handled by the entry point and is a no-op here.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn execute(config: &ValidatedConfig, out: &mut impl Write) -> Result<(), RunError> {
    let registry = config.registry();
    tracing::info!("{registry}");

    match &config.command {
        Command::Show => write_entries(&registry, out)?,
        Command::Export { format } => {
            let format = ExportFormat::from(*format);
            tracing::debug!("Exporting registry as {format}");
            let document = export(&registry, format)?;
            writeln!(out, "{}", document.trim_end())?;
        }
        Command::Init { .. } => {}
    }

    Ok(())
}

fn write_entries(registry: &Registry, out: &mut impl Write) -> std::io::Result<()> {
    let entries = registry.entries();
    let width = entries.iter().map(|(name, _)| name.len()).max().unwrap_or(0);

    for (name, value) in entries {
        writeln!(out, "{name:<width$} = {value}")?;
    }

    Ok(())
}
