//! Serialized forms of a resolved registry.

use std::fmt;

use thiserror::Error;

use super::Registry;

/// Output format for [`export`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// Pretty-printed JSON object
    #[default]
    Json,
    /// TOML document
    Toml,
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Toml => write!(f, "toml"),
        }
    }
}

/// Error type for registry serialization.
#[derive(Debug, Error)]
pub enum ExportError {
    /// JSON serialization failed.
    #[error("Failed to serialize registry as JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML serialization failed.
    #[error("Failed to serialize registry as TOML: {0}")]
    Toml(#[from] toml::ser::Error),
}

/// Serializes `registry` in `format`.
///
/// # Errors
///
/// Returns an error if the serializer rejects the document.
pub fn export(registry: &Registry, format: ExportFormat) -> Result<String, ExportError> {
    let output = match format {
        ExportFormat::Json => serde_json::to_string_pretty(registry)?,
        ExportFormat::Toml => toml::to_string_pretty(registry)?,
    };
    Ok(output)
}
