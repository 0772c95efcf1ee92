//! Default values for configuration options.

use crate::registry::ExportFormat;

/// Default path written by `init`.
pub const CONFIG_FILE: &str = "nc-gui-consts.toml";

/// Default export format.
pub const EXPORT_FORMAT: ExportFormat = ExportFormat::Json;
