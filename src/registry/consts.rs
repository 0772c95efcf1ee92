//! Literal registry values.
//!
//! Centralized constants so UI code never repeats a magic string or number.

/// Namespace tag.
pub const NOCO: &str = "noco";

/// Reserved column names, in display order.
pub const SYSTEM_COLUMNS: [&str; 4] = ["id", "title", "created_at", "updated_at"];

/// Title shown for untitled documents.
pub const EMPTY_TITLE_PLACEHOLDER_DOCS: &str = "Untitled";

/// Widest viewport, in pixels, that still uses the mobile layout.
pub const MAX_WIDTH_FOR_MOBILE_MODE: u32 = 480;

/// Default width of the left sidebar, in pixels.
pub const INITIAL_LEFT_SIDEBAR_WIDTH: u32 = 288;

pub use crate::vocabulary::NO_SCOPE;

/// Base URL used in production: relative to the served UI.
pub const BASE_URL_PRODUCTION: &str = "..";

/// Base URL used in every other mode: the local backend.
pub const BASE_URL_LOCAL: &str = "http://localhost:8080";

/// Message duration in seconds when no override is given.
pub const ANT_MESSAGE_DURATION_DEFAULT: i64 = 6;

/// Message duration in seconds under the UI-test driver.
pub const ANT_MESSAGE_DURATION_TEST_DRIVER: i64 = 1;
