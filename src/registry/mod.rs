//! Constant registry for the UI layer.
//!
//! This module provides:
//! - Literal constants ([`consts`]), usable without a registry
//! - The grouping sentinel table ([`GroupByVars`], [`GroupBySentinel`])
//! - Environment-conditioned resolution ([`resolve_base_fallback_url`],
//!   [`resolve_ant_message_duration`])
//! - The resolved, immutable [`Registry`] and its serialized forms ([`export()`])
//!
//! # Resolution
//!
//! A [`Registry`] is resolved once from an [`EnvSnapshot`] and never changes
//! afterwards. Pass it to consumers explicitly, or use [`Registry::global`]
//! for the process-wide instance resolved from the real environment on
//! first access.

pub mod consts;
mod export;
mod group_by;
mod resolve;


use std::fmt;
use std::sync::OnceLock;
use std::time::Duration;

use serde::Serialize;

use crate::env::EnvSnapshot;
use crate::vocabulary::{EnvTestDriverProbe, RuntimeMode, TestDriverProbe};

pub use consts::*;
pub use export::{ExportError, ExportFormat, export};
pub use group_by::{GROUP_BY_VARS, GroupBySentinel, GroupByVars};
pub use resolve::{resolve_ant_message_duration, resolve_base_fallback_url};

/// Resolved constant registry.
///
/// Literal values are fixed; the base URL and message duration are
/// computed once by [`Registry::resolve`].
///
/// # Example
///
/// ```
/// use nc_gui_consts::env::EnvSnapshot;
/// use nc_gui_consts::registry::Registry;
///
/// let env = EnvSnapshot::from_pairs([("NODE_ENV", "production")]);
/// let registry = Registry::from_env(&env);
///
/// assert_eq!(registry.base_fallback_url(), "..");
/// assert_eq!(registry.ant_message_duration(), 6);
/// assert_eq!(registry.system_columns().len(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    mode: RuntimeMode,
    base_fallback_url: &'static str,
    ant_message_duration: i64,
}

static GLOBAL: OnceLock<Registry> = OnceLock::new();

impl Registry {
    /// Resolves the registry from `env`, asking `probe` about the test driver.
    #[must_use]
    pub fn resolve(env: &EnvSnapshot, probe: &dyn TestDriverProbe) -> Self {
        let mode = RuntimeMode::from_env(env);
        let base_fallback_url = resolve_base_fallback_url(&mode);
        let ant_message_duration = resolve_ant_message_duration(env, probe);

        tracing::debug!(
            "Resolved registry: mode={mode}, base_fallback_url={base_fallback_url}, \
             ant_message_duration={ant_message_duration}s"
        );

        Self {
            mode,
            base_fallback_url,
            ant_message_duration,
        }
    }

    /// Resolves the registry from `env`, detecting the test driver from the same snapshot.
    #[must_use]
    pub fn from_env(env: &EnvSnapshot) -> Self {
        Self::resolve(env, &EnvTestDriverProbe::new(env))
    }

    /// Returns the process-wide registry, resolving it from the process
    /// environment on first access.
    pub fn global() -> &'static Self {
        GLOBAL.get_or_init(|| Self::from_env(&EnvSnapshot::from_process()))
    }

    /// Runtime mode the registry was resolved under.
    #[must_use]
    pub const fn mode(&self) -> &RuntimeMode {
        &self.mode
    }

    /// Namespace tag.
    #[must_use]
    pub const fn noco(&self) -> &'static str {
        NOCO
    }

    /// Reserved column names, in display order.
    #[must_use]
    pub const fn system_columns(&self) -> &'static [&'static str; 4] {
        &SYSTEM_COLUMNS
    }

    /// Title shown for untitled documents.
    #[must_use]
    pub const fn empty_title_placeholder_docs(&self) -> &'static str {
        EMPTY_TITLE_PLACEHOLDER_DOCS
    }

    /// Widest viewport, in pixels, that still uses the mobile layout.
    #[must_use]
    pub const fn max_width_for_mobile_mode(&self) -> u32 {
        MAX_WIDTH_FOR_MOBILE_MODE
    }

    /// Default width of the left sidebar, in pixels.
    #[must_use]
    pub const fn initial_left_sidebar_width(&self) -> u32 {
        INITIAL_LEFT_SIDEBAR_WIDTH
    }

    /// Scope token re-exported from the shared vocabulary.
    #[must_use]
    pub const fn no_scope(&self) -> &'static str {
        NO_SCOPE
    }

    /// The grouping sentinel table.
    #[must_use]
    pub const fn group_by_vars(&self) -> GroupByVars {
        GROUP_BY_VARS
    }

    /// Base URL: `..` in production, the local backend otherwise.
    #[must_use]
    pub const fn base_fallback_url(&self) -> &'static str {
        self.base_fallback_url
    }

    /// Message display duration in seconds. May be negative when the
    /// override says so.
    #[must_use]
    pub const fn ant_message_duration(&self) -> i64 {
        self.ant_message_duration
    }

    /// Message display duration as a [`Duration`], or `None` when negative.
    #[must_use]
    pub fn ant_message_duration_as_duration(&self) -> Option<Duration> {
        u64::try_from(self.ant_message_duration)
            .ok()
            .map(Duration::from_secs)
    }

    /// Returns `(NAME, value)` pairs for every scalar and list constant,
    /// followed by one entry per sentinel.
    #[must_use]
    pub fn entries(&self) -> Vec<(String, String)> {
        let mut entries = vec![
            ("NOCO".to_string(), self.noco().to_string()),
            (
                "SYSTEM_COLUMNS".to_string(),
                self.system_columns().join(", "),
            ),
            (
                "EMPTY_TITLE_PLACEHOLDER_DOCS".to_string(),
                self.empty_title_placeholder_docs().to_string(),
            ),
            (
                "MAX_WIDTH_FOR_MOBILE_MODE".to_string(),
                self.max_width_for_mobile_mode().to_string(),
            ),
            (
                "BASE_FALLBACK_URL".to_string(),
                self.base_fallback_url().to_string(),
            ),
            (
                "INITIAL_LEFT_SIDEBAR_WIDTH".to_string(),
                self.initial_left_sidebar_width().to_string(),
            ),
            ("NO_SCOPE".to_string(), self.no_scope().to_string()),
            (
                "ANT_MESSAGE_DURATION".to_string(),
                self.ant_message_duration().to_string(),
            ),
        ];

        entries.extend(GroupBySentinel::ALL.into_iter().map(|sentinel| {
            (
                format!("GROUP_BY_VARS.{}", sentinel.name()),
                format!("{} ({})", sentinel.key(), sentinel.label()),
            )
        }));

        entries
    }
}

impl fmt::Display for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Registry {{ mode: {}, base_fallback_url: {}, ant_message_duration: {}s }}",
            self.mode, self.base_fallback_url, self.ant_message_duration,
        )
    }
}

/// Serialized shape of a [`Registry`]; tables come last so TOML output stays valid.
#[derive(Serialize)]
struct RegistryDocument {
    #[serde(rename = "NOCO")]
    noco: &'static str,
    #[serde(rename = "SYSTEM_COLUMNS")]
    system_columns: &'static [&'static str; 4],
    #[serde(rename = "EMPTY_TITLE_PLACEHOLDER_DOCS")]
    empty_title_placeholder_docs: &'static str,
    #[serde(rename = "MAX_WIDTH_FOR_MOBILE_MODE")]
    max_width_for_mobile_mode: u32,
    #[serde(rename = "BASE_FALLBACK_URL")]
    base_fallback_url: &'static str,
    #[serde(rename = "INITIAL_LEFT_SIDEBAR_WIDTH")]
    initial_left_sidebar_width: u32,
    #[serde(rename = "NO_SCOPE")]
    no_scope: &'static str,
    #[serde(rename = "ANT_MESSAGE_DURATION")]
    ant_message_duration: i64,
    #[serde(rename = "GROUP_BY_VARS")]
    group_by_vars: GroupByVars,
}

impl Serialize for Registry {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        RegistryDocument {
            noco: self.noco(),
            system_columns: self.system_columns(),
            empty_title_placeholder_docs: self.empty_title_placeholder_docs(),
            max_width_for_mobile_mode: self.max_width_for_mobile_mode(),
            base_fallback_url: self.base_fallback_url(),
            initial_left_sidebar_width: self.initial_left_sidebar_width(),
            no_scope: self.no_scope(),
            ant_message_duration: self.ant_message_duration(),
            group_by_vars: self.group_by_vars(),
        }
        .serialize(serializer)
    }
}
