//! Shared vocabulary used across the UI and its SDK.
//!
//! Provides the scope token re-exported by the registry, the runtime mode,
//! and a [`TestDriverProbe`] trait so tests can inject a fixed answer while
//! production code inspects the environment.

use std::fmt;

use crate::env::{EnvSnapshot, var};

/// Scope token for values that belong to no particular scope.
pub const NO_SCOPE: &str = "nc";

/// Runtime mode of the application, read from `NODE_ENV`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RuntimeMode {
    /// `NODE_ENV=production`
    Production,
    /// `NODE_ENV=development`, or the variable is absent
    #[default]
    Development,
    /// `NODE_ENV=test`
    Test,
    /// Any other value, kept verbatim
    Other(String),
}

impl RuntimeMode {
    /// Parses a mode name. Matching is exact, like the value it mirrors.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "production" => Self::Production,
            "development" => Self::Development,
            "test" => Self::Test,
            other => Self::Other(other.to_string()),
        }
    }

    /// Reads the mode from `NODE_ENV` in `env`.
    #[must_use]
    pub fn from_env(env: &EnvSnapshot) -> Self {
        env.get(var::NODE_ENV).map_or_else(Self::default, Self::parse)
    }

    /// Returns true only for [`RuntimeMode::Production`].
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    /// Returns the mode name as it appears in `NODE_ENV`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Production => "production",
            Self::Development => "development",
            Self::Test => "test",
            Self::Other(name) => name,
        }
    }
}

impl fmt::Display for RuntimeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Answers whether an automated UI-test driver is running.
///
/// # Example
///
/// ```
/// use nc_gui_consts::env::EnvSnapshot;
/// use nc_gui_consts::vocabulary::{EnvTestDriverProbe, TestDriverProbe};
///
/// let env = EnvSnapshot::from_pairs([("PLAYWRIGHT", "true")]);
/// assert!(EnvTestDriverProbe::new(&env).is_active());
/// ```
pub trait TestDriverProbe: Send + Sync {
    /// Returns true when running under the test driver.
    fn is_active(&self) -> bool;
}

/// Probe that inspects `PLAYWRIGHT` in an environment snapshot.
///
/// Active when the value, trimmed, is `true` or `1` (case-insensitive).
#[derive(Debug, Clone, Copy)]
pub struct EnvTestDriverProbe<'a> {
    env: &'a EnvSnapshot,
}

impl<'a> EnvTestDriverProbe<'a> {
    /// Creates a probe over `env`.
    #[must_use]
    pub const fn new(env: &'a EnvSnapshot) -> Self {
        Self { env }
    }
}

impl TestDriverProbe for EnvTestDriverProbe<'_> {
    fn is_active(&self) -> bool {
        self.env.get(var::PLAYWRIGHT).is_some_and(|value| {
            let value = value.trim();
            value == "1" || value.eq_ignore_ascii_case("true")
        })
    }
}

/// Probe with a fixed answer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedTestDriverProbe(pub bool);

impl TestDriverProbe for FixedTestDriverProbe {
    fn is_active(&self) -> bool {
        self.0
    }
}
