//! Environment snapshot abstraction for testability.
//!
//! Registry values that depend on the environment are resolved from an
//! [`EnvSnapshot`] rather than from `std::env` directly, so tests can feed
//! controlled values without mutating the real process environment.

use std::collections::BTreeMap;

/// Well-known environment variable names.
pub mod var {
    /// Runtime mode of the application (`production`, `development`, ...).
    pub const NODE_ENV: &str = "NODE_ENV";
    /// Override for the message display duration, in seconds.
    pub const ANT_MESSAGE_DURATION: &str = "ANT_MESSAGE_DURATION";
    /// Set by the automated UI-test driver.
    pub const PLAYWRIGHT: &str = "PLAYWRIGHT";
}

/// Immutable mapping of environment variable names to their values.
///
/// # Example
///
/// ```
/// use nc_gui_consts::env::EnvSnapshot;
///
/// let env = EnvSnapshot::from_pairs([("NODE_ENV", "production")]);
/// assert_eq!(env.get("NODE_ENV"), Some("production"));
/// assert_eq!(env.get("ANT_MESSAGE_DURATION"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
    vars: BTreeMap<String, String>,
}

impl EnvSnapshot {
    /// Creates an empty snapshot.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vars: BTreeMap::new(),
        }
    }

    /// Captures the current process environment.
    ///
    /// Entries whose name or value is not valid UTF-8 are skipped.
    #[must_use]
    pub fn from_process() -> Self {
        std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect()
    }

    /// Creates a snapshot from name/value pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        pairs.into_iter().collect()
    }

    /// Returns the value of `name`, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    /// Returns the number of variables in the snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Returns true if the snapshot holds no variables.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Iterates over variables in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns a new snapshot where entries of `other` replace entries of `self`.
    #[must_use]
    pub fn overlay(&self, other: &Self) -> Self {
        let mut vars = self.vars.clone();
        vars.extend(other.vars.iter().map(|(k, v)| (k.clone(), v.clone())));
        Self { vars }
    }
}

impl<K, V> FromIterator<(K, V)> for EnvSnapshot
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}
