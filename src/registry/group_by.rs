//! Sentinel keys for grouping by null and boolean values.
//!
//! Grouped views bucket rows whose group value is null, true, or false under
//! reserved keys that real data never produces, and show a label instead.

use std::fmt;

use serde::ser::{Serialize, SerializeMap, SerializeStruct, Serializer};

/// A grouping bucket that has no literal value of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupBySentinel {
    /// Rows whose group value is null
    Null,
    /// Rows whose group value is true
    True,
    /// Rows whose group value is false
    False,
}

impl GroupBySentinel {
    /// All sentinels, in table order.
    pub const ALL: [Self; 3] = [Self::Null, Self::True, Self::False];

    /// Returns the reserved key.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Null => GroupByVars::NULL,
            Self::True => GroupByVars::TRUE,
            Self::False => GroupByVars::FALSE,
        }
    }

    /// Returns the field name of the sentinel in the table.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Null => "NULL",
            Self::True => "TRUE",
            Self::False => "FALSE",
        }
    }

    /// Returns the display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Null => "(Empty)",
            Self::True => "Checked",
            Self::False => "Unchecked",
        }
    }

    /// Looks up the sentinel for a reserved key.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.key() == key)
    }
}

impl fmt::Display for GroupBySentinel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// The sentinel table: individual keys plus the key-to-label mapping.
///
/// # Example
///
/// ```
/// use nc_gui_consts::registry::{GROUP_BY_VARS, GroupByVars};
///
/// assert_eq!(GroupByVars::NULL, "__nc_null__");
/// assert_eq!(GROUP_BY_VARS.title_for(GroupByVars::TRUE), Some("Checked"));
/// assert_eq!(GROUP_BY_VARS.title_for("Checked"), None);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GroupByVars;

impl GroupByVars {
    /// Key of the null bucket.
    pub const NULL: &'static str = "__nc_null__";
    /// Key of the true bucket.
    pub const TRUE: &'static str = "__nc_true__";
    /// Key of the false bucket.
    pub const FALSE: &'static str = "__nc_false__";

    /// Key/label pairs, in table order.
    pub const VAR_TITLES: [(&'static str, &'static str); 3] = [
        (Self::NULL, GroupBySentinel::Null.label()),
        (Self::TRUE, GroupBySentinel::True.label()),
        (Self::FALSE, GroupBySentinel::False.label()),
    ];

    /// Returns the label for a reserved key, or `None` for any other string.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn title_for(self, key: &str) -> Option<&'static str> {
        GroupBySentinel::from_key(key).map(GroupBySentinel::label)
    }

    /// Iterates over key/label pairs in table order.
    #[allow(clippy::unused_self)]
    pub fn var_titles(self) -> impl Iterator<Item = (&'static str, &'static str)> {
        Self::VAR_TITLES.into_iter()
    }
}

/// The sentinel table value.
pub const GROUP_BY_VARS: GroupByVars = GroupByVars;

struct VarTitles;

impl Serialize for VarTitles {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(GroupByVars::VAR_TITLES.len()))?;
        for (key, label) in GroupByVars::VAR_TITLES {
            map.serialize_entry(key, label)?;
        }
        map.end()
    }
}

impl Serialize for GroupByVars {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("GroupByVars", 4)?;
        state.serialize_field("NULL", Self::NULL)?;
        state.serialize_field("TRUE", Self::TRUE)?;
        state.serialize_field("FALSE", Self::FALSE)?;
        state.serialize_field("VAR_TITLES", &VarTitles)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn table_has_three_distinct_keys() {
        let keys: HashSet<_> = GROUP_BY_VARS.var_titles().map(|(k, _)| k).collect();

        assert_eq!(GroupByVars::VAR_TITLES.len(), 3);
        assert_eq!(keys.len(), 3);
    }

    #[test]
    fn labels_match_buckets() {
        assert_eq!(GROUP_BY_VARS.title_for("__nc_null__"), Some("(Empty)"));
        assert_eq!(GROUP_BY_VARS.title_for("__nc_true__"), Some("Checked"));
        assert_eq!(GROUP_BY_VARS.title_for("__nc_false__"), Some("Unchecked"));
    }

    #[test]
    fn individual_keys_match_table_order() {
        let keys: Vec<_> = GROUP_BY_VARS.var_titles().map(|(k, _)| k).collect();

        assert_eq!(
            keys,
            vec![GroupByVars::NULL, GroupByVars::TRUE, GroupByVars::FALSE]
        );
    }

    #[test]
    fn ordinary_values_are_not_sentinels() {
        for value in ["", "null", "true", "false", "(Empty)", "Checked", "__nc__"] {
            assert_eq!(GroupBySentinel::from_key(value), None, "{value:?}");
            assert_eq!(GROUP_BY_VARS.title_for(value), None, "{value:?}");
        }
    }

    #[test]
    fn sentinel_key_round_trip() {
        for sentinel in GroupBySentinel::ALL {
            assert_eq!(GroupBySentinel::from_key(sentinel.key()), Some(sentinel));
            assert_eq!(sentinel.to_string(), sentinel.key());
        }
    }

    #[test]
    fn names_match_table_fields() {
        let value = serde_json::to_value(GROUP_BY_VARS).unwrap();

        for sentinel in GroupBySentinel::ALL {
            assert_eq!(value[sentinel.name()], sentinel.key());
        }
        assert_eq!(GroupBySentinel::Null.name(), "NULL");
        assert_eq!(GroupBySentinel::True.name(), "TRUE");
        assert_eq!(GroupBySentinel::False.name(), "FALSE");
    }

    #[test]
    fn labels_are_non_empty() {
        for (_, label) in GroupByVars::VAR_TITLES {
            assert!(!label.trim().is_empty());
        }
    }

    #[test]
    fn serializes_keys_and_titles() {
        let value = serde_json::to_value(GROUP_BY_VARS).unwrap();

        assert_eq!(value["NULL"], "__nc_null__");
        assert_eq!(value["TRUE"], "__nc_true__");
        assert_eq!(value["FALSE"], "__nc_false__");
        assert_eq!(value["VAR_TITLES"]["__nc_false__"], "Unchecked");
        assert_eq!(value["VAR_TITLES"].as_object().unwrap().len(), 3);
    }
}
