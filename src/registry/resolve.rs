//! Environment-conditioned registry values.
//!
//! Both functions are total: any input yields a value.

use crate::env::{EnvSnapshot, var};
use crate::vocabulary::{RuntimeMode, TestDriverProbe};

use super::consts::{
    ANT_MESSAGE_DURATION_DEFAULT, ANT_MESSAGE_DURATION_TEST_DRIVER, BASE_URL_LOCAL,
    BASE_URL_PRODUCTION,
};

/// Selects the base URL for `mode`.
#[must_use]
pub const fn resolve_base_fallback_url(mode: &RuntimeMode) -> &'static str {
    if mode.is_production() {
        BASE_URL_PRODUCTION
    } else {
        BASE_URL_LOCAL
    }
}

/// Resolves the message duration in seconds.
///
/// `ANT_MESSAGE_DURATION` wins when it holds an integer, negative values
/// included (surrounding whitespace ignored). Otherwise the default depends
/// on `probe`, which is only consulted in that case.
#[must_use]
pub fn resolve_ant_message_duration(env: &EnvSnapshot, probe: &dyn TestDriverProbe) -> i64 {
    if let Some(raw) = env.get(var::ANT_MESSAGE_DURATION) {
        match raw.trim().parse::<i64>() {
            Ok(secs) => return secs,
            Err(e) => {
                tracing::debug!(
                    "Ignoring {}={raw:?} ({e}), using default",
                    var::ANT_MESSAGE_DURATION
                );
            }
        }
    }

    if probe.is_active() {
        ANT_MESSAGE_DURATION_TEST_DRIVER
    } else {
        ANT_MESSAGE_DURATION_DEFAULT
    }
}
