/*!
 * Bounded Integer Tunables
 * Environment lookup with range validation and recoverable diagnostics
 */

use crate::core::errors::ConfigError;
use crate::core::types::{PriorityBounds, RawPriority};
use std::collections::HashMap;
use tracing::warn;

/// Source of configuration variables
pub trait VarSource: Send + Sync {
    /// Raw value of `name`, `None` when unset
    fn var(&self, name: &str) -> Option<String>;
}

/// Reads from the process environment
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl VarSource for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        // Non-UTF-8 values are reported as malformed rather than unset
        std::env::var_os(name).map(|v| v.to_string_lossy().into_owned())
    }
}

impl VarSource for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl<S: VarSource + ?Sized> VarSource for &S {
    fn var(&self, name: &str) -> Option<String> {
        (**self).var(name)
    }
}

/// Validate a raw tunable against `bounds`
///
/// Unset is not an error; it yields `Ok(None)`.
pub fn parse_bounded(
    name: &str,
    raw: Option<&str>,
    bounds: PriorityBounds,
) -> Result<Option<RawPriority>, ConfigError> {
    let Some(raw) = raw else {
        return Ok(None);
    };

    let value: i64 = raw.trim().parse().map_err(|_| ConfigError::Malformed {
        name: name.to_string(),
        raw: raw.to_string(),
        bounds,
    })?;

    if value < i64::from(bounds.min) || value > i64::from(bounds.max) {
        return Err(ConfigError::OutOfRange {
            name: name.to_string(),
            value,
            bounds,
        });
    }

    // In range of two i32 bounds, so the cast cannot truncate
    Ok(Some(value as RawPriority))
}

/// Read `name` from `source`, logging and discarding invalid values
pub fn read_bounded_int_from<S: VarSource + ?Sized>(
    source: &S,
    name: &str,
    min: RawPriority,
    max: RawPriority,
) -> Option<RawPriority> {
    let raw = source.var(name);
    match parse_bounded(name, raw.as_deref(), PriorityBounds::new(min, max)) {
        Ok(value) => value,
        Err(e) => {
            warn!(variable = name, min, max, error = %e, "ignoring invalid tunable");
            None
        }
    }
}

/// Read `name` from the process environment, legal range `[min, max]`
pub fn read_bounded_int(name: &str, min: RawPriority, max: RawPriority) -> Option<RawPriority> {
    read_bounded_int_from(&ProcessEnv, name, min, max)
}
