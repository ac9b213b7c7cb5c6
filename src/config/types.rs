/*!
 * Scheduler Configuration
 * Validated tunables loaded once at startup
 */

use super::env::{read_bounded_int_from, VarSource};
use crate::core::limits::{ENV_BASE_PRIORITY, ENV_SERVER_PRIORITY, RT_HEADROOM};
use crate::core::types::{PriorityBounds, RawPriority};
use serde::{Deserialize, Serialize};

/// Tunables read from the environment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// Real-time priority requested for the whole process
    pub server_priority: Option<RawPriority>,
    /// Base real-time priority for threads
    pub base_priority: Option<RawPriority>,
}

impl SchedulerConfig {
    /// Load both tunables, validated against the host real-time `bounds`
    pub fn load<S: VarSource + ?Sized>(source: &S, bounds: PriorityBounds) -> Self {
        Self {
            server_priority: Self::load_server(source, bounds),
            base_priority: Self::load_base(source, bounds),
        }
    }

    /// Load only the thread base priority, keeping headroom for the offsets
    pub fn load_base<S: VarSource + ?Sized>(
        source: &S,
        bounds: PriorityBounds,
    ) -> Option<RawPriority> {
        let base = bounds.with_headroom(RT_HEADROOM);
        read_bounded_int_from(source, ENV_BASE_PRIORITY, base.min, base.max)
    }

    /// Load only the process-wide server priority
    pub fn load_server<S: VarSource + ?Sized>(
        source: &S,
        bounds: PriorityBounds,
    ) -> Option<RawPriority> {
        read_bounded_int_from(source, ENV_SERVER_PRIORITY, bounds.min, bounds.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_load_empty() {
        let empty = HashMap::<String, String>::new();
        let config = SchedulerConfig::load(&empty, PriorityBounds::new(1, 99));
        assert_eq!(config, SchedulerConfig::default());
    }

    #[test]
    fn test_base_headroom() {
        let bounds = PriorityBounds::new(1, 99);
        let ok = vars(&[(ENV_BASE_PRIORITY, "95")]);
        assert_eq!(SchedulerConfig::load(&ok, bounds).base_priority, Some(95));

        let too_high = vars(&[(ENV_BASE_PRIORITY, "96")]);
        assert_eq!(SchedulerConfig::load(&too_high, bounds).base_priority, None);
    }

    #[test]
    fn test_server_uses_full_range() {
        let bounds = PriorityBounds::new(1, 99);
        let config = SchedulerConfig::load(&vars(&[(ENV_SERVER_PRIORITY, "99")]), bounds);
        assert_eq!(config.server_priority, Some(99));
        assert_eq!(config.base_priority, None);
    }
}
