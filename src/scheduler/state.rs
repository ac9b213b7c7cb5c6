/*!
 * Process Scheduling State
 * Write-once, read-many baseline shared by every apply call
 */

use crate::core::types::{PriorityBounds, RawPriority};
use serde::{Deserialize, Serialize};

/// Result of process initialization
///
/// Built once by `initialize_scheduler` and never mutated afterwards, so
/// concurrent readers need no locking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSchedulingState {
    /// Floor for real-time thread priorities; `None` disables apply
    pub base_priority: Option<RawPriority>,
    /// Whether the host has a real-time facility at all
    pub enabled: bool,
    /// Host real-time range observed at startup
    pub realtime_bounds: Option<PriorityBounds>,
    /// Process-wide priority, set only when elevation succeeded
    pub server_priority: Option<RawPriority>,
}

impl ProcessSchedulingState {
    /// State for a host without real-time scheduling
    pub const fn disabled() -> Self {
        Self {
            base_priority: None,
            enabled: false,
            realtime_bounds: None,
            server_priority: None,
        }
    }

    /// Enabled state with a fixed base, mostly useful for embedding and tests
    pub const fn with_base(base: RawPriority) -> Self {
        Self {
            base_priority: Some(base),
            enabled: true,
            realtime_bounds: None,
            server_priority: None,
        }
    }

    /// Base priority if thread priorities will be applied
    ///
    /// A base is ignored while the host facility is disabled.
    #[inline(always)]
    pub fn active_base(&self) -> Option<RawPriority> {
        self.base_priority.filter(|_| self.enabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_has_no_base() {
        let state = ProcessSchedulingState::disabled();
        assert!(!state.enabled);
        assert_eq!(state.active_base(), None);
        assert_eq!(state, ProcessSchedulingState::default());
    }

    #[test]
    fn test_base_ignored_while_disabled() {
        let state = ProcessSchedulingState {
            base_priority: Some(20),
            ..ProcessSchedulingState::disabled()
        };
        assert_eq!(state.active_base(), None);
    }

    #[test]
    fn test_with_base() {
        let state = ProcessSchedulingState::with_base(20);
        assert!(state.enabled);
        assert_eq!(state.active_base(), Some(20));
    }
}
