/*!
 * Scheduler Types
 * Abstract priority levels, host policies and the mapping between them
 */

use crate::core::limits::{ABOVE_NORMAL_OFFSET, HIGHEST_OFFSET, TIME_CRITICAL_OFFSET};
use crate::core::types::RawPriority;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Host-independent thread urgency, larger is more urgent
///
/// The named levels follow the generic thread-priority API of the
/// surrounding system. Only their relative order matters to the mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AbstractPriority(pub i32);

impl AbstractPriority {
    pub const IDLE: Self = Self(-15);
    pub const LOWEST: Self = Self(-2);
    pub const BELOW_NORMAL: Self = Self(-1);
    pub const NORMAL: Self = Self(0);
    pub const ABOVE_NORMAL: Self = Self(1);
    pub const HIGHEST: Self = Self(2);
    pub const TIME_CRITICAL: Self = Self(15);

    /// Parse a level name or a plain integer
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "idle" => Ok(Self::IDLE),
            "lowest" => Ok(Self::LOWEST),
            "below_normal" | "belownormal" => Ok(Self::BELOW_NORMAL),
            "normal" => Ok(Self::NORMAL),
            "above_normal" | "abovenormal" => Ok(Self::ABOVE_NORMAL),
            "highest" => Ok(Self::HIGHEST),
            "time_critical" | "timecritical" => Ok(Self::TIME_CRITICAL),
            other => other.parse::<i32>().map(Self).map_err(|_| {
                format!(
                    "Invalid priority '{}'. Valid: idle, lowest, below_normal, normal, \
                     above_normal, highest, time_critical or an integer",
                    s
                )
            }),
        }
    }
}

impl From<i32> for AbstractPriority {
    fn from(level: i32) -> Self {
        Self(level)
    }
}

impl fmt::Display for AbstractPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Host scheduling policy class
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostPolicy {
    /// Fixed-priority real-time
    Realtime,
    /// Default time-shared
    Normal,
    /// Throughput oriented, non-interactive
    Batch,
    /// Runs only when nothing else wants the CPU
    Idle,
}

impl HostPolicy {
    /// Parse from string representation
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "realtime" | "rt" | "fifo" => Ok(Self::Realtime),
            "normal" | "other" => Ok(Self::Normal),
            "batch" => Ok(Self::Batch),
            "idle" => Ok(Self::Idle),
            _ => Err(format!(
                "Invalid policy '{}'. Valid: realtime, normal, batch, idle",
                s
            )),
        }
    }

    /// Convert to string representation
    #[inline(always)]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Realtime => "realtime",
            Self::Normal => "normal",
            Self::Batch => "batch",
            Self::Idle => "idle",
        }
    }

    /// Whether the policy carries a numeric priority
    #[inline(always)]
    pub const fn is_realtime(&self) -> bool {
        matches!(self, Self::Realtime)
    }

    #[inline(always)]
    const fn rank(&self) -> u8 {
        match self {
            Self::Idle => 0,
            Self::Batch => 1,
            Self::Normal => 2,
            Self::Realtime => 3,
        }
    }
}

impl fmt::Display for HostPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for HostPolicy {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for HostPolicy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_str(&s).map_err(serde::de::Error::custom)
    }
}

/// Concrete (policy, numeric priority) pair for one thread
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SchedulingDecision {
    pub policy: HostPolicy,
    /// Zero for every non real-time policy
    pub numeric_priority: RawPriority,
}

impl SchedulingDecision {
    #[inline]
    pub const fn realtime(priority: RawPriority) -> Self {
        Self {
            policy: HostPolicy::Realtime,
            numeric_priority: priority,
        }
    }

    #[inline]
    pub const fn timeshared(policy: HostPolicy) -> Self {
        Self {
            policy,
            numeric_priority: 0,
        }
    }

    /// Key that orders decisions by how urgently the host will run them
    #[inline]
    pub const fn urgency(&self) -> (u8, RawPriority) {
        (self.policy.rank(), self.numeric_priority)
    }
}

impl PartialOrd for SchedulingDecision {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SchedulingDecision {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.urgency().cmp(&other.urgency())
    }
}

impl fmt::Display for SchedulingDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.policy.is_realtime() {
            write!(f, "{}:{}", self.policy, self.numeric_priority)
        } else {
            f.write_str(self.policy.as_str())
        }
    }
}

/// Map an abstract priority onto a host decision, first match wins
///
/// # Performance
/// Hot path - evaluated on every apply call
#[inline]
pub fn decide(base: RawPriority, priority: AbstractPriority) -> SchedulingDecision {
    if priority >= AbstractPriority::TIME_CRITICAL {
        SchedulingDecision::realtime(base.saturating_add(TIME_CRITICAL_OFFSET))
    } else if priority >= AbstractPriority::HIGHEST {
        SchedulingDecision::realtime(base.saturating_add(HIGHEST_OFFSET))
    } else if priority >= AbstractPriority::ABOVE_NORMAL {
        SchedulingDecision::realtime(base.saturating_add(ABOVE_NORMAL_OFFSET))
    } else if priority >= AbstractPriority::NORMAL {
        SchedulingDecision::timeshared(HostPolicy::Normal)
    } else if priority >= AbstractPriority::LOWEST {
        SchedulingDecision::timeshared(HostPolicy::Batch)
    } else {
        SchedulingDecision::timeshared(HostPolicy::Idle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_order() {
        assert!(AbstractPriority::IDLE < AbstractPriority::LOWEST);
        assert!(AbstractPriority::LOWEST < AbstractPriority::BELOW_NORMAL);
        assert!(AbstractPriority::BELOW_NORMAL < AbstractPriority::NORMAL);
        assert!(AbstractPriority::NORMAL < AbstractPriority::ABOVE_NORMAL);
        assert!(AbstractPriority::ABOVE_NORMAL < AbstractPriority::HIGHEST);
        assert!(AbstractPriority::HIGHEST < AbstractPriority::TIME_CRITICAL);
    }

    #[test]
    fn test_priority_parsing() {
        assert_eq!(
            AbstractPriority::from_str("time_critical").unwrap(),
            AbstractPriority::TIME_CRITICAL
        );
        assert_eq!(
            AbstractPriority::from_str("Lowest").unwrap(),
            AbstractPriority::LOWEST
        );
        assert_eq!(AbstractPriority::from_str("-7").unwrap(), AbstractPriority(-7));
        assert!(AbstractPriority::from_str("urgent").is_err());
    }

    #[test]
    fn test_policy_parsing() {
        assert_eq!(HostPolicy::from_str("fifo").unwrap(), HostPolicy::Realtime);
        assert_eq!(HostPolicy::from_str("batch").unwrap(), HostPolicy::Batch);
        assert!(HostPolicy::from_str("deadline").is_err());
    }

    #[test]
    fn test_decide_table() {
        let base = 10;
        assert_eq!(
            decide(base, AbstractPriority::TIME_CRITICAL),
            SchedulingDecision::realtime(14)
        );
        assert_eq!(
            decide(base, AbstractPriority::HIGHEST),
            SchedulingDecision::realtime(12)
        );
        assert_eq!(
            decide(base, AbstractPriority::ABOVE_NORMAL),
            SchedulingDecision::realtime(10)
        );
        assert_eq!(
            decide(base, AbstractPriority::NORMAL),
            SchedulingDecision::timeshared(HostPolicy::Normal)
        );
        assert_eq!(
            decide(base, AbstractPriority::BELOW_NORMAL),
            SchedulingDecision::timeshared(HostPolicy::Batch)
        );
        assert_eq!(
            decide(base, AbstractPriority::LOWEST),
            SchedulingDecision::timeshared(HostPolicy::Batch)
        );
        assert_eq!(
            decide(base, AbstractPriority::IDLE),
            SchedulingDecision::timeshared(HostPolicy::Idle)
        );
    }

    #[test]
    fn test_decide_saturates_at_host_limit() {
        assert_eq!(
            decide(RawPriority::MAX, AbstractPriority::TIME_CRITICAL),
            SchedulingDecision::realtime(RawPriority::MAX)
        );
        assert_eq!(
            decide(RawPriority::MAX - 1, AbstractPriority::HIGHEST),
            SchedulingDecision::realtime(RawPriority::MAX)
        );
    }

    #[test]
    fn test_decision_ordering() {
        let idle = SchedulingDecision::timeshared(HostPolicy::Idle);
        let batch = SchedulingDecision::timeshared(HostPolicy::Batch);
        let normal = SchedulingDecision::timeshared(HostPolicy::Normal);
        assert!(idle < batch && batch < normal);
        assert!(normal < SchedulingDecision::realtime(1));
        assert!(SchedulingDecision::realtime(1) < SchedulingDecision::realtime(2));
    }

    #[test]
    fn test_decision_serialization() {
        let json = serde_json::to_string(&SchedulingDecision::realtime(12)).unwrap();
        assert_eq!(json, r#"{"policy":"realtime","numeric_priority":12}"#);
    }
}
