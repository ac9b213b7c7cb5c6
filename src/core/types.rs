/*!
 * Core Types
 * Common types used across the crate
 */

use serde::{Deserialize, Serialize};
use std::fmt;

/// Host thread id (kernel task id on Linux)
pub type HostTid = i32;

/// Numeric host scheduling priority
pub type RawPriority = i32;

/// Common result type for host scheduling operations
pub type PriorityResult<T> = Result<T, super::errors::PriorityError>;

/// Opaque logical thread reference handed in by the thread-management layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThreadRef(pub u32);

impl fmt::Display for ThreadRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "thread#{}", self.0)
    }
}

impl From<u32> for ThreadRef {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// A schedulable entity as understood by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "tid", rename_all = "snake_case")]
pub enum EntityHandle {
    /// The calling process as a whole
    CallingProcess,
    /// A single host thread
    Thread(HostTid),
}

impl EntityHandle {
    /// Id passed to the host scheduling call (0 addresses the caller)
    #[inline(always)]
    pub const fn host_id(&self) -> HostTid {
        match self {
            Self::CallingProcess => 0,
            Self::Thread(tid) => *tid,
        }
    }
}

impl fmt::Display for EntityHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CallingProcess => f.write_str("self"),
            Self::Thread(tid) => write!(f, "tid {}", tid),
        }
    }
}

/// Inclusive priority range supported by a host policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityBounds {
    pub min: RawPriority,
    pub max: RawPriority,
}

impl PriorityBounds {
    pub const fn new(min: RawPriority, max: RawPriority) -> Self {
        Self { min, max }
    }

    /// Whether `value` lies inside the range
    #[inline]
    pub const fn contains(&self, value: RawPriority) -> bool {
        value >= self.min && value <= self.max
    }

    /// Same lower bound, upper bound lowered by `headroom` steps
    #[inline]
    pub const fn with_headroom(&self, headroom: RawPriority) -> Self {
        Self {
            min: self.min,
            max: self.max - headroom,
        }
    }
}

impl fmt::Display for PriorityBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}
