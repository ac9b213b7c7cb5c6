/*!
 * Linux Scheduling Backend
 * sched_setscheduler(2) with SCHED_RESET_ON_FORK support
 */

use crate::core::errors::PriorityError;
use crate::core::types::{EntityHandle, PriorityBounds, PriorityResult, RawPriority};
use crate::scheduler::traits::SchedulingBackend;
use crate::scheduler::types::HostPolicy;
use nix::errno::Errno;
use tracing::debug;

/// Backend for Linux hosts
#[derive(Debug, Default, Clone, Copy)]
pub struct LinuxBackend;

impl LinuxBackend {
    pub const fn new() -> Self {
        Self
    }

    /// Returns the backend only if the host accepts real-time policies
    pub fn probe() -> Option<Self> {
        let backend = Self::new();
        match backend.priority_bounds(HostPolicy::Realtime) {
            Ok(bounds) if bounds.max >= bounds.min => Some(backend),
            Ok(bounds) => {
                debug!(%bounds, "host reports an empty real-time priority range");
                None
            }
            Err(e) => {
                debug!(error = %e, "host has no real-time scheduling");
                None
            }
        }
    }

    #[inline(always)]
    const fn raw_policy(policy: HostPolicy) -> libc::c_int {
        match policy {
            HostPolicy::Realtime => libc::SCHED_FIFO,
            HostPolicy::Normal => libc::SCHED_OTHER,
            HostPolicy::Batch => libc::SCHED_BATCH,
            HostPolicy::Idle => libc::SCHED_IDLE,
        }
    }
}

impl SchedulingBackend for LinuxBackend {
    fn name(&self) -> &'static str {
        "linux"
    }

    fn priority_bounds(&self, policy: HostPolicy) -> PriorityResult<PriorityBounds> {
        let raw = Self::raw_policy(policy);
        // SAFETY: plain queries without pointer arguments
        let min = unsafe { libc::sched_get_priority_min(raw) };
        let max = unsafe { libc::sched_get_priority_max(raw) };
        if min == -1 || max == -1 {
            return Err(PriorityError::Unsupported(format!(
                "{} priority range unavailable: {}",
                policy,
                Errno::last().desc()
            )));
        }
        Ok(PriorityBounds::new(min, max))
    }

    fn set_scheduling(
        &self,
        entity: EntityHandle,
        policy: HostPolicy,
        priority: RawPriority,
        reset_on_fork: bool,
    ) -> PriorityResult<()> {
        let mut flags = Self::raw_policy(policy);
        if reset_on_fork {
            flags |= libc::SCHED_RESET_ON_FORK;
        }

        // SAFETY: sched_param is plain data; zeroed covers libc variants with extra fields
        let mut param: libc::sched_param = unsafe { std::mem::zeroed() };
        param.sched_priority = priority;

        // SAFETY: param outlives the call and the kernel only reads it
        let rc = unsafe { libc::sched_setscheduler(entity.host_id(), flags, &param) };
        if rc == -1 {
            return Err(PriorityError::from_errno(Errno::last(), entity, priority));
        }
        Ok(())
    }
}
