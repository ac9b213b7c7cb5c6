/*!
 * No-op Scheduling Backend
 * Selected on hosts without a real-time scheduling facility
 */

use crate::core::errors::PriorityError;
use crate::core::types::{EntityHandle, PriorityBounds, PriorityResult, RawPriority};
use crate::scheduler::traits::SchedulingBackend;
use crate::scheduler::types::HostPolicy;

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopBackend;

impl SchedulingBackend for NoopBackend {
    fn name(&self) -> &'static str {
        "noop"
    }

    fn priority_bounds(&self, policy: HostPolicy) -> PriorityResult<PriorityBounds> {
        Err(PriorityError::Unsupported(format!(
            "no {} policy on this host",
            policy
        )))
    }

    fn set_scheduling(
        &self,
        entity: EntityHandle,
        policy: HostPolicy,
        _priority: RawPriority,
        _reset_on_fork: bool,
    ) -> PriorityResult<()> {
        Err(PriorityError::Unsupported(format!(
            "cannot set {} policy on {}",
            policy, entity
        )))
    }
}
