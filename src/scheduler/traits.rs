/*!
 * Scheduler Traits
 * Seams between the priority mapping and the host it runs on
 */

use super::types::HostPolicy;
use crate::core::types::{EntityHandle, PriorityBounds, PriorityResult, RawPriority, ThreadRef};

/// Host scheduling facility
///
/// One implementation per supported host plus a no-op one, picked once at
/// initialization.
pub trait SchedulingBackend: Send + Sync {
    /// Short backend name for logs
    fn name(&self) -> &'static str;

    /// Legal numeric priorities for `policy`
    fn priority_bounds(&self, policy: HostPolicy) -> PriorityResult<PriorityBounds>;

    /// Set `policy` and `priority` on `entity`
    ///
    /// With `reset_on_fork` the assignment is not inherited by children.
    fn set_scheduling(
        &self,
        entity: EntityHandle,
        policy: HostPolicy,
        priority: RawPriority,
        reset_on_fork: bool,
    ) -> PriorityResult<()>;
}

/// Resolves logical threads to live host entities
pub trait EntityResolver: Send + Sync {
    /// `None` when the thread is gone or not running on the host
    fn resolve(&self, thread: ThreadRef) -> Option<EntityHandle>;
}
