/*!
 * Priority Scheduler
 * Applies abstract thread priorities through the host scheduling backend
 */

use super::backend::detect_backend;
use super::init::initialize_scheduler;
use super::state::ProcessSchedulingState;
use super::stats::{AtomicSchedulerStats, SchedulerStats};
use super::traits::{EntityResolver, SchedulingBackend};
use super::types::{decide, AbstractPriority, SchedulingDecision};
use crate::config::ProcessEnv;
use crate::core::errors::PriorityError;
use crate::core::types::{EntityHandle, ThreadRef};
use crate::monitoring::span_host_call;
use crate::threads::HostTaskResolver;
use std::sync::Arc;
use tracing::{debug, warn};

/// Outcome of one pass through the fallback ladder
#[derive(Debug, Clone, PartialEq, Eq)]
enum ApplyOutcome {
    Applied,
    AppliedWithoutResetOnFork,
    Stale,
    Failed(PriorityError),
}

/// Maps abstract priorities to host scheduling and applies them
///
/// Stateless apart from statistics: the state is fixed at construction and
/// every call recomputes the decision from scratch.
pub struct PriorityScheduler {
    state: Arc<ProcessSchedulingState>,
    backend: Arc<dyn SchedulingBackend>,
    resolver: Arc<dyn EntityResolver>,
    stats: Arc<AtomicSchedulerStats>,
}

impl PriorityScheduler {
    /// Create a scheduler over an already initialized state
    pub fn new(
        state: Arc<ProcessSchedulingState>,
        backend: Arc<dyn SchedulingBackend>,
        resolver: Arc<dyn EntityResolver>,
    ) -> Self {
        Self {
            state,
            backend,
            resolver,
            stats: Arc::new(AtomicSchedulerStats::new()),
        }
    }

    /// Detect the host backend, initialize from the process environment and
    /// resolve thread references as host thread ids
    ///
    /// Call once at startup, before other threads apply priorities.
    pub fn from_env() -> Self {
        let backend = detect_backend();
        let state = initialize_scheduler(backend.as_ref(), &ProcessEnv);
        Self::new(Arc::new(state), backend, Arc::new(HostTaskResolver))
    }

    /// Shared process scheduling state
    pub fn state(&self) -> &ProcessSchedulingState {
        &self.state
    }

    /// Name of the backend in use
    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    /// Decision `apply` would make, `None` while disabled
    #[inline]
    pub fn decision_for(&self, priority: AbstractPriority) -> Option<SchedulingDecision> {
        self.state.active_base().map(|base| decide(base, priority))
    }

    /// Apply `priority` to `thread`
    ///
    /// Failures end here as log lines; the thread keeps its current policy.
    pub fn apply(&self, thread: ThreadRef, priority: AbstractPriority) {
        self.stats.inc_requested();

        let Some(decision) = self.decision_for(priority) else {
            self.stats.inc_skipped_disabled();
            return;
        };

        let Some(entity) = self.resolver.resolve(thread) else {
            self.stats.inc_skipped_stale();
            return;
        };

        match self.set_with_fallback(entity, decision) {
            ApplyOutcome::Applied => {
                self.stats.inc_applied();
                debug!(%thread, %entity, %priority, %decision, "thread priority applied");
            }
            ApplyOutcome::AppliedWithoutResetOnFork => {
                self.stats.inc_applied_fallback();
                debug!(
                    %thread,
                    %entity,
                    %priority,
                    %decision,
                    "thread priority applied without reset-on-fork"
                );
            }
            ApplyOutcome::Stale => {
                self.stats.inc_skipped_stale();
            }
            ApplyOutcome::Failed(e) => {
                self.stats.inc_failed();
                warn!(
                    %thread,
                    %entity,
                    policy = %decision.policy,
                    numeric_priority = decision.numeric_priority,
                    error = %e,
                    "failed to set thread scheduling"
                );
            }
        }
    }

    /// Try with reset-on-fork, then once without
    fn set_with_fallback(
        &self,
        entity: EntityHandle,
        decision: SchedulingDecision,
    ) -> ApplyOutcome {
        let first = self.set(entity, decision, true);
        match first {
            Ok(()) => return ApplyOutcome::Applied,
            Err(e) if e.is_stale() => return ApplyOutcome::Stale,
            Err(e) => {
                debug!(%entity, %decision, error = %e, "retrying without reset-on-fork");
            }
        }

        match self.set(entity, decision, false) {
            Ok(()) => ApplyOutcome::AppliedWithoutResetOnFork,
            Err(e) if e.is_stale() => ApplyOutcome::Stale,
            Err(e) => ApplyOutcome::Failed(e),
        }
    }

    fn set(
        &self,
        entity: EntityHandle,
        decision: SchedulingDecision,
        reset_on_fork: bool,
    ) -> Result<(), PriorityError> {
        let span = span_host_call(entity, decision.policy, decision.numeric_priority);
        let result = {
            let _entered = span.enter();
            self.backend.set_scheduling(
                entity,
                decision.policy,
                decision.numeric_priority,
                reset_on_fork,
            )
        };
        match &result {
            Ok(()) => span.record_result(true),
            Err(e) => span.record_error(&e.to_string()),
        }
        result
    }

    /// Snapshot of apply statistics
    pub fn stats(&self) -> SchedulerStats {
        self.stats.snapshot()
    }
}

impl Clone for PriorityScheduler {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            backend: Arc::clone(&self.backend),
            resolver: Arc::clone(&self.resolver),
            stats: Arc::clone(&self.stats),
        }
    }
}
