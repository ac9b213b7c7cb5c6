/*!
 * Scheduler Initialization
 * Runs once at startup: probe the host, elevate the process, fix the base
 */

use super::state::ProcessSchedulingState;
use super::traits::SchedulingBackend;
use super::types::HostPolicy;
use crate::config::{SchedulerConfig, VarSource};
use crate::core::types::EntityHandle;
use crate::monitoring::span_host_call;
use tracing::{debug, info, warn};

/// Build the process scheduling state from `backend` and `source`
///
/// Never fails: a missing facility disables the feature, a refused
/// process elevation is logged and initialization carries on.
pub fn initialize_scheduler<S: VarSource + ?Sized>(
    backend: &dyn SchedulingBackend,
    source: &S,
) -> ProcessSchedulingState {
    let bounds = match backend.priority_bounds(HostPolicy::Realtime) {
        Ok(bounds) => bounds,
        Err(e) => {
            debug!(backend = backend.name(), error = %e, "priority scheduling disabled");
            return ProcessSchedulingState::disabled();
        }
    };

    let mut state = ProcessSchedulingState {
        enabled: true,
        realtime_bounds: Some(bounds),
        ..ProcessSchedulingState::disabled()
    };

    if let Some(priority) = SchedulerConfig::load_server(source, bounds) {
        let span = span_host_call(EntityHandle::CallingProcess, HostPolicy::Realtime, priority);
        let result = {
            let _entered = span.enter();
            backend.set_scheduling(EntityHandle::CallingProcess, HostPolicy::Realtime, priority, true)
        };
        match result {
            Ok(()) => {
                span.record_result(true);
                info!(priority, "process elevated to real-time scheduling");
                state.server_priority = Some(priority);
            }
            Err(e) => {
                span.record_error(&e.to_string());
                warn!(priority, error = %e, "failed to elevate process scheduling");
            }
        }
    }

    state.base_priority = SchedulerConfig::load_base(source, bounds);

    info!(
        backend = backend.name(),
        %bounds,
        base_priority = ?state.base_priority,
        server_priority = ?state.server_priority,
        "priority scheduler initialized"
    );

    state
}
