/*!
 * rt-priority
 * Abstract thread priorities mapped onto host scheduling policies
 */

pub mod config;
pub mod core;
pub mod monitoring;
pub mod scheduler;
pub mod threads;

// Re-exports
pub use config::{read_bounded_int, ProcessEnv, SchedulerConfig, VarSource};
pub use crate::core::errors::{ConfigError, PriorityError};
pub use crate::core::types::{EntityHandle, HostTid, PriorityBounds, RawPriority, ThreadRef};
pub use monitoring::init_tracing;
pub use scheduler::{
    decide, detect_backend, initialize_scheduler, AbstractPriority, EntityResolver, HostPolicy,
    NoopBackend, PriorityScheduler, ProcessSchedulingState, SchedulerStats, SchedulingBackend,
    SchedulingDecision,
};
pub use threads::{current_host_tid, HostTaskResolver, ThreadRegistry};
