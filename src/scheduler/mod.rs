/*!
 * Scheduler Module
 * Abstract thread priority to host scheduling policy mapping
 */

pub mod backend;
pub mod init;
pub mod priority;
pub mod state;
pub mod stats;
pub mod traits;
pub mod types;

// Re-export public API
pub use backend::{detect_backend, NoopBackend};
#[cfg(target_os = "linux")]
pub use backend::LinuxBackend;
pub use init::initialize_scheduler;
pub use priority::PriorityScheduler;
pub use state::ProcessSchedulingState;
pub use stats::SchedulerStats;
pub use traits::{EntityResolver, SchedulingBackend};
pub use types::{decide, AbstractPriority, HostPolicy, SchedulingDecision};
