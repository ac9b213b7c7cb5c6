/*!
 * Scheduling Backends
 * Host implementations of SchedulingBackend, chosen once at startup
 */

#[cfg(target_os = "linux")]
mod linux;
mod noop;

#[cfg(target_os = "linux")]
pub use linux::LinuxBackend;
pub use noop::NoopBackend;

use super::traits::SchedulingBackend;
use std::sync::Arc;
use tracing::info;

/// Pick the best backend the host supports
pub fn detect_backend() -> Arc<dyn SchedulingBackend> {
    #[cfg(target_os = "linux")]
    {
        if let Some(backend) = LinuxBackend::probe() {
            info!(backend = backend.name(), "real-time scheduling available");
            return Arc::new(backend);
        }
    }

    info!(backend = NoopBackend.name(), "real-time scheduling unavailable, priorities disabled");
    Arc::new(NoopBackend)
}
