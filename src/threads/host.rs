/*!
 * Host Task Resolver
 * Treats thread references as host thread ids of this process
 */

use crate::core::types::{EntityHandle, HostTid, ThreadRef};
use crate::scheduler::traits::EntityResolver;

/// Resolves a reference only while the host thread is alive
#[derive(Debug, Default, Clone, Copy)]
pub struct HostTaskResolver;

impl EntityResolver for HostTaskResolver {
    #[cfg(target_os = "linux")]
    fn resolve(&self, thread: ThreadRef) -> Option<EntityHandle> {
        let tid = HostTid::try_from(thread.0).ok().filter(|tid| *tid > 0)?;
        std::path::Path::new(&format!("/proc/self/task/{}", tid))
            .exists()
            .then_some(EntityHandle::Thread(tid))
    }

    #[cfg(not(target_os = "linux"))]
    fn resolve(&self, _thread: ThreadRef) -> Option<EntityHandle> {
        None
    }
}

/// Host id of the calling thread
#[cfg(target_os = "linux")]
pub fn current_host_tid() -> HostTid {
    // SAFETY: gettid has no arguments and cannot fail
    unsafe { libc::syscall(libc::SYS_gettid) as HostTid }
}

/// Host id of the calling thread
#[cfg(not(target_os = "linux"))]
pub fn current_host_tid() -> HostTid {
    std::process::id() as HostTid
}
