/*!
 * Thread Registry
 * Logical thread references mapped to running host threads
 */

use crate::core::types::{EntityHandle, HostTid, ThreadRef};
use crate::scheduler::traits::EntityResolver;
use dashmap::DashMap;
use std::sync::Arc;
use tracing::trace;

/// Concurrent map of logical threads to host thread ids
///
/// Threads are registered when they start running on the host and
/// unregistered when they exit; unknown references do not resolve.
#[derive(Debug, Default, Clone)]
pub struct ThreadRegistry {
    threads: Arc<DashMap<ThreadRef, HostTid>>,
}

impl ThreadRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `thread` runs as `host_tid`, returning any previous id
    pub fn register(&self, thread: ThreadRef, host_tid: HostTid) -> Option<HostTid> {
        trace!(%thread, host_tid, "thread registered");
        self.threads.insert(thread, host_tid)
    }

    /// Forget `thread`, returning its host id if it was known
    pub fn unregister(&self, thread: ThreadRef) -> Option<HostTid> {
        let removed = self.threads.remove(&thread).map(|(_, tid)| tid);
        if removed.is_some() {
            trace!(%thread, "thread unregistered");
        }
        removed
    }

    /// Host id of `thread`, if registered
    #[inline]
    pub fn host_tid(&self, thread: ThreadRef) -> Option<HostTid> {
        self.threads.get(&thread).map(|entry| *entry.value())
    }

    pub fn len(&self) -> usize {
        self.threads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.threads.is_empty()
    }
}

impl EntityResolver for ThreadRegistry {
    fn resolve(&self, thread: ThreadRef) -> Option<EntityHandle> {
        // Non-positive ids mean "not running on the host yet"
        self.host_tid(thread)
            .filter(|tid| *tid > 0)
            .map(EntityHandle::Thread)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_resolve_unregister() {
        let registry = ThreadRegistry::new();
        assert!(registry.is_empty());

        assert_eq!(registry.register(ThreadRef(1), 1001), None);
        assert_eq!(registry.register(ThreadRef(1), 1002), Some(1001));
        assert_eq!(registry.len(), 1);
        assert_eq!(
            registry.resolve(ThreadRef(1)),
            Some(EntityHandle::Thread(1002))
        );

        assert_eq!(registry.unregister(ThreadRef(1)), Some(1002));
        assert_eq!(registry.resolve(ThreadRef(1)), None);
        assert_eq!(registry.unregister(ThreadRef(1)), None);
    }

    #[test]
    fn test_not_yet_running_does_not_resolve() {
        let registry = ThreadRegistry::new();
        registry.register(ThreadRef(2), -1);
        assert_eq!(registry.resolve(ThreadRef(2)), None);
    }

    #[test]
    fn test_clones_share_entries() {
        let registry = ThreadRegistry::new();
        let other = registry.clone();
        other.register(ThreadRef(9), 4000);
        assert_eq!(registry.host_tid(ThreadRef(9)), Some(4000));
    }
}
