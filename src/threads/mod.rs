/*!
 * Threads Module
 * Resolution of logical thread references to host entities
 */

mod host;
mod registry;

pub use host::{current_host_tid, HostTaskResolver};
pub use registry::ThreadRegistry;
