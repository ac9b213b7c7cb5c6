/*!
 * Monitoring
 * Logging setup and tracing spans
 */

mod tracer;

pub use tracer::{init_tracing, span_host_call, HostCallSpan};
