/*!
 * Structured Tracing
 * Subscriber setup and spans around host scheduling calls
 */

use crate::core::limits::{ENV_TRACE_JSON, SLOW_HOST_CALL_MICROS};
use crate::core::types::{EntityHandle, RawPriority};
use crate::scheduler::types::HostPolicy;
use std::time::Instant;
use tracing::{debug, info, span, warn, Level};
use tracing_subscriber::{
    fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Initialize structured tracing
///
/// Environment variables:
/// - RUST_LOG: Set log level (default: info)
/// - RT_PRIORITY_TRACE_JSON: Enable JSON output (default: false)
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let use_json = std::env::var(ENV_TRACE_JSON)
        .map(|v| v == "1" || v == "true")
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(env_filter);

    if use_json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_thread_names(true)
                    .with_current_span(true)
                    .with_span_events(FmtSpan::CLOSE),
            )
            .init();
        info!("Structured tracing initialized with JSON output");
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_thread_names(true)
                    .with_line_number(true)
                    .with_file(true)
                    .compact(),
            )
            .init();
        info!("Structured tracing initialized");
    }
}

/// Span covering a single host scheduling call
pub struct HostCallSpan {
    span: tracing::Span,
    start: Instant,
}

impl HostCallSpan {
    pub fn new(entity: EntityHandle, policy: HostPolicy, priority: RawPriority) -> Self {
        let span = span!(
            Level::DEBUG,
            "host_sched",
            entity = %entity,
            policy = policy.as_str(),
            priority = priority,
            duration_us = tracing::field::Empty,
            result = tracing::field::Empty,
            error = tracing::field::Empty,
        );

        Self {
            span,
            start: Instant::now(),
        }
    }

    /// Record the call result
    pub fn record_result(&self, success: bool) {
        self.span
            .record("result", if success { "success" } else { "error" });
    }

    /// Record an error
    pub fn record_error(&self, error: &str) {
        self.span.record("error", error);
        self.span.record("result", "error");
    }

    pub fn enter(&self) -> tracing::span::Entered<'_> {
        self.span.enter()
    }
}

impl Drop for HostCallSpan {
    fn drop(&mut self) {
        let micros = self.start.elapsed().as_micros();
        self.span.record("duration_us", micros);
        let _entered = self.span.enter();

        if micros > SLOW_HOST_CALL_MICROS {
            warn!(duration_us = micros, slow = true, "slow host scheduling call");
        } else {
            debug!(duration_us = micros, "host scheduling call completed");
        }
    }
}

/// Helper to create a host call span
#[inline]
pub fn span_host_call(entity: EntityHandle, policy: HostPolicy, priority: RawPriority) -> HostCallSpan {
    HostCallSpan::new(entity, policy, priority)
}
