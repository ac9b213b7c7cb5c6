/*!
 * Limits and Constants
 *
 * Environment variable names and scheduling offsets in one place.
 */

use super::types::RawPriority;

// =============================================================================
// ENVIRONMENT
// =============================================================================

/// Real-time priority for the whole process, range `[rt_min, rt_max]`
pub const ENV_SERVER_PRIORITY: &str = "RT_PRIORITY_SERVER";

/// Base real-time priority for threads, range `[rt_min, rt_max - RT_HEADROOM]`
pub const ENV_BASE_PRIORITY: &str = "RT_PRIORITY_BASE";

/// Switch log output to JSON (`1` or `true`)
pub const ENV_TRACE_JSON: &str = "RT_PRIORITY_TRACE_JSON";

// =============================================================================
// REAL-TIME OFFSETS
// =============================================================================

/// Steps reserved above the base priority for the most urgent threads
pub const RT_HEADROOM: RawPriority = 4;

/// Offset applied to time-critical threads
pub const TIME_CRITICAL_OFFSET: RawPriority = 4;

/// Offset applied to highest-priority threads
pub const HIGHEST_OFFSET: RawPriority = 2;

/// Offset applied to above-normal threads
pub const ABOVE_NORMAL_OFFSET: RawPriority = 0;

// =============================================================================
// TRACING
// =============================================================================

/// Host scheduling calls slower than this are reported (microseconds)
pub const SLOW_HOST_CALL_MICROS: u128 = 1_000;

const _: () = assert!(TIME_CRITICAL_OFFSET <= RT_HEADROOM);
const _: () = assert!(HIGHEST_OFFSET <= TIME_CRITICAL_OFFSET);
const _: () = assert!(ABOVE_NORMAL_OFFSET <= HIGHEST_OFFSET);
