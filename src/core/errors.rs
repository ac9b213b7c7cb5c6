/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use super::types::{EntityHandle, PriorityBounds, RawPriority};
use miette::Diagnostic;
use nix::errno::Errno;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Invalid tunable found while loading configuration
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum ConfigError {
    #[error("{name}={raw:?} is not an integer, expected a value in {bounds}")]
    #[diagnostic(
        code(config::malformed),
        help("Set the variable to a plain decimal integer or unset it.")
    )]
    Malformed {
        name: String,
        raw: String,
        bounds: PriorityBounds,
    },

    #[error("{name}={value} is out of range, expected a value in {bounds}")]
    #[diagnostic(
        code(config::out_of_range),
        help("The legal range comes from the host real-time policy limits.")
    )]
    OutOfRange {
        name: String,
        value: i64,
        bounds: PriorityBounds,
    },
}

/// Host scheduling errors
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum PriorityError {
    #[error("Real-time scheduling unsupported: {0}")]
    #[diagnostic(
        code(priority::unsupported),
        help("The host does not expose a real-time scheduling facility.")
    )]
    Unsupported(String),

    #[error("Permission denied setting scheduling for {entity}")]
    #[diagnostic(
        code(priority::permission_denied),
        help("Real-time policies need CAP_SYS_NICE or a suitable RLIMIT_RTPRIO.")
    )]
    PermissionDenied { entity: EntityHandle },

    #[error("No such entity: {entity}")]
    #[diagnostic(code(priority::no_such_entity))]
    NoSuchEntity { entity: EntityHandle },

    #[error("Invalid priority {priority} for {entity}")]
    #[diagnostic(
        code(priority::invalid_argument),
        help("The host rejected the policy/priority combination.")
    )]
    InvalidArgument {
        entity: EntityHandle,
        priority: RawPriority,
    },

    #[error("Host scheduling call failed for {entity}: {message} (errno {code})")]
    #[diagnostic(code(priority::os_error))]
    Os {
        entity: EntityHandle,
        code: i32,
        message: String,
    },
}

impl PriorityError {
    /// Classify a host errno for the given scheduling target
    pub fn from_errno(errno: Errno, entity: EntityHandle, priority: RawPriority) -> Self {
        match errno {
            Errno::EPERM => Self::PermissionDenied { entity },
            Errno::ESRCH => Self::NoSuchEntity { entity },
            Errno::EINVAL => Self::InvalidArgument { entity, priority },
            other => Self::Os {
                entity,
                code: other as i32,
                message: other.desc().to_string(),
            },
        }
    }

    /// The target vanished before the call reached it
    #[inline]
    pub fn is_stale(&self) -> bool {
        matches!(self, Self::NoSuchEntity { .. })
    }
}
