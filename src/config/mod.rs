/*!
 * Configuration Module
 * Environment tunables for the priority scheduler
 */

pub mod env;
pub mod types;

pub use env::{parse_bounded, read_bounded_int, read_bounded_int_from, ProcessEnv, VarSource};
pub use types::SchedulerConfig;
