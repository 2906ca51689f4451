/*!
 * Scheduling Engine Library
 * Batch CPU-scheduling simulation: six policies, occupancy timeline, metrics
 */

pub mod core;
pub mod process;
pub mod scheduler;

// Re-exports
pub use crate::core::errors::SchedulerError;
pub use crate::core::types::{Pid, Priority, SchedResult, SimTime};
pub use process::{reset_runtime_fields, Process, SystemProcessSample, MAX_PROCESS_NAME};
pub use scheduler::{
    calculate_metrics, count_context_switches, schedule, Algorithm, Metrics, ScheduleOutcome,
    TimelineEvent,
};
