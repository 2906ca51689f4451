/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use crate::core::types::SimTime;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Scheduling errors with serialization support
///
/// Every variant is fatal to the current call: no partial timeline or metrics
/// are produced. Malformed per-process fields are normalized instead of
/// rejected, so the taxonomy stays small.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum SchedulerError {
    #[error("no processes to schedule")]
    #[diagnostic(
        code(sched::empty_process_set),
        help("Supply at least one process descriptor.")
    )]
    EmptyProcessSet,

    #[error("unknown scheduling algorithm: {0}")]
    #[diagnostic(
        code(sched::unknown_algorithm),
        help("Valid: fcfs, sjf, srtf, round_robin, priority_np, priority_p.")
    )]
    UnknownAlgorithm(String),

    #[error("timeline slice rejected: end {end} must be after start {start}")]
    #[diagnostic(
        code(sched::invalid_slice),
        help("Occupancy intervals must cover at least one time unit.")
    )]
    InvalidSlice { start: SimTime, end: SimTime },
}
