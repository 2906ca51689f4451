/*!
 * Core Types
 * Common types used across the engine
 */

/// Process ID type
pub type Pid = u32;

/// Simulated time, in abstract time units
///
/// Signed so that out-of-range caller input can be clamped rather than
/// rejected.
pub type SimTime = i64;

/// Static priority level (lower value = more urgent, normalized to >= 1)
pub type Priority = i32;

/// Common result type for engine operations
pub type SchedResult<T> = Result<T, super::errors::SchedulerError>;
