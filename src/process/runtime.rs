/*!
 * Runtime Initialization
 * Resets derived process fields before each simulation run
 */

use super::types::Process;

/// Normalize static inputs and reset all derived fields
///
/// Negative burst and arrival times are clamped to 0 and non-positive
/// priorities are normalized to 1 (the highest urgency) rather than rejected;
/// callers are not required to pre-sanitize input. An empty slice is a no-op.
pub fn reset_runtime_fields(processes: &mut [Process]) {
    for proc in processes.iter_mut() {
        if proc.burst_time < 0 {
            proc.burst_time = 0;
        }
        if proc.arrival_time < 0 {
            proc.arrival_time = 0;
        }
        if proc.priority < 1 {
            proc.priority = 1;
        }

        proc.remaining_time = proc.burst_time;
        proc.completion_time = 0;
        proc.turnaround_time = 0;
        proc.waiting_time = 0;
        proc.response_time = None;
        proc.first_run_time = None;
    }
}
