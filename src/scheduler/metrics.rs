/*!
 * Metrics Derivation
 * Aggregate statistics over completed process records
 */

use crate::core::types::SimTime;
use crate::process::Process;
use serde::{Deserialize, Serialize};

/// Aggregate performance metrics for one simulation run
///
/// All fields are recomputed fresh each run; `Default` is the all-zero value
/// returned for empty input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    pub avg_turnaround_time: f64,
    pub avg_waiting_time: f64,
    pub avg_response_time: f64,
    /// Percentage of total elapsed time spent executing work, in [0, 100]
    pub cpu_utilization: f64,
    /// Completed processes per unit time
    pub throughput: f64,
    /// Max completion time across processes
    pub total_time: SimTime,
    pub context_switches: usize,
}

/// Derive metrics from finalized process records
///
/// Averages are arithmetic means over all processes; a response time that was
/// never set counts as 0. Utilization and throughput are 0 when total time is
/// 0. Never fails.
pub fn calculate_metrics(processes: &[Process], context_switches: usize) -> Metrics {
    if processes.is_empty() {
        return Metrics::default();
    }

    let count = processes.len() as f64;
    let mut total_turnaround = 0.0;
    let mut total_waiting = 0.0;
    let mut total_response = 0.0;
    let mut total_burst: SimTime = 0;
    let mut max_completion: SimTime = 0;

    for proc in processes {
        total_turnaround += proc.turnaround_time as f64;
        total_waiting += proc.waiting_time as f64;
        total_response += proc.response_time.unwrap_or(0).max(0) as f64;
        total_burst += proc.burst_time;
        max_completion = max_completion.max(proc.completion_time);
    }

    let mut metrics = Metrics {
        avg_turnaround_time: total_turnaround / count,
        avg_waiting_time: total_waiting / count,
        avg_response_time: total_response / count,
        total_time: max_completion,
        context_switches,
        ..Metrics::default()
    };

    if max_completion > 0 {
        metrics.cpu_utilization = (total_burst as f64 / max_completion as f64) * 100.0;
        metrics.throughput = count / max_completion as f64;
    }

    metrics
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_is_zeroed() {
        assert_eq!(calculate_metrics(&[], 5), Metrics::default());
    }

    #[test]
    fn test_unset_response_counts_as_zero() {
        let mut proc = Process::new(1, "p", 0, 4, 1);
        proc.completion_time = 4;
        proc.turnaround_time = 4;
        proc.response_time = None;

        let metrics = calculate_metrics(&[proc], 0);
        assert_eq!(metrics.avg_response_time, 0.0);
    }

    #[test]
    fn test_zero_total_time_yields_zero_rates() {
        // A lone zero-burst process completing at t=0.
        let proc = Process::new(1, "p", 0, 0, 1);
        let metrics = calculate_metrics(&[proc], 0);
        assert_eq!(metrics.total_time, 0);
        assert_eq!(metrics.cpu_utilization, 0.0);
        assert_eq!(metrics.throughput, 0.0);
    }
}
