/*!
 * Scheduler Module
 * Simulation entry point: dispatches a policy and assembles the result
 */

use crate::core::errors::SchedulerError;
use crate::core::types::{SchedResult, SimTime};
use crate::process::{reset_runtime_fields, Process};
use log::info;
use serde::{Deserialize, Serialize};

mod driver;
mod policy;

pub mod metrics;
pub mod timeline;
pub mod types;

use driver::Simulation;

// Re-export public API
pub use metrics::{calculate_metrics, Metrics};
pub use timeline::{count_context_switches, TimelineBuilder, TimelineEvent};
pub use types::Algorithm;

/// Finished simulation: the CPU-occupancy timeline plus aggregate metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleOutcome {
    pub timeline: Vec<TimelineEvent>,
    pub metrics: Metrics,
}

/// Run one scheduling simulation over `processes`
///
/// Resets each process's derived fields, dispatches to `algorithm`, and
/// returns the merged occupancy timeline plus aggregate metrics. `quantum` is
/// consulted only by round robin; a non-positive quantum behaves as 1.
///
/// Process records are mutated in place and hold their final completion,
/// turnaround, waiting, and response values on success. On failure no partial
/// result is produced.
pub fn schedule(
    processes: &mut [Process],
    algorithm: Algorithm,
    quantum: SimTime,
) -> SchedResult<ScheduleOutcome> {
    if processes.is_empty() {
        return Err(SchedulerError::EmptyProcessSet);
    }

    reset_runtime_fields(processes);
    info!(
        "scheduling {} processes with {}",
        processes.len(),
        algorithm
    );

    let timeline = match algorithm {
        Algorithm::Fcfs => Simulation::new(processes).run_to_completion(policy::by_arrival),
        Algorithm::Sjf => Simulation::new(processes).run_to_completion(policy::by_burst),
        Algorithm::Srtf => Simulation::new(processes).run_preemptive(policy::by_remaining),
        Algorithm::RoundRobin => Simulation::new(processes).run_round_robin(quantum),
        Algorithm::PriorityNonPreemptive => {
            Simulation::new(processes).run_to_completion(policy::by_priority)
        }
        Algorithm::PriorityPreemptive => {
            Simulation::new(processes).run_preemptive(policy::by_priority_then_remaining)
        }
    }?;

    let context_switches = count_context_switches(&timeline);
    let metrics = calculate_metrics(processes, context_switches);

    info!(
        "{} complete: {} events, {} context switches, total time {}",
        algorithm,
        timeline.len(),
        context_switches,
        metrics.total_time
    );

    Ok(ScheduleOutcome { timeline, metrics })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_rejected() {
        let mut procs: Vec<Process> = Vec::new();
        assert_eq!(
            schedule(&mut procs, Algorithm::Fcfs, 0),
            Err(SchedulerError::EmptyProcessSet)
        );
    }

    #[test]
    fn test_single_process_runs_once() {
        let mut procs = vec![Process::new(1, "only", 0, 6, 1)];

        for algorithm in Algorithm::ALL {
            let outcome = schedule(&mut procs, algorithm, 2).unwrap();
            assert_eq!(procs[0].completion_time, 6);
            assert_eq!(procs[0].waiting_time, 0);
            assert_eq!(procs[0].response_time, Some(0));
            // Quantum slices of the lone process merge into a single event.
            assert_eq!(outcome.timeline.len(), 1);
            assert_eq!(outcome.metrics.context_switches, 0);
        }
    }

    #[test]
    fn test_records_reset_between_runs() {
        let mut procs = vec![
            Process::new(1, "a", 0, 4, 2),
            Process::new(2, "b", 1, 2, 1),
        ];

        let first = schedule(&mut procs, Algorithm::Sjf, 0).unwrap();
        let second = schedule(&mut procs, Algorithm::Sjf, 0).unwrap();
        assert_eq!(first, second);
    }
}
