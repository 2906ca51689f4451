/*!
 * Process Types
 * Schedulable process descriptors and the system-sample boundary shape
 */

use crate::core::types::{Pid, Priority, SimTime};
use serde::{Deserialize, Serialize};

/// Upper bound on stored process names; longer names are truncated
pub const MAX_PROCESS_NAME: usize = 256;

/// A schedulable process
///
/// Static inputs (`arrival_time`, `burst_time`, `priority`) are supplied by
/// the caller and normalized before each run; the derived fields are owned by
/// the active scheduling policy during simulation and hold their final values
/// after a successful run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    pub pid: Pid,
    pub name: String,
    pub arrival_time: SimTime,
    pub burst_time: SimTime,
    pub priority: Priority,

    /// CPU time still required; drives preemptive decisions
    pub remaining_time: SimTime,
    pub completion_time: SimTime,
    pub turnaround_time: SimTime,
    pub waiting_time: SimTime,
    /// Delay between arrival and first dispatch; `None` until first scheduled
    pub response_time: Option<SimTime>,
    /// Time of first dispatch; `None` until first scheduled
    pub first_run_time: Option<SimTime>,
}

impl Process {
    /// Create a process descriptor with derived fields at their initial state
    pub fn new(
        pid: Pid,
        name: &str,
        arrival_time: SimTime,
        burst_time: SimTime,
        priority: Priority,
    ) -> Self {
        Self {
            pid,
            name: truncate_name(name),
            arrival_time,
            burst_time,
            priority,
            remaining_time: burst_time,
            completion_time: 0,
            turnaround_time: 0,
            waiting_time: 0,
            response_time: None,
            first_run_time: None,
        }
    }

    /// Whether this process can run at `now`: arrived and not yet complete
    #[inline]
    pub fn is_eligible(&self, now: SimTime) -> bool {
        self.arrival_time <= now && self.remaining_time > 0
    }

    /// Build a schedulable process from a live system sample
    ///
    /// Burst is estimated from observed CPU usage and bounded to [1, 20]; the
    /// nice value is remapped from its native range into priority 1-10.
    pub fn from_sample(sample: &SystemProcessSample, arrival_time: SimTime) -> Self {
        let burst_estimate = 1 + (sample.cpu_usage / 8.0) as SimTime;
        let burst_time = burst_estimate.clamp(1, 20);

        // Expected nice range is roughly [-20, 20], map to [1, 10].
        let priority = if (-20..=20).contains(&sample.nice) {
            (1 + ((sample.nice + 20) * 9) / 40).clamp(1, 10)
        } else {
            5
        };

        Self::new(
            sample.pid,
            &sample.name,
            arrival_time.max(0),
            burst_time,
            priority,
        )
    }
}

/// Raw OS process sample, as produced by an external monitor
///
/// Only the fields consumed by [`Process::from_sample`] cross this boundary;
/// any producer satisfying this shape can feed the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemProcessSample {
    pub pid: Pid,
    pub name: String,
    /// Observed CPU usage percentage in [0, 100]
    pub cpu_usage: f64,
    /// OS nice value, typically in [-20, 20]
    pub nice: i32,
}

fn truncate_name(name: &str) -> String {
    if name.chars().count() <= MAX_PROCESS_NAME {
        name.to_string()
    } else {
        name.chars().take(MAX_PROCESS_NAME).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(cpu_usage: f64, nice: i32) -> SystemProcessSample {
        SystemProcessSample {
            pid: 42,
            name: "worker".to_string(),
            cpu_usage,
            nice,
        }
    }

    #[test]
    fn test_sample_burst_estimate() {
        assert_eq!(Process::from_sample(&sample(0.0, 0), 0).burst_time, 1);
        assert_eq!(Process::from_sample(&sample(16.0, 0), 0).burst_time, 3);
        // Bounded even for a pegged CPU.
        assert_eq!(Process::from_sample(&sample(100.0, 0), 0).burst_time, 13);
        assert_eq!(Process::from_sample(&sample(1000.0, 0), 0).burst_time, 20);
    }

    #[test]
    fn test_sample_priority_mapping() {
        assert_eq!(Process::from_sample(&sample(0.0, -20), 0).priority, 1);
        assert_eq!(Process::from_sample(&sample(0.0, 0), 0).priority, 5);
        assert_eq!(Process::from_sample(&sample(0.0, 20), 0).priority, 10);
        // Out-of-range nice falls back to the middle of the band.
        assert_eq!(Process::from_sample(&sample(0.0, 99), 0).priority, 5);
    }

    #[test]
    fn test_sample_negative_arrival_clamped() {
        assert_eq!(Process::from_sample(&sample(0.0, 0), -7).arrival_time, 0);
    }

    #[test]
    fn test_name_truncation() {
        let long = "x".repeat(MAX_PROCESS_NAME + 50);
        let proc = Process::new(1, &long, 0, 1, 1);
        assert_eq!(proc.name.len(), MAX_PROCESS_NAME);
    }

    #[test]
    fn test_eligibility() {
        let proc = Process::new(1, "p", 5, 3, 1);
        assert!(!proc.is_eligible(4));
        assert!(proc.is_eligible(5));

        let mut done = Process::new(2, "q", 0, 3, 1);
        done.remaining_time = 0;
        assert!(!done.is_eligible(10));
    }
}
