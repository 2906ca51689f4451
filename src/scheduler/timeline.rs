/*!
 * Timeline Construction
 * Append-only builder for CPU-occupancy intervals with contiguous-slice merging
 */

use crate::core::errors::SchedulerError;
use crate::core::types::{Pid, SchedResult, SimTime};
use serde::{Deserialize, Serialize};

/// One contiguous interval of CPU occupancy by a single process
///
/// Invariant: `end_time > start_time`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub pid: Pid,
    pub process_name: String,
    pub start_time: SimTime,
    pub end_time: SimTime,
}

impl TimelineEvent {
    /// Length of the interval in time units
    #[inline]
    pub fn duration(&self) -> SimTime {
        self.end_time - self.start_time
    }
}

/// Append-only timeline builder
///
/// Contiguous events for the same process are merged on push, so quantum
/// boundaries and per-unit preemption checks that re-pick the running process
/// never surface as separate events or spurious context switches.
#[derive(Debug, Default)]
pub struct TimelineBuilder {
    events: Vec<TimelineEvent>,
}

impl TimelineBuilder {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(64),
        }
    }

    /// Record occupancy of `[start, end)` by `pid`
    ///
    /// Extends the previous event instead of appending when it belongs to the
    /// same process and ends exactly at `start`. Empty or inverted intervals
    /// are rejected.
    pub fn push(&mut self, pid: Pid, name: &str, start: SimTime, end: SimTime) -> SchedResult<()> {
        if end <= start {
            return Err(SchedulerError::InvalidSlice { start, end });
        }

        if let Some(last) = self.events.last_mut() {
            if last.pid == pid && last.end_time == start {
                last.end_time = end;
                return Ok(());
            }
        }

        self.events.push(TimelineEvent {
            pid,
            process_name: name.to_string(),
            start_time: start,
            end_time: end,
        });
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Hand the finished timeline to the caller
    pub fn finish(self) -> Vec<TimelineEvent> {
        self.events
    }
}

/// Number of transitions between distinct processes in a merged timeline
pub fn count_context_switches(timeline: &[TimelineEvent]) -> usize {
    timeline.windows(2).filter(|w| w[0].pid != w[1].pid).count()
}
