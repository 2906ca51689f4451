/*!
 * Simulation Driver
 * The shared scheduling loop: idle skip, dispatch, preemption tick, finalize
 */

use super::policy::{self, CandidateOrder};
use super::timeline::{TimelineBuilder, TimelineEvent};
use crate::core::types::{SchedResult, SimTime};
use crate::process::Process;
use log::debug;
use std::collections::VecDeque;

/// One in-flight simulation over a process set
///
/// The driver owns all bookkeeping for a single run: the clock, the timeline
/// under construction, and the completion count. Zero-burst processes are
/// completed at their arrival time during construction, before any policy
/// loop runs.
pub(super) struct Simulation<'a> {
    procs: &'a mut [Process],
    timeline: TimelineBuilder,
    now: SimTime,
    finished: usize,
}

impl<'a> Simulation<'a> {
    pub fn new(procs: &'a mut [Process]) -> Self {
        let mut sim = Self {
            now: initial_time(procs),
            timeline: TimelineBuilder::new(),
            finished: 0,
            procs,
        };
        sim.complete_zero_burst();
        sim
    }

    /// Non-preemptive loop: each dispatched process runs to completion
    pub fn run_to_completion(mut self, order: CandidateOrder) -> SchedResult<Vec<TimelineEvent>> {
        while self.finished < self.procs.len() {
            let Some(idx) = self.pick(order) else {
                if !self.skip_to_next_arrival() {
                    break;
                }
                continue;
            };

            self.mark_dispatched(idx);
            let start = self.now;
            let end = start + self.procs[idx].burst_time;
            self.timeline
                .push(self.procs[idx].pid, &self.procs[idx].name, start, end)?;
            self.now = end;
            self.finalize(idx, end);
        }
        Ok(self.timeline.finish())
    }

    /// Preemptive loop: the policy is re-evaluated every simulated time unit
    ///
    /// Each tick emits a unit slice; the builder merges consecutive slices of
    /// the same process back into one event, so only genuine preemptions show
    /// up as event boundaries.
    pub fn run_preemptive(mut self, order: CandidateOrder) -> SchedResult<Vec<TimelineEvent>> {
        while self.finished < self.procs.len() {
            let Some(idx) = self.pick(order) else {
                if !self.skip_to_next_arrival() {
                    break;
                }
                continue;
            };

            self.mark_dispatched(idx);
            let start = self.now;
            self.timeline
                .push(self.procs[idx].pid, &self.procs[idx].name, start, start + 1)?;
            self.procs[idx].remaining_time -= 1;
            self.now += 1;

            if self.procs[idx].remaining_time == 0 {
                self.finalize(idx, self.now);
            }
        }
        Ok(self.timeline.finish())
    }

    /// Round-robin loop over a FIFO ready queue
    ///
    /// Each dispatch runs min(remaining, quantum) time units. Processes that
    /// arrive during a slice are admitted before the preempted process
    /// re-enqueues; a slice that exactly exhausts the remaining time
    /// finalizes the process instead of re-enqueueing it.
    pub fn run_round_robin(mut self, quantum: SimTime) -> SchedResult<Vec<TimelineEvent>> {
        let quantum = quantum.max(1);

        let mut arrival_order: Vec<usize> = (0..self.procs.len()).collect();
        arrival_order.sort_by(|&a, &b| policy::by_arrival(&self.procs[a], &self.procs[b]));

        let mut ready: VecDeque<usize> = VecDeque::with_capacity(self.procs.len());
        let mut queued = vec![false; self.procs.len()];
        let mut next_arrival = 0;

        self.admit_arrivals(&arrival_order, &mut next_arrival, &mut ready, &mut queued);

        while self.finished < self.procs.len() {
            let Some(idx) = ready.pop_front() else {
                if next_arrival >= arrival_order.len() {
                    break;
                }
                self.now = self.procs[arrival_order[next_arrival]].arrival_time;
                debug!("ready queue drained, clock jumps to {}", self.now);
                self.admit_arrivals(&arrival_order, &mut next_arrival, &mut ready, &mut queued);
                continue;
            };
            queued[idx] = false;

            if self.procs[idx].remaining_time <= 0 {
                continue;
            }
            if self.now < self.procs[idx].arrival_time {
                self.now = self.procs[idx].arrival_time;
            }

            self.mark_dispatched(idx);
            let slice = self.procs[idx].remaining_time.min(quantum);
            let start = self.now;
            self.timeline
                .push(self.procs[idx].pid, &self.procs[idx].name, start, start + slice)?;
            self.now = start + slice;
            self.procs[idx].remaining_time -= slice;

            self.admit_arrivals(&arrival_order, &mut next_arrival, &mut ready, &mut queued);

            if self.procs[idx].remaining_time > 0 {
                ready.push_back(idx);
                queued[idx] = true;
            } else {
                self.finalize(idx, self.now);
            }
        }
        Ok(self.timeline.finish())
    }

    /// Enqueue every not-yet-admitted incomplete process that has arrived
    fn admit_arrivals(
        &mut self,
        arrival_order: &[usize],
        next_arrival: &mut usize,
        ready: &mut VecDeque<usize>,
        queued: &mut [bool],
    ) {
        while *next_arrival < arrival_order.len() {
            let idx = arrival_order[*next_arrival];
            if self.procs[idx].arrival_time > self.now {
                break;
            }
            *next_arrival += 1;
            if !queued[idx] && self.procs[idx].remaining_time > 0 {
                ready.push_back(idx);
                queued[idx] = true;
            }
        }
    }

    /// Pick the minimal eligible candidate under `order`; first index wins ties
    fn pick(&self, order: CandidateOrder) -> Option<usize> {
        let now = self.now;
        (0..self.procs.len())
            .filter(|&i| self.procs[i].is_eligible(now))
            .min_by(|&a, &b| order(&self.procs[a], &self.procs[b]))
    }

    /// Jump the clock to the next arrival among incomplete processes
    ///
    /// Idle spans produce no timeline events. Returns false when no further
    /// arrivals exist and the loop should terminate.
    fn skip_to_next_arrival(&mut self) -> bool {
        let next = self
            .procs
            .iter()
            .filter(|p| p.remaining_time > 0 && p.arrival_time > self.now)
            .map(|p| p.arrival_time)
            .min();

        match next {
            Some(t) => {
                debug!("cpu idle from {} to {}", self.now, t);
                self.now = t;
                true
            }
            None => false,
        }
    }

    /// Record first dispatch exactly once
    fn mark_dispatched(&mut self, idx: usize) {
        let proc = &mut self.procs[idx];
        if proc.first_run_time.is_none() {
            proc.first_run_time = Some(self.now);
            proc.response_time = Some(self.now - proc.arrival_time);
        }
    }

    /// Close out a process at `completion`
    fn finalize(&mut self, idx: usize, completion: SimTime) {
        let proc = &mut self.procs[idx];
        proc.remaining_time = 0;
        proc.completion_time = completion;
        proc.turnaround_time = completion - proc.arrival_time;
        // Floor absorbs integer-granularity rounding when turnaround
        // underruns the burst.
        proc.waiting_time = (proc.turnaround_time - proc.burst_time).max(0);
        if proc.response_time.is_none() {
            proc.response_time = Some(0);
        }
        self.finished += 1;
    }

    /// Complete zero-burst processes instantly at their arrival time
    fn complete_zero_burst(&mut self) {
        for idx in 0..self.procs.len() {
            if self.procs[idx].burst_time == 0 {
                let arrival = self.procs[idx].arrival_time;
                self.procs[idx].first_run_time = Some(arrival);
                self.procs[idx].response_time = Some(0);
                self.finalize(idx, arrival);
            }
        }
    }
}

/// Earliest arrival among processes that still need CPU time, or 0
fn initial_time(procs: &[Process]) -> SimTime {
    procs
        .iter()
        .filter(|p| p.remaining_time > 0)
        .map(|p| p.arrival_time)
        .min()
        .unwrap_or(0)
}
