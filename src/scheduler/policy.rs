/*!
 * Selection Policies
 * Candidate orderings that distinguish the scheduling algorithms
 */

use crate::process::Process;
use std::cmp::Ordering;

/// Ordering between two ready candidates; the minimum is dispatched
///
/// Ties an ordering leaves unresolved fall back to scan order: the driver
/// keeps the first minimum it encounters.
pub(super) type CandidateOrder = fn(&Process, &Process) -> Ordering;

/// First-come-first-served: arrival, then pid
pub(super) fn by_arrival(a: &Process, b: &Process) -> Ordering {
    a.arrival_time
        .cmp(&b.arrival_time)
        .then_with(|| a.pid.cmp(&b.pid))
}

/// Shortest job first: total burst, then arrival, then pid
pub(super) fn by_burst(a: &Process, b: &Process) -> Ordering {
    a.burst_time
        .cmp(&b.burst_time)
        .then_with(|| by_arrival(a, b))
}

/// Shortest remaining time first: remaining, then arrival, then pid
pub(super) fn by_remaining(a: &Process, b: &Process) -> Ordering {
    a.remaining_time
        .cmp(&b.remaining_time)
        .then_with(|| by_arrival(a, b))
}

/// Non-preemptive priority: priority value, then arrival, then pid
pub(super) fn by_priority(a: &Process, b: &Process) -> Ordering {
    a.priority.cmp(&b.priority).then_with(|| by_arrival(a, b))
}

/// Preemptive priority: priority value, then remaining, then arrival
pub(super) fn by_priority_then_remaining(a: &Process, b: &Process) -> Ordering {
    a.priority
        .cmp(&b.priority)
        .then_with(|| a.remaining_time.cmp(&b.remaining_time))
        .then_with(|| a.arrival_time.cmp(&b.arrival_time))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrival_breaks_ties_by_pid() {
        let a = Process::new(2, "a", 3, 5, 1);
        let b = Process::new(1, "b", 3, 5, 1);
        assert_eq!(by_arrival(&a, &b), Ordering::Greater);
    }

    #[test]
    fn test_burst_falls_back_to_arrival() {
        let a = Process::new(1, "a", 4, 5, 1);
        let b = Process::new(2, "b", 2, 5, 1);
        assert_eq!(by_burst(&a, &b), Ordering::Greater);

        let shorter = Process::new(3, "c", 9, 1, 1);
        assert_eq!(by_burst(&shorter, &a), Ordering::Less);
    }

    #[test]
    fn test_remaining_takes_precedence_over_arrival() {
        let mut early = Process::new(1, "a", 0, 8, 1);
        early.remaining_time = 6;
        let late = Process::new(2, "b", 5, 2, 1);
        assert_eq!(by_remaining(&late, &early), Ordering::Less);
    }

    #[test]
    fn test_preemptive_priority_uses_remaining_before_arrival() {
        let mut a = Process::new(1, "a", 0, 9, 2);
        a.remaining_time = 7;
        let mut b = Process::new(2, "b", 4, 9, 2);
        b.remaining_time = 3;
        assert_eq!(by_priority_then_remaining(&b, &a), Ordering::Less);

        let urgent = Process::new(3, "c", 8, 9, 1);
        assert_eq!(by_priority_then_remaining(&urgent, &b), Ordering::Less);
    }
}
