/*!
 * Scheduler Types
 * The closed algorithm selector, parsed and rejected at the boundary
 */

use crate::core::errors::SchedulerError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Scheduling algorithm selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// First-come-first-served, non-preemptive
    Fcfs,
    /// Shortest job first, non-preemptive
    Sjf,
    /// Shortest remaining time first, preemptive
    Srtf,
    /// Round robin with a fixed time quantum
    RoundRobin,
    /// Lowest priority value first, non-preemptive
    PriorityNonPreemptive,
    /// Lowest priority value first, preemptive
    PriorityPreemptive,
}

impl Algorithm {
    /// Every selectable algorithm, in dispatch order
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Fcfs,
        Algorithm::Sjf,
        Algorithm::Srtf,
        Algorithm::RoundRobin,
        Algorithm::PriorityNonPreemptive,
        Algorithm::PriorityPreemptive,
    ];

    /// Parse from string representation
    pub fn from_str(s: &str) -> Result<Self, SchedulerError> {
        match s.to_lowercase().as_str() {
            "fcfs" | "first_come_first_served" => Ok(Self::Fcfs),
            "sjf" | "shortest_job_first" => Ok(Self::Sjf),
            "srtf" | "shortest_remaining_time_first" => Ok(Self::Srtf),
            "round_robin" | "roundrobin" | "rr" => Ok(Self::RoundRobin),
            "priority_np" | "priority" => Ok(Self::PriorityNonPreemptive),
            "priority_p" | "priority_preemptive" => Ok(Self::PriorityPreemptive),
            _ => Err(SchedulerError::UnknownAlgorithm(s.to_string())),
        }
    }

    /// Canonical string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fcfs => "fcfs",
            Self::Sjf => "sjf",
            Self::Srtf => "srtf",
            Self::RoundRobin => "round_robin",
            Self::PriorityNonPreemptive => "priority_np",
            Self::PriorityPreemptive => "priority_p",
        }
    }

    /// Whether the policy re-evaluates its choice every simulated time unit
    pub const fn is_preemptive(&self) -> bool {
        matches!(
            self,
            Self::Srtf | Self::RoundRobin | Self::PriorityPreemptive
        )
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Algorithm {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Algorithm {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_str(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_algorithm_parsing() {
        assert_eq!(Algorithm::from_str("fcfs").unwrap(), Algorithm::Fcfs);
        assert_eq!(Algorithm::from_str("SJF").unwrap(), Algorithm::Sjf);
        assert_eq!(Algorithm::from_str("rr").unwrap(), Algorithm::RoundRobin);
        assert_eq!(
            Algorithm::from_str("priority_p").unwrap(),
            Algorithm::PriorityPreemptive
        );
        assert!(matches!(
            Algorithm::from_str("lottery"),
            Err(SchedulerError::UnknownAlgorithm(_))
        ));
    }

    #[test]
    fn test_string_round_trip() {
        for algorithm in Algorithm::ALL {
            assert_eq!(Algorithm::from_str(algorithm.as_str()).unwrap(), algorithm);
        }
    }

    #[test]
    fn test_preemption_flags() {
        assert!(!Algorithm::Fcfs.is_preemptive());
        assert!(!Algorithm::Sjf.is_preemptive());
        assert!(!Algorithm::PriorityNonPreemptive.is_preemptive());
        assert!(Algorithm::Srtf.is_preemptive());
        assert!(Algorithm::RoundRobin.is_preemptive());
        assert!(Algorithm::PriorityPreemptive.is_preemptive());
    }
}
