//! Process model.
//!
//! A process is the unit of work handed to the scheduling engine:
//! an arrival time, a CPU burst, and an optional priority. Processes
//! are identified by their position in the caller's sequence — the
//! engine never reorders the input it reports against.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 3

use serde::{Deserialize, Serialize};

/// Identity of a process: its 0-based index in the submitted sequence.
///
/// Also serves as the tie-break key everywhere two processes compare
/// equal under a policy's selection criterion (lower index wins).
pub type ProcessId = usize;

/// A process to be scheduled.
///
/// Immutable during a simulation run. All per-run bookkeeping
/// (remaining burst, completion) lives inside the engine, never here.
///
/// # Time Representation
/// All times are integer ticks relative to a simulation epoch (t=0).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Tick at which the process becomes eligible to run (≥ 0).
    pub arrival: i64,
    /// Total CPU time required (≥ 1).
    pub burst: i64,
    /// Scheduling priority (≥ 0, lower value = higher priority).
    /// Meaningful only under the priority policies; defaults to 0.
    pub priority: i64,
}

impl Process {
    /// Creates a process with the given arrival and burst times.
    pub fn new(arrival: i64, burst: i64) -> Self {
        Self {
            arrival,
            burst,
            priority: 0,
        }
    }

    /// Sets the priority (lower value = higher priority).
    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = priority;
        self
    }

    /// Whether the process has arrived by tick `now`.
    #[inline]
    pub fn arrived_by(&self, now: i64) -> bool {
        self.arrival <= now
    }
}
