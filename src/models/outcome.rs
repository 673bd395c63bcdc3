//! Simulation result model.
//!
//! A `ScheduleOutcome` bundles the per-process performance metrics with
//! the execution timeline for one run. Metrics are aligned with the
//! input order, so `metrics[i]` always describes the process submitted
//! at index `i`. Aggregates (average turnaround, average waiting) are
//! left to the presentation layer.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2:
//! Scheduling Criteria

use serde::{Deserialize, Serialize};

use super::{Process, Timeline};

/// Performance metrics for a single completed process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessMetrics {
    /// Tick at which the process finished its entire burst.
    pub completion: i64,
    /// Turnaround time: `completion - arrival`.
    pub turnaround: i64,
    /// Waiting time: `turnaround - burst`.
    pub waiting: i64,
}

impl ProcessMetrics {
    /// Derives the metrics of a process that completed at `completion`.
    pub fn at_completion(completion: i64, process: &Process) -> Self {
        let turnaround = completion - process.arrival;
        Self {
            completion,
            turnaround,
            waiting: turnaround - process.burst,
        }
    }
}

/// The complete result of one simulation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleOutcome {
    /// Per-process metrics, aligned with the submitted process order.
    pub metrics: Vec<ProcessMetrics>,
    /// CPU execution segments in chronological order.
    pub timeline: Timeline,
}

impl ScheduleOutcome {
    /// Total time span from t=0 to the completion of the last process.
    pub fn makespan(&self) -> i64 {
        self.timeline.makespan()
    }

    /// Metrics for the process submitted at `index`, if it exists.
    pub fn metrics_for(&self, index: usize) -> Option<&ProcessMetrics> {
        self.metrics.get(index)
    }
}
