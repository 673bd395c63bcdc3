//! The scheduling engine: policy selection and dispatch.
//!
//! Six classical uniprocessor disciplines over a shared process and
//! timeline model. Each policy is a pure function from a process set
//! (plus a quantum for Round Robin) to per-process metrics and an
//! execution timeline; [`simulate`] validates the request and
//! dispatches to the matching one.
//!
//! Determinism is part of the contract: every selection tie breaks to
//! the lowest process index, idle time advances the clock one tick at
//! a time, and identical requests always produce identical outcomes.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2015), "Modern Operating Systems", Ch. 2.4

mod nonpreemptive;
mod preemptive;
mod round_robin;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::{Process, ProcessMetrics, ScheduleOutcome};
use crate::validation::{self, ValidationError, ValidationErrorKind};

/// A CPU-scheduling discipline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Policy {
    /// First-Come-First-Served.
    Fcfs,
    /// Shortest-Job-First, non-preemptive.
    Sjf,
    /// Round Robin with a fixed time quantum.
    RoundRobin,
    /// Priority, non-preemptive (lower value = higher priority).
    Priority,
    /// Shortest-Remaining-Time-First (preemptive SJF).
    Srtf,
    /// Priority, preemptive.
    PriorityPreemptive,
}

impl Policy {
    /// Conventional display name (e.g. "SRTF", "Round Robin").
    pub fn name(&self) -> &'static str {
        match self {
            Policy::Fcfs => "FCFS",
            Policy::Sjf => "SJF",
            Policy::RoundRobin => "Round Robin",
            Policy::Priority => "Priority",
            Policy::Srtf => "SRTF",
            Policy::PriorityPreemptive => "Priority Preemptive",
        }
    }

    /// Whether the policy needs a time quantum.
    pub fn requires_quantum(&self) -> bool {
        matches!(self, Policy::RoundRobin)
    }

    /// Whether the policy may interrupt a running process.
    pub fn is_preemptive(&self) -> bool {
        matches!(
            self,
            Policy::RoundRobin | Policy::Srtf | Policy::PriorityPreemptive
        )
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Policy {
    type Err = ValidationError;

    /// Parses a policy from its display name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "fcfs" => Ok(Policy::Fcfs),
            "sjf" => Ok(Policy::Sjf),
            "round robin" | "rr" => Ok(Policy::RoundRobin),
            "priority" => Ok(Policy::Priority),
            "srtf" => Ok(Policy::Srtf),
            "priority preemptive" => Ok(Policy::PriorityPreemptive),
            _ => Err(ValidationError::new(
                ValidationErrorKind::UnknownPolicy,
                format!("Unknown scheduling policy '{s}'"),
            )),
        }
    }
}

/// Input container for one simulation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Discipline to simulate.
    pub policy: Policy,
    /// Processes to schedule; index in this sequence is process identity.
    pub processes: Vec<Process>,
    /// Time quantum, required when `policy` is Round Robin.
    pub quantum: Option<i64>,
}

impl SimulationRequest {
    /// Creates a new simulation request.
    pub fn new(policy: Policy, processes: Vec<Process>) -> Self {
        Self {
            policy,
            processes,
            quantum: None,
        }
    }

    /// Sets the time quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = Some(quantum);
        self
    }
}

/// Runs the selected policy over the requested processes.
///
/// Validates the request in full first; an invalid request yields all
/// detected violations and no partial result. The simulation itself is
/// a pure function of the request: no state survives between calls.
pub fn simulate(request: &SimulationRequest) -> Result<ScheduleOutcome, Vec<ValidationError>> {
    validation::validate_request(request)?;

    let processes = &request.processes;
    let outcome = match request.policy {
        Policy::Fcfs => nonpreemptive::fcfs(processes),
        Policy::Sjf => nonpreemptive::sjf(processes),
        Policy::Priority => nonpreemptive::priority(processes),
        Policy::RoundRobin => {
            // Already rejected by validate_request; re-checked here so
            // the dispatch has no panic path.
            let Some(quantum) = request.quantum else {
                return Err(vec![ValidationError::new(
                    ValidationErrorKind::InvalidQuantum,
                    format!("{} requires a quantum", request.policy.name()),
                )]);
            };
            round_robin::round_robin(processes, quantum)
        }
        Policy::Srtf => preemptive::srtf(processes),
        Policy::PriorityPreemptive => preemptive::priority_preemptive(processes),
    };

    Ok(outcome)
}

/// Unwraps the per-process metric slots once a policy loop finishes.
///
/// Every loop runs until each process has completed exactly once, so
/// every slot is filled by then.
fn collect_metrics(slots: Vec<Option<ProcessMetrics>>) -> Vec<ProcessMetrics> {
    slots
        .into_iter()
        .map(|m| m.expect("process completed without recorded metrics"))
        .collect()
}
