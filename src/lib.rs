//! Deterministic CPU-scheduling simulation engine.
//!
//! Computes, for a fixed set of processes, the execution timeline and
//! per-process performance metrics (completion, turnaround, waiting)
//! under one of six classical uniprocessor disciplines: FCFS, SJF,
//! Round Robin, non-preemptive Priority, SRTF, and preemptive
//! Priority.
//!
//! # Modules
//!
//! - **`models`**: Domain types — [`Process`], [`Segment`], [`Timeline`],
//!   [`ProcessMetrics`], [`ScheduleOutcome`]
//! - **`engine`**: The six policy algorithms and the [`simulate`] dispatcher
//! - **`validation`**: Request integrity checks (process count, time
//!   domains, quantum)
//!
//! # Determinism
//!
//! Every run is a pure function of its request. Selection ties break
//! to the lowest process index, and idle CPU time is represented as
//! gaps between timeline segments, never as segments of their own.
//! Identical requests produce identical outcomes.
//!
//! # Example
//!
//! ```
//! use cpu_sched::{simulate, Policy, Process, SimulationRequest};
//!
//! let request = SimulationRequest::new(
//!     Policy::Fcfs,
//!     vec![Process::new(0, 4), Process::new(1, 3)],
//! );
//! let outcome = simulate(&request).unwrap();
//!
//! assert_eq!(outcome.metrics[0].completion, 4);
//! assert_eq!(outcome.metrics[1].waiting, 3);
//! assert_eq!(outcome.makespan(), 7);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2015), "Modern Operating Systems", Ch. 2.4

pub mod engine;
pub mod models;
pub mod validation;

pub use engine::{simulate, Policy, SimulationRequest};
pub use models::{Process, ProcessId, ProcessMetrics, ScheduleOutcome, Segment, Timeline};
pub use validation::{validate_request, ValidationError, ValidationErrorKind, ValidationResult};
