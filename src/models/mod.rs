//! Scheduling domain models.
//!
//! Core data types shared by every scheduling policy: the immutable
//! [`Process`] input record, the [`Timeline`] of execution segments,
//! and the [`ScheduleOutcome`] result bundle.

mod outcome;
mod process;
mod timeline;

pub use outcome::{ProcessMetrics, ScheduleOutcome};
pub use process::{Process, ProcessId};
pub use timeline::{Segment, Timeline};
