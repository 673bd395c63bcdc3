//! Execution timeline model.
//!
//! A timeline is the ordered sequence of CPU execution segments produced
//! by one simulation run. Adjacent ticks of the same process are merged
//! into a single segment as they are recorded, so a tick-by-tick
//! preemptive simulation yields the same compact timeline as an
//! event-driven one. Gaps between segments are idle CPU time and are
//! not recorded.

use serde::{Deserialize, Serialize};

use super::ProcessId;

/// A contiguous run of one process on the CPU over `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Process that held the CPU.
    pub process: ProcessId,
    /// First tick of the run (inclusive).
    pub start: i64,
    /// Tick after the last tick of the run (exclusive, > `start`).
    pub end: i64,
}

impl Segment {
    /// Creates a new segment.
    pub fn new(process: ProcessId, start: i64, end: i64) -> Self {
        debug_assert!(end > start, "segment [{start}, {end}) must be non-empty");
        Self {
            process,
            start,
            end,
        }
    }

    /// Duration of the segment in ticks.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}

/// Ordered execution segments covering one simulation run.
///
/// Segments are appended in non-decreasing `start` order by the engine
/// and never overlap: the simulated CPU runs one process at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    segments: Vec<Segment>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an execution interval for a process.
    ///
    /// If the last segment belongs to the same process and ends exactly
    /// where this interval starts, it is extended in place; otherwise a
    /// new segment is appended. This merging rule makes the timeline
    /// independent of the tick granularity the engine simulated at.
    pub fn record(&mut self, process: ProcessId, start: i64, end: i64) {
        debug_assert!(end > start, "interval [{start}, {end}) must be non-empty");

        if let Some(last) = self.segments.last_mut() {
            debug_assert!(start >= last.end, "intervals must be recorded in order");
            if last.process == process && last.end == start {
                last.end = end;
                return;
            }
        }

        self.segments.push(Segment::new(process, start, end));
    }

    /// The recorded segments, in execution order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Makespan: end of the last segment, or 0 for an empty timeline.
    pub fn makespan(&self) -> i64 {
        self.segments.last().map(|s| s.end).unwrap_or(0)
    }

    /// Total CPU time attributed to a process across all its segments.
    pub fn busy_time(&self, process: ProcessId) -> i64 {
        self.segments
            .iter()
            .filter(|s| s.process == process)
            .map(Segment::duration)
            .sum()
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether the timeline has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}
