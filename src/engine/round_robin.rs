//! Round Robin with a fixed time quantum.
//!
//! A FIFO ready queue of process indices, fed by one-shot arrival
//! flags. The defining fairness rule: after a process uses its slice,
//! anything that arrived during the slice is enqueued *before* the
//! preempted incumbent goes back to the tail. Reversing those two
//! steps produces a different (wrong) schedule.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.4

use std::collections::VecDeque;

use crate::models::{Process, ProcessMetrics, ScheduleOutcome, Timeline};

use super::collect_metrics;

pub(crate) fn round_robin(processes: &[Process], quantum: i64) -> ScheduleOutcome {
    let mut timeline = Timeline::new();
    let mut metrics = vec![None; processes.len()];
    let mut remaining: Vec<i64> = processes.iter().map(|p| p.burst).collect();
    let mut enqueued = vec![false; processes.len()];
    let mut queue: VecDeque<usize> = VecDeque::new();
    let mut completed = 0;
    let mut clock = 0;

    while completed < processes.len() {
        enqueue_arrivals(processes, clock, &mut enqueued, &mut queue);

        let Some(i) = queue.pop_front() else {
            clock += 1;
            continue;
        };

        let slice = quantum.min(remaining[i]);
        let start = clock;
        clock += slice;
        remaining[i] -= slice;
        timeline.record(i, start, clock);

        // Newcomers that arrived during the slice line up ahead of the
        // incumbent being requeued.
        enqueue_arrivals(processes, clock, &mut enqueued, &mut queue);

        if remaining[i] == 0 {
            metrics[i] = Some(ProcessMetrics::at_completion(clock, &processes[i]));
            completed += 1;
        } else {
            queue.push_back(i);
        }
    }

    ScheduleOutcome {
        metrics: collect_metrics(metrics),
        timeline,
    }
}

/// Appends every process arrived by `now` that was never enqueued,
/// in ascending index order.
fn enqueue_arrivals(
    processes: &[Process],
    now: i64,
    enqueued: &mut [bool],
    queue: &mut VecDeque<usize>,
) {
    for (i, p) in processes.iter().enumerate() {
        if !enqueued[i] && p.arrived_by(now) {
            queue.push_back(i);
            enqueued[i] = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Segment;

    #[test]
    fn test_quantum_slicing() {
        let ps = vec![Process::new(0, 5), Process::new(1, 3)];
        let out = round_robin(&ps, 2);
        assert_eq!(
            out.timeline.segments(),
            &[
                Segment::new(0, 0, 2),
                Segment::new(1, 2, 4),
                Segment::new(0, 4, 6),
                Segment::new(1, 6, 7),
                Segment::new(0, 7, 8),
            ]
        );
        assert_eq!(out.metrics[0].completion, 8);
        assert_eq!(out.metrics[1].completion, 7);
    }

    #[test]
    fn test_newcomer_enqueued_before_incumbent() {
        // P1 arrives at t=2, exactly when P0's first slice ends. P1
        // must get the CPU before P0 returns.
        let ps = vec![Process::new(0, 4), Process::new(2, 2)];
        let out = round_robin(&ps, 2);
        assert_eq!(
            out.timeline.segments(),
            &[
                Segment::new(0, 0, 2),
                Segment::new(1, 2, 4),
                Segment::new(0, 4, 6),
            ]
        );
    }

    #[test]
    fn test_large_quantum_degenerates_to_fcfs() {
        let ps = vec![Process::new(0, 4), Process::new(1, 3), Process::new(2, 5)];
        let rr = round_robin(&ps, 10);
        let fcfs = super::super::nonpreemptive::fcfs(&ps);
        assert_eq!(rr.timeline, fcfs.timeline);
        assert_eq!(rr.metrics, fcfs.metrics);
    }

    #[test]
    fn test_single_process_merges_slices() {
        // Back-to-back slices of the lone process coalesce into one segment.
        let ps = vec![Process::new(0, 5)];
        let out = round_robin(&ps, 2);
        assert_eq!(out.timeline.segments(), &[Segment::new(0, 0, 5)]);
    }

    #[test]
    fn test_idle_until_arrival() {
        let ps = vec![Process::new(4, 2)];
        let out = round_robin(&ps, 3);
        assert_eq!(out.timeline.segments(), &[Segment::new(0, 4, 6)]);
        assert_eq!(out.metrics[0].waiting, 0);
    }

    #[test]
    fn test_quantum_one() {
        let ps = vec![Process::new(0, 2), Process::new(0, 2)];
        let out = round_robin(&ps, 1);
        assert_eq!(
            out.timeline.segments(),
            &[
                Segment::new(0, 0, 1),
                Segment::new(1, 1, 2),
                Segment::new(0, 2, 3),
                Segment::new(1, 3, 4),
            ]
        );
        assert_eq!(out.metrics[0].completion, 3);
        assert_eq!(out.metrics[1].completion, 4);
    }
}
