//! Non-preemptive policies: FCFS, SJF, and Priority.
//!
//! FCFS is a straight sort-and-run. SJF and Priority share one
//! event-driven loop over a virtual clock: at each decision point the
//! eligible process minimizing a selection key runs to completion
//! atomically, and the clock idles forward one tick at a time when no
//! process has arrived yet.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3

use crate::models::{Process, ProcessMetrics, ScheduleOutcome, Timeline};

use super::collect_metrics;

/// First-Come-First-Served.
///
/// Processes run back-to-back in arrival order, ties broken by
/// submission index (stable sort). A start clamped to `max(clock,
/// arrival)` is how idle gaps appear in the timeline.
pub(crate) fn fcfs(processes: &[Process]) -> ScheduleOutcome {
    let mut order: Vec<usize> = (0..processes.len()).collect();
    order.sort_by_key(|&i| processes[i].arrival);

    let mut timeline = Timeline::new();
    let mut metrics = vec![None; processes.len()];
    let mut clock = 0;

    for i in order {
        let p = &processes[i];
        let start = clock.max(p.arrival);
        let end = start + p.burst;
        timeline.record(i, start, end);
        metrics[i] = Some(ProcessMetrics::at_completion(end, p));
        clock = end;
    }

    ScheduleOutcome {
        metrics: collect_metrics(metrics),
        timeline,
    }
}

/// Shortest-Job-First (non-preemptive).
pub(crate) fn sjf(processes: &[Process]) -> ScheduleOutcome {
    run_to_completion(processes, |p| p.burst)
}

/// Priority (non-preemptive, lower value = higher priority).
pub(crate) fn priority(processes: &[Process]) -> ScheduleOutcome {
    run_to_completion(processes, |p| p.priority)
}

/// Event-driven loop shared by SJF and Priority.
///
/// At each decision point, the not-yet-done process with the smallest
/// `key` among those arrived by `clock` runs its full burst. Ties go to
/// the lowest index (first minimum wins). With nobody eligible the
/// clock advances one idle tick.
fn run_to_completion(processes: &[Process], key: impl Fn(&Process) -> i64) -> ScheduleOutcome {
    let mut timeline = Timeline::new();
    let mut metrics = vec![None; processes.len()];
    let mut done = vec![false; processes.len()];
    let mut completed = 0;
    let mut clock = 0;

    while completed < processes.len() {
        let next = processes
            .iter()
            .enumerate()
            .filter(|(i, p)| !done[*i] && p.arrived_by(clock))
            .min_by_key(|&(_, p)| key(p))
            .map(|(i, _)| i);

        match next {
            Some(i) => {
                let p = &processes[i];
                let start = clock;
                clock += p.burst;
                timeline.record(i, start, clock);
                metrics[i] = Some(ProcessMetrics::at_completion(clock, p));
                done[i] = true;
                completed += 1;
            }
            None => clock += 1,
        }
    }

    ScheduleOutcome {
        metrics: collect_metrics(metrics),
        timeline,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Segment;

    #[test]
    fn test_fcfs_back_to_back() {
        let ps = vec![Process::new(0, 4), Process::new(1, 3)];
        let out = fcfs(&ps);
        assert_eq!(
            out.timeline.segments(),
            &[Segment::new(0, 0, 4), Segment::new(1, 4, 7)]
        );
        assert_eq!(out.metrics[0].completion, 4);
        assert_eq!(out.metrics[1].completion, 7);
        assert_eq!(out.metrics[1].turnaround, 6);
        assert_eq!(out.metrics[1].waiting, 3);
    }

    #[test]
    fn test_fcfs_idle_gap() {
        let ps = vec![Process::new(0, 2), Process::new(5, 1)];
        let out = fcfs(&ps);
        // CPU idle over [2, 5); no segment recorded for the gap.
        assert_eq!(
            out.timeline.segments(),
            &[Segment::new(0, 0, 2), Segment::new(1, 5, 6)]
        );
    }

    #[test]
    fn test_fcfs_tie_breaks_by_index() {
        let ps = vec![Process::new(3, 1), Process::new(3, 1), Process::new(0, 1)];
        let out = fcfs(&ps);
        let order: Vec<usize> = out.timeline.segments().iter().map(|s| s.process).collect();
        assert_eq!(order, vec![2, 0, 1]);
    }

    #[test]
    fn test_sjf_no_preemption_mid_run() {
        // Shorter jobs arriving mid-run never interrupt the incumbent.
        let ps = vec![Process::new(0, 6), Process::new(2, 2), Process::new(4, 1)];
        let out = sjf(&ps);
        assert_eq!(out.metrics[0].completion, 6);
        assert_eq!(out.metrics[1].completion, 9);
        assert_eq!(out.metrics[2].completion, 7);
        // P2 (burst 1) beats P1 (burst 2) at t=6, but arrives later.
        let order: Vec<usize> = out.timeline.segments().iter().map(|s| s.process).collect();
        assert_eq!(order, vec![0, 2, 1]);
    }

    #[test]
    fn test_sjf_idles_until_first_arrival() {
        let ps = vec![Process::new(3, 2)];
        let out = sjf(&ps);
        assert_eq!(out.timeline.segments(), &[Segment::new(0, 3, 5)]);
        assert_eq!(out.metrics[0].waiting, 0);
    }

    #[test]
    fn test_sjf_tie_breaks_by_index() {
        let ps = vec![Process::new(0, 3), Process::new(0, 3)];
        let out = sjf(&ps);
        assert_eq!(out.timeline.segments()[0].process, 0);
        assert_eq!(out.timeline.segments()[1].process, 1);
    }

    #[test]
    fn test_priority_lower_value_runs_first() {
        let ps = vec![
            Process::new(0, 2).with_priority(2),
            Process::new(0, 2).with_priority(1),
        ];
        let out = priority(&ps);
        assert_eq!(out.timeline.segments()[0].process, 1);
        assert_eq!(out.metrics[1].completion, 2);
        assert_eq!(out.metrics[0].completion, 4);
    }

    #[test]
    fn test_priority_only_considers_arrived() {
        // The highest-priority process hasn't arrived at t=0, so the
        // lower-priority one starts and keeps the CPU (non-preemptive).
        let ps = vec![
            Process::new(0, 5).with_priority(5),
            Process::new(1, 2).with_priority(0),
        ];
        let out = priority(&ps);
        assert_eq!(out.timeline.segments()[0].process, 0);
        assert_eq!(out.metrics[0].completion, 5);
        assert_eq!(out.metrics[1].completion, 7);
    }
}
