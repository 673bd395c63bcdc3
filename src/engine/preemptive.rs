//! Preemptive policies: SRTF and preemptive Priority.
//!
//! Both run the same tick-by-tick loop: at every tick the arrived,
//! unfinished process minimizing a selection key gets exactly one tick
//! of CPU, ties going to the lowest index. Consecutive ticks of the
//! same process coalesce into one timeline segment via
//! [`Timeline::record`], so the output is as compact as an
//! event-driven simulation would produce.

use crate::models::{Process, ProcessMetrics, ScheduleOutcome, Timeline};

use super::collect_metrics;

/// Shortest-Remaining-Time-First.
pub(crate) fn srtf(processes: &[Process]) -> ScheduleOutcome {
    tick_driven(processes, |_, remaining| remaining)
}

/// Preemptive Priority (lower value = higher priority).
pub(crate) fn priority_preemptive(processes: &[Process]) -> ScheduleOutcome {
    tick_driven(processes, |p, _| p.priority)
}

/// One-tick decision loop shared by the preemptive policies.
///
/// `key(process, remaining)` ranks eligible processes; the minimum
/// runs for the tick. The clock advances every iteration, including
/// idle ticks where nothing has arrived.
fn tick_driven(processes: &[Process], key: impl Fn(&Process, i64) -> i64) -> ScheduleOutcome {
    let mut timeline = Timeline::new();
    let mut metrics = vec![None; processes.len()];
    let mut remaining: Vec<i64> = processes.iter().map(|p| p.burst).collect();
    let mut completed = 0;
    let mut clock = 0;

    while completed < processes.len() {
        let next = processes
            .iter()
            .enumerate()
            .filter(|(i, p)| remaining[*i] > 0 && p.arrived_by(clock))
            .min_by_key(|&(i, p)| key(p, remaining[i]))
            .map(|(i, _)| i);

        if let Some(i) = next {
            timeline.record(i, clock, clock + 1);
            remaining[i] -= 1;
            if remaining[i] == 0 {
                metrics[i] = Some(ProcessMetrics::at_completion(clock + 1, &processes[i]));
                completed += 1;
            }
        }

        clock += 1;
    }

    ScheduleOutcome {
        metrics: collect_metrics(metrics),
        timeline,
    }
}
