use super::validate;
use crate::error::Error;
use crate::process::{Process, Schedule, Timeline};

/// First-Come-First-Served: processes run to completion in arrival order,
/// simultaneous arrivals keep their input order.
pub fn fcfs(processes: &[Process]) -> Result<Schedule, Error> {
    validate(processes)?;

    let mut queue: Vec<&Process> = processes.iter().collect();
    // Stable, so ties stay in input order
    queue.sort_by_key(|process| process.arrival);

    let mut timeline = Timeline::new();
    let mut cpu_free: i64 = 0;
    for process in queue {
        let start = cpu_free.max(process.arrival);
        if start > cpu_free {
            log::trace!("idle {}..{}", cpu_free, start);
        }
        log::debug!("t={} dispatch {}", start, process.id);
        timeline.push(&process.id, start, start + process.burst);
        cpu_free = start + process.burst;
    }

    Ok(timeline.finish(processes))
}
