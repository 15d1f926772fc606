use super::validate;
use crate::error::Error;
use crate::process::{Process, Schedule, Timeline};

/// Shortest Remaining Time First.
///
/// The arrived process with the least work left always holds the CPU, so a
/// new arrival with less remaining time preempts immediately. Remaining
/// times only change relative to each other when a process arrives or
/// finishes, so the choice is re-evaluated at those instants; the result is
/// the same as checking at every unit boundary. Back-to-back runs of the
/// same process become one interval.
pub fn srtf(processes: &[Process]) -> Result<Schedule, Error> {
    validate(processes)?;

    let mut remaining: Vec<i64> = processes.iter().map(|p| p.burst).collect();
    let mut unfinished = processes.len();
    let mut timeline = Timeline::new();
    let mut running: Option<usize> = None;
    let mut now = 0;

    while unfinished > 0 {
        let chosen = processes
            .iter()
            .enumerate()
            .filter(|(index, p)| p.arrival <= now && remaining[*index] > 0)
            .min_by_key(|(index, p)| (remaining[*index], p.arrival, *index))
            .map(|(index, _)| index);

        let next_arrival = processes.iter().map(|p| p.arrival).filter(|&a| a > now).min();

        let Some(index) = chosen else {
            // Unfinished work exists, so someone is still to arrive
            let next = next_arrival.unwrap_or(now + 1);
            log::trace!("idle {}..{}", now, next);
            running = None;
            now = next;
            continue;
        };

        if running != Some(index) {
            log::debug!("t={} dispatch {}", now, processes[index].id);
            running = Some(index);
        }

        let slice = match next_arrival {
            Some(arrival) => remaining[index].min(arrival - now),
            None => remaining[index],
        };
        timeline.extend(&processes[index].id, now, now + slice);
        remaining[index] -= slice;
        if remaining[index] == 0 {
            unfinished -= 1;
        }
        now += slice;
    }

    Ok(timeline.finish(processes))
}
