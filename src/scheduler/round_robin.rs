use super::validate;
use crate::error::Error;
use crate::process::{Process, Schedule, Timeline};
use std::collections::VecDeque;

/// Round Robin with a fixed time quantum.
///
/// Processes join the FIFO ready queue once the clock reaches their arrival
/// time. After each slice, processes that arrived during it are queued
/// before the preempted process goes back to the tail.
pub fn round_robin(processes: &[Process], quantum: i64) -> Result<Schedule, Error> {
    if quantum <= 0 {
        return Err(Error::InvalidQuantum(quantum));
    }
    validate(processes)?;

    let mut arrivals: Vec<usize> = (0..processes.len()).collect();
    // Stable, so simultaneous arrivals are admitted in input order
    arrivals.sort_by_key(|&index| processes[index].arrival);
    let mut arrivals = arrivals.into_iter().peekable();

    let mut remaining: Vec<i64> = processes.iter().map(|p| p.burst).collect();
    let mut ready: VecDeque<usize> = VecDeque::new();
    let mut timeline = Timeline::new();
    let mut now = 0;

    loop {
        while let Some(index) = arrivals.next_if(|&index| processes[index].arrival <= now) {
            ready.push_back(index);
        }

        let Some(index) = ready.pop_front() else {
            match arrivals.peek() {
                Some(&next) => {
                    log::trace!("idle {}..{}", now, processes[next].arrival);
                    now = processes[next].arrival;
                    continue;
                }
                None => break,
            }
        };

        let slice = remaining[index].min(quantum);
        log::debug!("t={} dispatch {} for {}", now, processes[index].id, slice);
        timeline.push(&processes[index].id, now, now + slice);
        remaining[index] -= slice;
        now += slice;

        while let Some(arrived) = arrivals.next_if(|&next| processes[next].arrival <= now) {
            ready.push_back(arrived);
        }
        if remaining[index] > 0 {
            ready.push_back(index);
        }
    }

    Ok(timeline.finish(processes))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans(schedule: &Schedule) -> Vec<(&str, i64, i64)> {
        schedule
            .intervals
            .iter()
            .map(|i| (i.id.as_str(), i.start, i.end))
            .collect()
    }

    #[test]
    fn slices_alternate_between_ready_processes() {
        let schedule =
            round_robin(&[Process::new("P1", 0, 5), Process::new("P2", 1, 3)], 2).unwrap();
        assert_eq!(
            spans(&schedule),
            vec![
                ("P1", 0, 2),
                ("P2", 2, 4),
                ("P1", 4, 6),
                ("P2", 6, 7),
                ("P1", 7, 8)
            ]
        );
        assert_eq!(schedule.metrics["P1"].completion, 8);
        assert_eq!(schedule.metrics["P2"].waiting, 3);
    }

    #[test]
    fn arrivals_queue_ahead_of_preempted_process() {
        let schedule = round_robin(
            &[
                Process::new("A", 0, 4),
                Process::new("B", 1, 2),
                Process::new("C", 2, 2),
            ],
            2,
        )
        .unwrap();
        // B and C both arrive during A's first slice
        assert_eq!(
            spans(&schedule),
            vec![("A", 0, 2), ("B", 2, 4), ("C", 4, 6), ("A", 6, 8)]
        );
    }

    #[test]
    fn burst_equal_to_quantum_finishes_in_one_slice() {
        let schedule =
            round_robin(&[Process::new("A", 0, 3), Process::new("B", 0, 1)], 3).unwrap();
        assert_eq!(spans(&schedule), vec![("A", 0, 3), ("B", 3, 4)]);
    }

    #[test]
    fn lone_process_keeps_getting_slices() {
        let schedule = round_robin(&[Process::new("A", 0, 5)], 2).unwrap();
        assert_eq!(
            spans(&schedule),
            vec![("A", 0, 2), ("A", 2, 4), ("A", 4, 5)]
        );
    }

    #[test]
    fn empty_queue_jumps_to_next_arrival() {
        let schedule =
            round_robin(&[Process::new("A", 3, 1), Process::new("B", 6, 2)], 4).unwrap();
        assert_eq!(spans(&schedule), vec![("A", 3, 4), ("B", 6, 8)]);
    }

    #[test]
    fn quantum_must_be_positive() {
        assert_eq!(
            round_robin(&[Process::new("A", 0, 1)], 0),
            Err(Error::InvalidQuantum(0))
        );
        assert_eq!(round_robin(&[], -1), Err(Error::InvalidQuantum(-1)));
    }
}
