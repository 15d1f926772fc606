use super::{run_to_completion, validate};
use crate::error::Error;
use crate::process::{Process, Schedule};

/// Shortest Job First, non-preemptive. Picks the arrived process with the
/// smallest burst each time the CPU frees up.
pub fn sjf(processes: &[Process]) -> Result<Schedule, Error> {
    validate(processes)?;
    Ok(run_to_completion(processes, |process| process.burst))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(schedule: &Schedule) -> Vec<(&str, i64, i64)> {
        schedule
            .intervals
            .iter()
            .map(|i| (i.id.as_str(), i.start, i.end))
            .collect()
    }

    #[test]
    fn running_job_is_never_interrupted() {
        let schedule = sjf(&[
            Process::new("P1", 0, 7),
            Process::new("P2", 2, 4),
            Process::new("P3", 4, 1),
            Process::new("P4", 5, 4),
        ])
        .unwrap();
        // P2 and P4 tie on burst, P2 arrived first
        assert_eq!(
            order(&schedule),
            vec![("P1", 0, 7), ("P3", 7, 8), ("P2", 8, 12), ("P4", 12, 16)]
        );
        assert_eq!(schedule.metrics["P4"].waiting, 7);
    }

    #[test]
    fn equal_bursts_and_arrivals_keep_input_order() {
        let schedule = sjf(&[
            Process::new("X", 0, 5),
            Process::new("B", 1, 2),
            Process::new("A", 1, 2),
        ])
        .unwrap();
        assert_eq!(
            order(&schedule),
            vec![("X", 0, 5), ("B", 5, 7), ("A", 7, 9)]
        );
    }

    #[test]
    fn waits_for_first_arrival() {
        let schedule = sjf(&[Process::new("P1", 4, 3), Process::new("P2", 5, 1)]).unwrap();
        assert_eq!(order(&schedule), vec![("P1", 4, 7), ("P2", 7, 8)]);
    }
}
