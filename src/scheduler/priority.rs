use super::{run_to_completion, validate};
use crate::error::Error;
use crate::process::{Process, Schedule};

/// Non-preemptive priority scheduling, lower value wins.
pub fn priority(processes: &[Process]) -> Result<Schedule, Error> {
    validate(processes)?;
    Ok(run_to_completion(processes, |process| process.priority))
}
