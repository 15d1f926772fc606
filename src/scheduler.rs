pub mod fcfs;
pub mod priority;
pub mod round_robin;
pub mod sjf;
pub mod srtf;

pub use fcfs::fcfs;
pub use priority::priority;
pub use round_robin::round_robin;
pub use sjf::sjf;
pub use srtf::srtf;

use crate::error::Error;
use crate::process::{Process, Schedule, Timeline};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum Policy {
    FCFS,
    SJF,
    SRTF,
    RR,
    Priority,
}

impl Policy {
    pub const ALL: [Policy; 5] = [
        Policy::FCFS,
        Policy::SJF,
        Policy::SRTF,
        Policy::RR,
        Policy::Priority,
    ];

    pub fn is_preemptive(&self) -> bool {
        matches!(self, Policy::SRTF | Policy::RR)
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Policy::FCFS => write!(f, "FCFS"),
            Policy::SJF => write!(f, "SJF"),
            Policy::SRTF => write!(f, "SRTF"),
            Policy::RR => write!(f, "RR"),
            Policy::Priority => write!(f, "Priority"),
        }
    }
}

impl FromStr for Policy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fcfs" => Ok(Policy::FCFS),
            "sjf" => Ok(Policy::SJF),
            "srtf" | "srt" => Ok(Policy::SRTF),
            "rr" | "round-robin" | "roundrobin" => Ok(Policy::RR),
            "priority" | "prio" => Ok(Policy::Priority),
            _ => Err(Error::UnknownPolicy(s.to_string())),
        }
    }
}

/// Simulates `processes` under `policy`.
///
/// `quantum` is only read for Round Robin, where it is required.
pub fn run(
    policy: Policy,
    processes: &[Process],
    quantum: Option<i64>,
) -> Result<Schedule, Error> {
    log::debug!("running {} over {} processes", policy, processes.len());
    match policy {
        Policy::FCFS => fcfs(processes),
        Policy::SJF => sjf(processes),
        Policy::SRTF => srtf(processes),
        Policy::RR => round_robin(processes, quantum.ok_or(Error::MissingQuantum)?),
        Policy::Priority => priority(processes),
    }
}

pub(crate) fn validate(processes: &[Process]) -> Result<(), Error> {
    let mut seen = HashSet::new();
    for process in processes {
        if !seen.insert(process.id.as_str()) {
            return Err(Error::DuplicateProcess(process.id.clone()));
        }
        if process.arrival < 0 {
            return Err(Error::NegativeArrival(process.id.clone(), process.arrival));
        }
        if process.burst <= 0 {
            return Err(Error::NonPositiveBurst(process.id.clone(), process.burst));
        }
    }

    // No schedule can end later than the last arrival plus every burst, so
    // once this fits in an i64 the simulations can add times freely
    let mut horizon = processes.iter().map(|p| p.arrival).max().unwrap_or(0);
    for process in processes {
        horizon = horizon
            .checked_add(process.burst)
            .ok_or_else(|| Error::TimeOverflow(process.id.clone()))?;
    }
    Ok(())
}

// Non-preemptive dispatcher shared by SJF and Priority: whenever the CPU is
// free, run the arrived process with the smallest `key` to completion. Ties
// go to the earliest arrival, then to input order.
pub(crate) fn run_to_completion<K, F>(processes: &[Process], key: F) -> Schedule
where
    K: Ord,
    F: Fn(&Process) -> K,
{
    let mut pending: Vec<(usize, &Process)> = processes.iter().enumerate().collect();
    let mut timeline = Timeline::new();
    let mut now = 0;

    while !pending.is_empty() {
        let chosen = pending
            .iter()
            .enumerate()
            .filter(|(_, (_, p))| p.arrival <= now)
            .min_by_key(|(_, (index, p))| (key(*p), p.arrival, *index))
            .map(|(slot, _)| slot);

        let Some(slot) = chosen else {
            // CPU idles until the next arrival
            let next = pending.iter().map(|(_, p)| p.arrival).min().unwrap_or(now);
            log::trace!("idle {}..{}", now, next);
            now = next;
            continue;
        };

        let (_, process) = pending.remove(slot);
        log::debug!("t={} dispatch {}", now, process.id);
        timeline.push(&process.id, now, now + process.burst);
        now += process.burst;
    }

    timeline.finish(processes)
}
