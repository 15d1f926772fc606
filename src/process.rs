use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Process {
    pub id: String,
    pub arrival: i64,
    pub burst: i64,
    // Lower value runs first, only read by the Priority policy
    #[serde(default)]
    pub priority: i64,
}

impl Process {
    pub fn new(id: impl Into<String>, arrival: i64, burst: i64) -> Self {
        Self {
            id: id.into(),
            arrival,
            burst,
            priority: 0,
        }
    }

    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = priority;
        self
    }
}

/// One uninterrupted stretch of CPU time given to a single process.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Interval {
    pub id: String,
    pub start: i64,
    pub end: i64,
}

impl Interval {
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct Metrics {
    pub start: i64,
    pub completion: i64,
    pub turnaround: i64,
    pub waiting: i64,
    pub response: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Schedule {
    pub intervals: Vec<Interval>,
    pub metrics: BTreeMap<String, Metrics>,
}

impl Schedule {
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    pub fn average_turnaround(&self) -> f64 {
        self.average(|m| m.turnaround)
    }

    pub fn average_waiting(&self) -> f64 {
        self.average(|m| m.waiting)
    }

    pub fn average_response(&self) -> f64 {
        self.average(|m| m.response)
    }

    /// End of the last interval, 0 when nothing ran.
    pub fn makespan(&self) -> i64 {
        self.intervals.last().map_or(0, |interval| interval.end)
    }

    /// Time between intervals during which the CPU had nothing to run.
    /// Idle time before the first interval is included.
    pub fn idle_time(&self) -> i64 {
        let busy: i64 = self.intervals.iter().map(Interval::duration).sum();
        self.makespan() - busy
    }

    fn average(&self, field: impl Fn(&Metrics) -> i64) -> f64 {
        if self.metrics.is_empty() {
            return 0.0;
        }
        let total: f64 = self.metrics.values().map(|m| field(m) as f64).sum();
        total / self.metrics.len() as f64
    }
}

// Collects intervals in dispatch order and derives metrics once the
// simulation is over
#[derive(Debug, Default)]
pub(crate) struct Timeline {
    intervals: Vec<Interval>,
}

impl Timeline {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, id: &str, start: i64, end: i64) {
        debug_assert!(end > start, "empty interval for {id}");
        self.intervals.push(Interval {
            id: id.to_string(),
            start,
            end,
        });
    }

    /// Like `push`, but grows the last interval when the same process keeps
    /// the CPU without a gap.
    pub(crate) fn extend(&mut self, id: &str, start: i64, end: i64) {
        if let Some(last) = self.intervals.last_mut() {
            if last.id == id && last.end == start {
                last.end = end;
                return;
            }
        }
        self.push(id, start, end);
    }

    pub(crate) fn finish(self, processes: &[Process]) -> Schedule {
        let mut metrics = BTreeMap::new();

        for process in processes {
            let mut own = self.intervals.iter().filter(|i| i.id == process.id);
            let Some(first) = own.next() else {
                continue;
            };
            let completion = own.last().unwrap_or(first).end;
            let turnaround = completion - process.arrival;

            metrics.insert(
                process.id.clone(),
                Metrics {
                    start: first.start,
                    completion,
                    turnaround,
                    waiting: turnaround - process.burst,
                    response: first.start - process.arrival,
                },
            );
        }

        Schedule {
            intervals: self.intervals,
            metrics,
        }
    }
}
