use crate::error::Error;
use crate::process::Process;
use crate::scheduler::Policy;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Workload {
    pub processes: Vec<Process>,
    #[serde(default)]
    pub policy: Option<Policy>,
    #[serde(default)]
    pub quantum: Option<i64>,
}

// Parse a workload file, either JSON or one process per line
pub fn read_workload(stream: &[u8]) -> Result<Workload, Error> {
    let string = match std::str::from_utf8(stream) {
        Ok(content) => content.trim(),
        Err(_) => return Err(Error::Utf8Error),
    };

    if string.starts_with('[') {
        let processes: Vec<Process> = serde_json::from_str(string)?;
        return Ok(Workload {
            processes,
            ..Default::default()
        });
    }
    if string.starts_with('{') {
        return Ok(serde_json::from_str(string)?);
    }

    let mut workload = Workload::default();

    for (i, line) in string.lines().enumerate() {
        let row = i + 1;
        // Drop comments, commas separate fields like spaces do
        let line = line.split('#').next().unwrap_or_default().replace(',', " ");
        let fields = line.split_whitespace().collect::<Vec<&str>>();

        // Ignore empty lines
        let Some(first) = fields.first() else {
            continue;
        };

        match first.to_ascii_lowercase().as_str() {
            "policy" => {
                if fields.len() != 2 {
                    return Err(Error::InvalidLine(row, line.trim().to_string()));
                }
                workload.policy = Some(Policy::from_str(fields[1])?);
            }
            "quantum" => {
                if fields.len() != 2 {
                    return Err(Error::InvalidLine(row, line.trim().to_string()));
                }
                workload.quantum = Some(parse_int(row, fields[1])?);
            }
            _ => workload.processes.push(parse_process(row, &fields)?),
        }
    }

    Ok(workload)
}

fn parse_process(row: usize, fields: &[&str]) -> Result<Process, Error> {
    if !(3..=4).contains(&fields.len()) {
        return Err(Error::InvalidLine(row, fields.join(" ")));
    }

    let process = Process::new(fields[0], parse_int(row, fields[1])?, parse_int(row, fields[2])?);
    match fields.get(3) {
        Some(priority) => Ok(process.with_priority(parse_int(row, priority)?)),
        None => Ok(process),
    }
}

fn parse_int(row: usize, token: &str) -> Result<i64, Error> {
    token
        .parse::<i64>()
        .map_err(|_| Error::ParseIntError(row, token.to_string()))
}
