use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use cpu_scheduler::parser::{read_workload, Workload};
use cpu_scheduler::{config::Config, error::Error, logger, run, Policy, Schedule};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let (config, ignored) = match Config::load() {
        Ok(config) => (config, None),
        Err(error) => (Config::default(), Some(error)),
    };
    if logger::init(config.log_level).is_err() {
        eprintln!("logger already initialised");
    }
    if let Some(error) = ignored {
        log::warn!("ignoring config.json: {}", error);
    }

    match simulate(config, env::args().skip(1).collect()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {}", error);
            ExitCode::FAILURE
        }
    }
}

async fn simulate(config: Config, args: Vec<String>) -> Result<(), Error> {
    let path = args.first().map(PathBuf::from).ok_or(Error::MissingArgument)?;
    let workload = read_workload(&read_file(path).await?)?;
    let (policies, quantum) = select(&args, &workload, &config)?;

    for policy in policies {
        let schedule = run(policy, &workload.processes, Some(quantum))?;
        print_schedule(policy, quantum, &workload, &schedule);
    }

    Ok(())
}

// Command line beats the workload file, which beats config.json
fn select(
    args: &[String],
    workload: &Workload,
    config: &Config,
) -> Result<(Vec<Policy>, i64), Error> {
    let policies = match args.get(1).map(String::as_str) {
        Some("all") => Policy::ALL.to_vec(),
        Some(name) => vec![name.parse::<Policy>()?],
        None => vec![workload
            .policy
            .or(config.scheduler)
            .unwrap_or(Policy::FCFS)],
    };
    let quantum = match args.get(2) {
        Some(token) => token
            .parse::<i64>()
            .map_err(|_| Error::InvalidArgument(token.to_string()))?,
        None => workload.quantum.unwrap_or(config.quantum),
    };
    Ok((policies, quantum))
}

async fn read_file(path: PathBuf) -> Result<Vec<u8>, Error> {
    log::info!("reading workload {}", path.display());
    tokio::fs::read(&path)
        .await
        .map_err(|error| error.kind())
        .map_err(Error::IO)
}

fn print_schedule(policy: Policy, quantum: i64, workload: &Workload, schedule: &Schedule) {
    if policy == Policy::RR {
        println!("== {} (quantum {})", policy, quantum);
    } else {
        println!("== {}", policy);
    }

    let timeline = schedule
        .intervals
        .iter()
        .map(|i| format!("{}[{}-{}]", i.id, i.start, i.end))
        .collect::<Vec<_>>()
        .join(" ");
    println!("{}", timeline);

    println!(
        "{:<8} {:>7} {:>5} {:>10} {:>10} {:>7}",
        "process", "arrival", "burst", "completion", "turnaround", "waiting"
    );
    for process in &workload.processes {
        if let Some(metrics) = schedule.metrics.get(&process.id) {
            println!(
                "{:<8} {:>7} {:>5} {:>10} {:>10} {:>7}",
                process.id,
                process.arrival,
                process.burst,
                metrics.completion,
                metrics.turnaround,
                metrics.waiting
            );
        }
    }

    println!("Average Turnaround Time: {:.2}", schedule.average_turnaround());
    println!("Average Waiting Time: {:.2}", schedule.average_waiting());
    println!("Average Response Time: {:.2}", schedule.average_response());
    println!("Idle Time: {}", schedule.idle_time());
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|arg| arg.to_string()).collect()
    }

    fn workload(policy: Option<Policy>, quantum: Option<i64>) -> Workload {
        Workload {
            processes: vec![],
            policy,
            quantum,
        }
    }

    #[test]
    fn command_line_overrides_workload_and_config() {
        let config = Config {
            scheduler: Some(Policy::SJF),
            quantum: 7,
            ..Config::default()
        };
        let selected = select(
            &args(&["jobs.txt", "srtf", "4"]),
            &workload(Some(Policy::RR), Some(3)),
            &config,
        );
        assert_eq!(selected, Ok((vec![Policy::SRTF], 4)));
    }

    #[test]
    fn workload_overrides_config() {
        let config = Config {
            scheduler: Some(Policy::SJF),
            quantum: 7,
            ..Config::default()
        };
        let selected = select(&args(&["jobs.txt"]), &workload(Some(Policy::RR), Some(3)), &config);
        assert_eq!(selected, Ok((vec![Policy::RR], 3)));

        let selected = select(&args(&["jobs.txt"]), &workload(None, None), &config);
        assert_eq!(selected, Ok((vec![Policy::SJF], 7)));
    }

    #[test]
    fn falls_back_to_fcfs_without_any_policy() {
        let config = Config {
            scheduler: None,
            ..Config::default()
        };
        let selected = select(&args(&["jobs.txt"]), &workload(None, None), &config);
        assert_eq!(selected, Ok((vec![Policy::FCFS], 2)));
    }

    #[test]
    fn all_selects_every_policy() {
        let config = Config::default();
        let selected = select(&args(&["jobs.txt", "all"]), &workload(None, None), &config);
        assert_eq!(selected, Ok((Policy::ALL.to_vec(), 2)));
    }

    #[test]
    fn bad_arguments_are_rejected() {
        let config = Config::default();
        assert_eq!(
            select(&args(&["jobs.txt", "rr", "two"]), &workload(None, None), &config),
            Err(Error::InvalidArgument("two".to_string()))
        );
        assert_eq!(
            select(&args(&["jobs.txt", "lottery"]), &workload(None, None), &config),
            Err(Error::UnknownPolicy("lottery".to_string()))
        );
    }
}
