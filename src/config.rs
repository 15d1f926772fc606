use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::env;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;
use crate::error::Error;
use crate::scheduler::Policy;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub scheduler: Option<Policy>,
    pub quantum: i64,
    pub log_level: LevelFilter,
}

impl Config {
    /// Reads `config.json` from the working directory.
    pub fn load() -> Result<Self, Error> {
        let mut path = env::current_dir()
            .map_err(|error| error.kind())
            .map_err(Error::IO)?;
        path.push("config.json");
        Self::load_from(&path)
    }

    /// A missing file gives the default config, a file that can't be parsed
    /// is an error so the caller can report it once logging is up.
    pub fn load_from(path: &Path) -> Result<Self, Error> {
        match File::open(path) {
            Ok(file) => Ok(serde_json::from_reader(BufReader::new(file))?),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(Config::default()),
            Err(error) => Err(Error::IO(error.kind())),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scheduler: Some(Policy::FCFS),
            quantum: 2,
            log_level: LevelFilter::Info,
        }
    }
}
