use std::io;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Process '{0}' has a negative arrival time ({1}).")]
    NegativeArrival(String, i64),
    #[error("Process '{0}' must have a burst time > 0, got {1}.")]
    NonPositiveBurst(String, i64),
    #[error("Process identifier '{0}' is used more than once.")]
    DuplicateProcess(String),
    #[error("Time quantum must be > 0, got {0}.")]
    InvalidQuantum(i64),
    #[error("Process '{0}' pushes the timeline past the largest representable time.")]
    TimeOverflow(String),
    #[error("Round Robin needs a time quantum.")]
    MissingQuantum,
    #[error("Unknown scheduling policy '{0}'.")]
    UnknownPolicy(String),
    #[error("File should contain valid utf8")]
    Utf8Error,
    #[error("Invalid workload JSON: {0}")]
    Json(String),
    #[error("Invalid entry on line {0}: '{1}'.")]
    InvalidLine(usize, String),
    #[error("Not a valid integer '{1}' on line {0}.")]
    ParseIntError(usize, String),
    #[error("IO Error: {0:?}")]
    IO(io::ErrorKind),
    #[error("Usage: cpu-scheduler <workload> [policy|all] [quantum]")]
    MissingArgument,
    #[error("Invalid argument '{0}'.")]
    InvalidArgument(String),
}

impl Error {
    /// True for errors caused by process or quantum values rejected before
    /// a simulation starts.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Error::NegativeArrival(..)
                | Error::NonPositiveBurst(..)
                | Error::DuplicateProcess(_)
                | Error::TimeOverflow(_)
                | Error::InvalidQuantum(_)
                | Error::MissingQuantum
        )
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::Json(error.to_string())
    }
}
