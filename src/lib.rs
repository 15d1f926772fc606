pub mod config;
pub mod error;
pub mod logger;
pub mod parser;
pub mod process;
pub mod scheduler;

pub use error::Error;
pub use process::{Interval, Metrics, Process, Schedule};
pub use scheduler::{run, Policy};
