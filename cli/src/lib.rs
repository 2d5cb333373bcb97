//! Ball Clock CLI
//!
//! Argument validation and the run driver for the `ball-clock` binary.

pub mod args;
pub mod run;

pub use args::{parse_args, usage, ArgsError, RunMode, RunRequest};
pub use run::{execute, RunOutcome, RunReport};
