//! Ball clock entry point
//!
//! Validates arguments, runs the simulation, prints the result and timing.

use ball_clock_cli::{execute, parse_args, usage, ArgsError};
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    let request = match parse_args(&args) {
        Ok(request) => request,
        Err(err) => {
            if matches!(err, ArgsError::InvalidArgumentCount(_)) {
                eprintln!("{}", usage());
            }
            eprintln!("Error: {}. Exiting", err);
            return ExitCode::FAILURE;
        }
    };

    match execute(&request).and_then(|report| report.render()) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
