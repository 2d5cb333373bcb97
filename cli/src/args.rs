//! Argument validation
//!
//! The binary takes one or two positional integers:
//!
//! ```text
//! ball-clock <balls>            cycle-length mode
//! ball-clock <balls> <minutes>  point-in-time mode
//! ```
//!
//! Nothing is simulated until both values have been validated.

use ball_clock_core::{MAX_BALL_COUNT, MIN_BALL_COUNT};
use std::num::ParseIntError;
use thiserror::Error;

/// What the simulation should report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Days until the main reservoir returns to its starting order
    CycleLength,
    /// State of every track after exactly `minutes` minutes
    PointInTime { minutes: u64 },
}

/// A validated request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunRequest {
    pub ball_count: u32,
    pub mode: RunMode,
}

/// Input errors reported before any simulation runs
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgsError {
    #[error("improper number of arguments provided: expects 1 to 2 arguments, got {0}")]
    InvalidArgumentCount(usize),

    #[error("non integer provided: {value} : {source}")]
    NonIntegerInput {
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("the value for {name} must be between {min} and {max} inclusive: you provided {value}")]
    OutOfRangeInput {
        name: &'static str,
        min: i64,
        max: i64,
        value: i64,
    },
}

/// Usage text shown when the argument count is wrong
pub fn usage() -> String {
    format!(
        "Please choose one of the following:\n\
         \tMode 1: enter the number of balls (int) to simulate, {min} to {max}\n\
         or\n\
         \tMode 2: enter the number of balls (int) to simulate, {min} to {max}, and\n\
         \tthe number of minutes (int) to run the simulation, separated by a space",
        min = MIN_BALL_COUNT,
        max = MAX_BALL_COUNT,
    )
}

/// Validate the positional arguments (program name excluded)
pub fn parse_args<S: AsRef<str>>(args: &[S]) -> Result<RunRequest, ArgsError> {
    let (balls, minutes) = match args {
        [balls] => (balls.as_ref(), None),
        [balls, minutes] => (balls.as_ref(), Some(minutes.as_ref())),
        _ => return Err(ArgsError::InvalidArgumentCount(args.len())),
    };

    let ball_count = parse_int_between(
        balls,
        i64::from(MIN_BALL_COUNT),
        i64::from(MAX_BALL_COUNT),
        "number of balls",
    )?;

    let mode = match minutes {
        Some(minutes) => RunMode::PointInTime {
            minutes: parse_int_between(minutes, 0, i64::MAX, "minutes to simulate")? as u64,
        },
        None => RunMode::CycleLength,
    };

    Ok(RunRequest {
        // Bounded by MAX_BALL_COUNT above
        ball_count: ball_count as u32,
        mode,
    })
}

fn parse_int_between(
    input: &str,
    min: i64,
    max: i64,
    name: &'static str,
) -> Result<i64, ArgsError> {
    let value: i64 = input.parse().map_err(|source| ArgsError::NonIntegerInput {
        value: input.to_string(),
        source,
    })?;

    if value < min || value > max {
        return Err(ArgsError::OutOfRangeInput {
            name,
            min,
            max,
            value,
        });
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surrounding_whitespace_is_rejected() {
        for input in [" 30", "30 ", " 30 "] {
            let err = parse_args(&[input]).unwrap_err();
            assert!(matches!(err, ArgsError::NonIntegerInput { ref value, .. } if value == input));
        }
        let err = parse_args(&["30", " 5"]).unwrap_err();
        assert!(matches!(err, ArgsError::NonIntegerInput { .. }));
    }

    #[test]
    fn test_leading_plus_is_accepted() {
        assert_eq!(parse_args(&["+30"]).unwrap().ball_count, 30);
    }

    #[test]
    fn test_usage_names_bounds() {
        let text = usage();
        assert!(text.contains("27 to 127"));
        assert!(text.contains("Mode 2"));
    }
}
