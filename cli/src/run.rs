//! Run driver
//!
//! Executes a validated request against the engine and times it.

use crate::args::{RunMode, RunRequest};
use ball_clock_core::orchestrator::{BallClock, ClockConfig, CycleReport, StateSnapshot};
use ball_clock_core::SimulationError;
use log::debug;
use std::time::{Duration, Instant};

/// What a run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Cycle(CycleReport),
    Snapshot(StateSnapshot),
}

/// Outcome plus wall-clock duration
#[derive(Debug, Clone)]
pub struct RunReport {
    pub outcome: RunOutcome,
    pub elapsed: Duration,
}

impl RunReport {
    /// Render the report as printed by the binary
    pub fn render(&self) -> Result<String, SimulationError> {
        let result = match &self.outcome {
            RunOutcome::Cycle(report) => {
                format!("{} balls cycle after {} days.", report.ball_count, report.days)
            }
            RunOutcome::Snapshot(snapshot) => snapshot.to_json()?,
        };
        Ok(format!("{}\n{}", result, format_elapsed(self.elapsed)))
    }
}

/// Run the simulation described by `request`
pub fn execute(request: &RunRequest) -> Result<RunReport, SimulationError> {
    let mut clock = BallClock::new(ClockConfig {
        ball_count: request.ball_count,
    })?;
    debug!("running {:?}", request.mode);

    let started = Instant::now();
    let outcome = match request.mode {
        RunMode::CycleLength => RunOutcome::Cycle(clock.run_until_cycle()),
        RunMode::PointInTime { minutes } => RunOutcome::Snapshot(clock.run_for_minutes(minutes)),
    };
    let elapsed = started.elapsed();

    Ok(RunReport { outcome, elapsed })
}

/// Format a duration as whole milliseconds (rounded) and seconds
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use ball_clock_cli::run::format_elapsed;
///
/// assert_eq!(
///     format_elapsed(Duration::from_micros(1_234_567)),
///     "Completed in 1235 milliseconds (1.235 seconds)"
/// );
/// ```
pub fn format_elapsed(elapsed: Duration) -> String {
    let seconds = elapsed.as_secs_f64();
    let milliseconds = (seconds * 1000.0).round() as u64;
    format!(
        "Completed in {} milliseconds ({:.3} seconds)",
        milliseconds, seconds
    )
}
