//! Ball Clock Engine
//!
//! Main simulation loop. Each call to [`BallClock::advance_one_minute`]
//! performs one complete minute:
//!
//! ```text
//! 1. Move the front ball of Main to the back of Minute
//! 2. If Minute is full, dump it (carry -> FiveMinute)
//! 3. If FiveMinute is now full, dump it (carry -> Hour)
//! 4. If Hour is now full, dump it (carry -> Main)
//! 5. Advance the minute clock
//! ```
//!
//! Dumps cascade inside the same call; callers only ever observe the
//! state between minutes.
//!
//! # Example
//!
//! ```rust
//! use ball_clock_core::orchestrator::{BallClock, ClockConfig};
//!
//! let mut clock = BallClock::new(ClockConfig { ball_count: 30 }).unwrap();
//!
//! for _ in 0..5 {
//!     clock.advance_one_minute();
//! }
//! assert_eq!(clock.elapsed_minutes(), 5);
//!
//! let report = BallClock::new(ClockConfig { ball_count: 30 })
//!     .unwrap()
//!     .run_until_cycle();
//! assert_eq!(report.days, 15);
//! ```

use crate::core::time::{whole_days, MinuteClock};
use crate::models::state::{ClockState, DumpRecord};
use crate::models::track::TrackKind;
use crate::orchestrator::checkpoint::StateSnapshot;
use log::{debug, info};
use thiserror::Error;

/// Fewest balls a clock can run with
pub const MIN_BALL_COUNT: u32 = 27;

/// Most balls a clock can run with
pub const MAX_BALL_COUNT: u32 = 127;

// ============================================================================
// Configuration Types
// ============================================================================

/// Clock configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockConfig {
    /// Number of balls in circulation, `MIN_BALL_COUNT..=MAX_BALL_COUNT`
    pub ball_count: u32,
}

impl ClockConfig {
    /// Check the ball count against the physical bounds
    pub fn validate(&self) -> Result<(), SimulationError> {
        if !(MIN_BALL_COUNT..=MAX_BALL_COUNT).contains(&self.ball_count) {
            return Err(SimulationError::InvalidConfig {
                value: self.ball_count,
                min: MIN_BALL_COUNT,
                max: MAX_BALL_COUNT,
            });
        }
        Ok(())
    }
}

/// One tier of the dump cascade
#[derive(Debug, Clone, Copy)]
struct Tier {
    source: TrackKind,
    next: TrackKind,
}

impl Tier {
    const fn new(source: TrackKind, next: TrackKind) -> Self {
        Self { source, next }
    }

    /// Capacity of the source track. Main is never a cascade source.
    fn capacity(self) -> usize {
        match self.source.capacity() {
            Some(capacity) => capacity,
            None => unreachable!("{} is not a timekeeping track", self.source),
        }
    }
}

/// Dump cascade, lowest tier first
const CASCADE: [Tier; 3] = [
    Tier::new(TrackKind::Minute, TrackKind::FiveMinute),
    Tier::new(TrackKind::FiveMinute, TrackKind::Hour),
    Tier::new(TrackKind::Hour, TrackKind::Main),
];

// ============================================================================
// Results and Errors
// ============================================================================

/// Result of a single minute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinuteResult {
    /// Minute number just completed (1-based)
    pub minute: u64,

    /// Dumps performed this minute, in cascade order
    pub dumps: Vec<DumpRecord>,
}

/// Result of a cycle-length run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleReport {
    /// Number of balls simulated
    pub ball_count: u32,

    /// Minutes until main returned to its starting order
    pub minutes: u64,

    /// Whole days in `minutes` (floor)
    pub days: u64,
}

/// Simulation error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimulationError {
    /// Ball count outside the supported range
    #[error("the value for number of balls must be between {min} and {max} inclusive: got {value}")]
    InvalidConfig { value: u32, min: u32, max: u32 },

    /// Snapshot could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Snapshot failed an invariant check
    #[error("State validation error: {0}")]
    StateValidation(String),
}

// ============================================================================
// Engine
// ============================================================================

/// Ball clock simulation engine
#[derive(Debug, Clone)]
pub struct BallClock {
    state: ClockState,
    clock: MinuteClock,
}

impl BallClock {
    /// Create a clock with main holding `1..=ball_count` in order
    ///
    /// # Returns
    ///
    /// * `Ok(BallClock)` - Clock at minute zero
    /// * `Err(SimulationError::InvalidConfig)` - Ball count out of range
    pub fn new(config: ClockConfig) -> Result<Self, SimulationError> {
        config.validate()?;
        debug!("initializing ball clock with {} balls", config.ball_count);

        Ok(Self {
            state: ClockState::new(config.ball_count),
            clock: MinuteClock::new(),
        })
    }

    /// Simulate one minute, including any cascade of dumps
    pub fn advance_one_minute(&mut self) -> MinuteResult {
        let ball = self.state.track_mut(TrackKind::Main).pop_front();
        self.state.track_mut(TrackKind::Minute).push_back(ball);

        let mut dumps = Vec::new();
        for tier in &CASCADE {
            // A tier can only fill if the tier below it just dumped
            if !self.state.track(tier.source).is_full(tier.capacity()) {
                break;
            }
            dumps.push(self.state.dump(tier.source, tier.next));
        }

        self.clock.advance_minute();

        if dumps.len() == CASCADE.len() {
            debug!(
                "minute {}: hour track emptied (day {}, minute {} of day)",
                self.clock.current_minute(),
                self.clock.current_day(),
                self.clock.minute_within_day()
            );
        }

        MinuteResult {
            minute: self.clock.current_minute(),
            dumps,
        }
    }

    /// True when main is back to `1..=ball_count` in order
    pub fn is_initial_order(&self) -> bool {
        self.state.is_initial_order()
    }

    /// Minutes simulated so far
    pub fn elapsed_minutes(&self) -> u64 {
        self.clock.current_minute()
    }

    /// Get the current state
    pub fn state(&self) -> &ClockState {
        &self.state
    }

    /// Number of balls in circulation
    pub fn ball_count(&self) -> u32 {
        self.state.ball_count()
    }

    /// Capture the four tracks, front to back
    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot::from(&self.state)
    }

    /// Run until main returns to its starting order
    ///
    /// Always simulates at least one minute before checking. For a
    /// valid ball count the run terminates, but it may take a long time.
    pub fn run_until_cycle(&mut self) -> CycleReport {
        loop {
            self.advance_one_minute();
            if self.is_initial_order() {
                break;
            }
        }

        let minutes = self.elapsed_minutes();
        let report = CycleReport {
            ball_count: self.ball_count(),
            minutes,
            days: whole_days(minutes),
        };
        info!(
            "{} balls returned to initial order after {} minutes",
            report.ball_count, report.minutes
        );
        report
    }

    /// Simulate exactly `minutes` minutes and capture the result
    pub fn run_for_minutes(&mut self, minutes: u64) -> StateSnapshot {
        for _ in 0..minutes {
            self.advance_one_minute();
        }
        info!(
            "simulated {} minutes with {} balls",
            minutes,
            self.ball_count()
        );
        self.snapshot()
    }
}
