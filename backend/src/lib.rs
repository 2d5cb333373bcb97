//! Ball Clock Core - Rust Engine
//!
//! Deterministic simulation of a mechanical ball clock.
//!
//! # Architecture
//!
//! - **core**: Minute clock and day conversion
//! - **models**: Domain types (Ball, Track, ClockState)
//! - **orchestrator**: Minute loop, cycle detection, snapshots
//!
//! # Critical Invariants
//!
//! 1. Every ball is on exactly one track at all times
//! 2. No timekeeping track is full between minutes
//! 3. Identical inputs produce identical snapshots

// Module declarations
pub mod core;
pub mod models;
pub mod orchestrator;

// Re-exports for convenience
pub use self::core::time::{MinuteClock, MINUTES_PER_DAY};
pub use models::{
    state::{ClockState, DisplayedTime, DumpRecord},
    track::{Ball, Track, TrackKind},
};
pub use orchestrator::{
    BallClock, ClockConfig, CycleReport, MinuteResult, SimulationError, StateSnapshot,
    MAX_BALL_COUNT, MIN_BALL_COUNT,
};
