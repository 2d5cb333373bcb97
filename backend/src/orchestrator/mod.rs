//! Orchestrator - main simulation loop
//!
//! Drives the ball clock minute by minute and captures snapshots.
//!
//! See `engine.rs` for the transition rule.

pub mod checkpoint;
pub mod engine;

// Re-export main types for convenience
pub use engine::{
    BallClock, ClockConfig, CycleReport, MinuteResult, SimulationError, MAX_BALL_COUNT,
    MIN_BALL_COUNT,
};

// Re-export checkpoint types
pub use checkpoint::{validate_snapshot, StateSnapshot};
