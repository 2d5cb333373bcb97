//! Domain models for the ball clock

pub mod state;
pub mod track;

// Re-exports
pub use state::{ClockState, DisplayedTime, DumpRecord};
pub use track::{Ball, Track, TrackKind};
