//! Snapshot - point-in-time view of the four tracks
//!
//! A snapshot serializes to a field-labeled record in a fixed order:
//!
//! ```text
//! {"Main":[...],"Min":[...],"FiveMin":[...],"Hour":[...]}
//! ```
//!
//! # Critical Invariants
//!
//! - **Determinism**: identical ball count and minute count produce
//!   byte-identical JSON and therefore identical hashes
//! - **Ball Conservation**: every ball appears in exactly one track

use crate::models::state::ClockState;
use crate::models::track::{Ball, TrackKind};
use crate::orchestrator::SimulationError;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::BTreeSet;

// ============================================================================
// Snapshot Structure
// ============================================================================

/// Contents of all four tracks, front to back
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateSnapshot {
    #[serde(rename = "Main")]
    pub main: Vec<Ball>,

    #[serde(rename = "Min")]
    pub minute: Vec<Ball>,

    #[serde(rename = "FiveMin")]
    pub five_minute: Vec<Ball>,

    #[serde(rename = "Hour")]
    pub hour: Vec<Ball>,
}

impl From<&ClockState> for StateSnapshot {
    fn from(state: &ClockState) -> Self {
        StateSnapshot {
            main: state.track(TrackKind::Main).to_vec(),
            minute: state.track(TrackKind::Minute).to_vec(),
            five_minute: state.track(TrackKind::FiveMinute).to_vec(),
            hour: state.track(TrackKind::Hour).to_vec(),
        }
    }
}

impl StateSnapshot {
    /// Get the contents of one track
    pub fn track(&self, kind: TrackKind) -> &[Ball] {
        match kind {
            TrackKind::Main => &self.main,
            TrackKind::Minute => &self.minute,
            TrackKind::FiveMinute => &self.five_minute,
            TrackKind::Hour => &self.hour,
        }
    }

    /// Serialize as compact JSON
    pub fn to_json(&self) -> Result<String, SimulationError> {
        serde_json::to_string(self).map_err(|e| {
            SimulationError::Serialization(format!("Snapshot serialization failed: {}", e))
        })
    }

    /// Parse a snapshot from JSON
    pub fn from_json(json: &str) -> Result<Self, SimulationError> {
        serde_json::from_str(json).map_err(|e| {
            SimulationError::Serialization(format!("Snapshot deserialization failed: {}", e))
        })
    }

    /// SHA-256 hex digest of the JSON form
    ///
    /// Field order is fixed by the struct, so the JSON is canonical.
    pub fn snapshot_hash(&self) -> Result<String, SimulationError> {
        let json = self.to_json()?;

        let mut hasher = Sha256::new();
        hasher.update(json.as_bytes());
        let result = hasher.finalize();

        Ok(format!("{:x}", result))
    }
}

// ============================================================================
// Validation Functions
// ============================================================================

/// Validate snapshot integrity
///
/// Checks critical invariants:
/// - Ball conservation (each of `1..=ball_count` exactly once)
/// - Capacity bounds on the timekeeping tracks
pub fn validate_snapshot(snapshot: &StateSnapshot, ball_count: u32) -> Result<(), SimulationError> {
    // 1. Capacity bounds
    for kind in TrackKind::ALL {
        let Some(capacity) = kind.capacity() else {
            continue;
        };
        let len = snapshot.track(kind).len();
        if len >= capacity {
            return Err(SimulationError::StateValidation(format!(
                "{} track holds {} balls, capacity is {}",
                kind, len, capacity
            )));
        }
    }

    // 2. Ball conservation
    let mut seen = BTreeSet::new();
    for kind in TrackKind::ALL {
        for ball in snapshot.track(kind) {
            if ball.number() == 0 || ball.number() > ball_count {
                return Err(SimulationError::StateValidation(format!(
                    "Ball {} outside 1..={}",
                    ball, ball_count
                )));
            }
            if !seen.insert(*ball) {
                return Err(SimulationError::StateValidation(format!(
                    "Ball {} appears more than once",
                    ball
                )));
            }
        }
    }

    if seen.len() != ball_count as usize {
        return Err(SimulationError::StateValidation(format!(
            "Ball conservation violated: expected {}, found {}",
            ball_count,
            seen.len()
        )));
    }

    Ok(())
}
