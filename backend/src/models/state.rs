//! Clock State
//!
//! Represents the complete physical state of a ball clock: the four tracks
//! and the number of balls in circulation.
//!
//! # Critical Invariants
//!
//! 1. **Ball Conservation**: the union of all four tracks is exactly
//!    `{1, ..., ball_count}`, each ball appearing once
//! 2. **Capacity Bound**: between minutes, no timekeeping track holds
//!    as many balls as its capacity (a full track is dumped immediately)

use crate::models::track::{Ball, Track, TrackKind};
use log::debug;

/// Outcome of one dump
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DumpRecord {
    /// Track that filled and emptied
    pub source: TrackKind,

    /// Track that received the carry ball
    pub destination: TrackKind,

    /// The ball that advanced to `destination`
    pub carry: Ball,

    /// Balls returned to the main reservoir, in the order they were appended
    pub returned: Vec<Ball>,
}

/// Time shown on the clock face
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayedTime {
    /// Hour, 1..=12
    pub hour: u32,

    /// Minute, 0..=59
    pub minute: u32,
}

/// Complete ball clock state
///
/// # Example
///
/// ```rust
/// use ball_clock_core::models::{ClockState, TrackKind};
///
/// let state = ClockState::new(30);
/// assert_eq!(state.track(TrackKind::Main).len(), 30);
/// assert!(state.track(TrackKind::Minute).is_empty());
/// assert!(state.is_initial_order());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockState {
    /// Number of balls in circulation
    ball_count: u32,

    /// Tracks indexed by [`TrackKind::index`]
    tracks: [Track; 4],
}

impl ClockState {
    /// Create the starting state: main holds `1..=ball_count`, other tracks empty
    pub fn new(ball_count: u32) -> Self {
        Self {
            ball_count,
            tracks: [
                Track::filled(ball_count),
                Track::new(),
                Track::new(),
                Track::new(),
            ],
        }
    }

    /// Number of balls in circulation
    pub fn ball_count(&self) -> u32 {
        self.ball_count
    }

    /// Get reference to a track
    pub fn track(&self, kind: TrackKind) -> &Track {
        &self.tracks[kind.index()]
    }

    /// Get mutable reference to a track
    pub fn track_mut(&mut self, kind: TrackKind) -> &mut Track {
        &mut self.tracks[kind.index()]
    }

    /// Dump `source` into `destination`, routing the rest through main
    ///
    /// Every ball except the tail of `source` is appended to main in reverse
    /// order of position. The tail ball is then appended to `destination`.
    /// When `destination` is main itself, the tail ball lands last.
    ///
    /// # Panics
    ///
    /// Panics if `source` is empty.
    pub fn dump(&mut self, source: TrackKind, destination: TrackKind) -> DumpRecord {
        let (returned, carry) = self.track_mut(source).drain_reverse_except_last();
        self.track_mut(TrackKind::Main)
            .extend(returned.iter().copied());
        self.track_mut(destination).push_back(carry);

        debug!(
            "dump {} -> {}: carry {}, {} returned to main",
            source,
            destination,
            carry,
            returned.len()
        );

        DumpRecord {
            source,
            destination,
            carry,
            returned,
        }
    }

    /// True when main holds every ball in ascending order
    pub fn is_initial_order(&self) -> bool {
        self.track(TrackKind::Main)
            .is_ordered_ascending_full(self.ball_count as usize)
    }

    /// Check ball conservation
    ///
    /// Returns true when the four tracks together hold each of
    /// `1..=ball_count` exactly once.
    pub fn conservation_holds(&self) -> bool {
        let mut seen = vec![false; self.ball_count as usize];
        for ball in self.tracks.iter().flat_map(|track| track.iter()) {
            let number = ball.number() as usize;
            if number == 0 || number > seen.len() || seen[number - 1] {
                return false;
            }
            seen[number - 1] = true;
        }
        seen.into_iter().all(|s| s)
    }

    /// Check that no timekeeping track has reached its capacity
    pub fn capacity_holds(&self) -> bool {
        TrackKind::ALL.iter().all(|&kind| match kind.capacity() {
            Some(capacity) => self.track(kind).len() < capacity,
            None => true,
        })
    }

    /// Read the time shown on the clock face
    ///
    /// The hour track always carries one fixed ball, so an empty hour
    /// track reads as one o'clock.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ball_clock_core::models::{ClockState, DisplayedTime};
    ///
    /// let state = ClockState::new(27);
    /// assert_eq!(state.displayed_time(), DisplayedTime { hour: 1, minute: 0 });
    /// ```
    pub fn displayed_time(&self) -> DisplayedTime {
        let hour = self.track(TrackKind::Hour).len() as u32 + 1;
        let minute = self.track(TrackKind::FiveMinute).len() as u32 * 5
            + self.track(TrackKind::Minute).len() as u32;
        DisplayedTime { hour, minute }
    }
}
