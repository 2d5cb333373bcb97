//! Tracks - ordered holding areas for balls
//!
//! A ball clock has four tracks: the main reservoir and three timekeeping
//! tiers (minute, five-minute, hour). Every track is a FIFO sequence:
//! the front is the next ball to act, the back is the most recently added.
//!
//! Tracks do not enforce their own capacity. The engine checks
//! [`Track::is_full`] after each insertion and dumps the track when it fills.
//!
//! # Example
//!
//! ```rust
//! use ball_clock_core::models::{Ball, Track};
//!
//! let mut track = Track::new();
//! track.push_back(Ball::new(3));
//! track.push_back(Ball::new(7));
//! assert_eq!(track.len(), 2);
//! assert_eq!(track.pop_front(), Ball::new(3));
//! ```

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;

/// A numbered ball. Identity only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ball(u32);

impl Ball {
    /// Create a ball with the given number
    pub const fn new(number: u32) -> Self {
        Self(number)
    }

    /// Get the ball's number
    pub const fn number(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Ball {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Balls the minute track accepts before it dumps
pub const MINUTE_CAPACITY: usize = 5;

/// Balls the five-minute track accepts before it dumps
pub const FIVE_MINUTE_CAPACITY: usize = 12;

/// Balls the hour track accepts before it dumps
pub const HOUR_CAPACITY: usize = 12;

/// The four tracks of a ball clock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrackKind {
    /// Reservoir holding every ball not resident on a timekeeping track
    Main,
    /// Minute track
    Minute,
    /// Five-minute track
    FiveMinute,
    /// Hour track
    Hour,
}

impl TrackKind {
    /// All tracks, in reporting order
    pub const ALL: [TrackKind; 4] = [
        TrackKind::Main,
        TrackKind::Minute,
        TrackKind::FiveMinute,
        TrackKind::Hour,
    ];

    /// Position of this track in [`TrackKind::ALL`]
    pub const fn index(self) -> usize {
        match self {
            TrackKind::Main => 0,
            TrackKind::Minute => 1,
            TrackKind::FiveMinute => 2,
            TrackKind::Hour => 3,
        }
    }

    /// Number of balls that makes this track dump
    ///
    /// Main has no capacity; it holds whatever the other tracks do not.
    pub const fn capacity(self) -> Option<usize> {
        match self {
            TrackKind::Main => None,
            TrackKind::Minute => Some(MINUTE_CAPACITY),
            TrackKind::FiveMinute => Some(FIVE_MINUTE_CAPACITY),
            TrackKind::Hour => Some(HOUR_CAPACITY),
        }
    }

    /// External label used in snapshots
    pub const fn label(self) -> &'static str {
        match self {
            TrackKind::Main => "Main",
            TrackKind::Minute => "Min",
            TrackKind::FiveMinute => "FiveMin",
            TrackKind::Hour => "Hour",
        }
    }
}

impl fmt::Display for TrackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ordered FIFO sequence of balls
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Track {
    balls: VecDeque<Ball>,
}

impl Track {
    /// Create an empty track
    pub fn new() -> Self {
        Self {
            balls: VecDeque::new(),
        }
    }

    /// Create a track holding balls `1..=count` in ascending order
    ///
    /// # Example
    ///
    /// ```rust
    /// use ball_clock_core::models::{Ball, Track};
    ///
    /// let track = Track::filled(3);
    /// assert_eq!(track.to_vec(), vec![Ball::new(1), Ball::new(2), Ball::new(3)]);
    /// ```
    pub fn filled(count: u32) -> Self {
        (1..=count).map(Ball::new).collect()
    }

    /// Append a ball to the tail
    pub fn push_back(&mut self, ball: Ball) {
        self.balls.push_back(ball);
    }

    /// Remove and return the head ball
    ///
    /// # Panics
    ///
    /// Panics if the track is empty. The engine never pops an empty track,
    /// so reaching this is a defect in the transition rule.
    pub fn pop_front(&mut self) -> Ball {
        match self.balls.pop_front() {
            Some(ball) => ball,
            None => panic!("invariant violation: pop_front on an empty track"),
        }
    }

    /// Number of balls on the track
    pub fn len(&self) -> usize {
        self.balls.len()
    }

    /// True when no balls are on the track
    pub fn is_empty(&self) -> bool {
        self.balls.is_empty()
    }

    /// True when the track holds exactly `capacity` balls
    pub fn is_full(&self, capacity: usize) -> bool {
        self.balls.len() == capacity
    }

    /// True when the track holds `expected_len` balls in strictly ascending order
    ///
    /// Used to detect that the main reservoir has returned to its starting order.
    pub fn is_ordered_ascending_full(&self, expected_len: usize) -> bool {
        self.balls.len() == expected_len
            && self
                .balls
                .iter()
                .zip(self.balls.iter().skip(1))
                .all(|(a, b)| a < b)
    }

    /// Empty the track the way a tipping channel does
    ///
    /// Returns every ball except the tail in reverse order of position
    /// (the ball just before the tail first, the head last), plus the tail
    /// ball separately.
    ///
    /// # Panics
    ///
    /// Panics if the track is empty.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ball_clock_core::models::{Ball, Track};
    ///
    /// let mut track: Track = [4, 9, 2].into_iter().map(Ball::new).collect();
    /// let (moved, last) = track.drain_reverse_except_last();
    /// assert_eq!(moved, vec![Ball::new(9), Ball::new(4)]);
    /// assert_eq!(last, Ball::new(2));
    /// assert!(track.is_empty());
    /// ```
    pub fn drain_reverse_except_last(&mut self) -> (Vec<Ball>, Ball) {
        let last = match self.balls.pop_back() {
            Some(ball) => ball,
            None => panic!("invariant violation: dump of an empty track"),
        };
        let moved = self.balls.drain(..).rev().collect();
        (moved, last)
    }

    /// Iterate front to back
    pub fn iter(&self) -> impl Iterator<Item = &Ball> + '_ {
        self.balls.iter()
    }

    /// Copy the contents, front to back
    pub fn to_vec(&self) -> Vec<Ball> {
        self.balls.iter().copied().collect()
    }
}

impl FromIterator<Ball> for Track {
    fn from_iter<I: IntoIterator<Item = Ball>>(iter: I) -> Self {
        Self {
            balls: iter.into_iter().collect(),
        }
    }
}

impl Extend<Ball> for Track {
    fn extend<I: IntoIterator<Item = Ball>>(&mut self, iter: I) {
        self.balls.extend(iter);
    }
}
