//! Time management for the simulation
//!
//! The ball clock advances in discrete minutes. 1440 minutes form a day.
//! This module keeps the elapsed-minute counter and its day conversions.

/// Minutes in one simulated day
pub const MINUTES_PER_DAY: u64 = 1440;

/// Convert a minute count to whole elapsed days (floor).
///
/// # Example
/// ```
/// use ball_clock_core::core::time::whole_days;
///
/// assert_eq!(whole_days(21_600), 15);
/// assert_eq!(whole_days(1_439), 0);
/// ```
pub fn whole_days(minutes: u64) -> u64 {
    minutes / MINUTES_PER_DAY
}

/// Counts simulated minutes since the clock was started
///
/// # Example
/// ```
/// use ball_clock_core::MinuteClock;
///
/// let mut clock = MinuteClock::new();
/// assert_eq!(clock.current_minute(), 0);
/// assert_eq!(clock.current_day(), 0);
///
/// clock.advance_minute();
/// assert_eq!(clock.current_minute(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MinuteClock {
    /// Total minutes elapsed since simulation start
    current_minute: u64,
}

impl MinuteClock {
    /// Create a clock at minute zero
    pub fn new() -> Self {
        Self { current_minute: 0 }
    }

    /// Advance time by one minute
    ///
    /// # Example
    /// ```
    /// use ball_clock_core::MinuteClock;
    ///
    /// let mut clock = MinuteClock::new();
    /// clock.advance_minute();
    /// assert_eq!(clock.current_minute(), 1);
    /// ```
    pub fn advance_minute(&mut self) {
        self.current_minute += 1;
    }

    /// Get the current minute (total minutes since start)
    pub fn current_minute(&self) -> u64 {
        self.current_minute
    }

    /// Get the number of whole days elapsed (0-indexed)
    ///
    /// # Example
    /// ```
    /// use ball_clock_core::MinuteClock;
    ///
    /// let mut clock = MinuteClock::new();
    /// for _ in 0..1440 {
    ///     clock.advance_minute();
    /// }
    /// assert_eq!(clock.current_day(), 1);
    /// ```
    pub fn current_day(&self) -> u64 {
        whole_days(self.current_minute)
    }

    /// Get the minute within the current day (0-indexed)
    ///
    /// # Example
    /// ```
    /// use ball_clock_core::MinuteClock;
    ///
    /// let mut clock = MinuteClock::new();
    /// for _ in 0..1500 {
    ///     clock.advance_minute();
    /// }
    /// assert_eq!(clock.minute_within_day(), 60);
    /// ```
    pub fn minute_within_day(&self) -> u64 {
        self.current_minute % MINUTES_PER_DAY
    }
}
