//! Tests for MinuteClock

use ball_clock_core::core::time::whole_days;
use ball_clock_core::{MinuteClock, MINUTES_PER_DAY};

#[test]
fn test_minute_clock_new() {
    let clock = MinuteClock::new();
    assert_eq!(clock.current_minute(), 0);
    assert_eq!(clock.current_day(), 0);
}

#[test]
fn test_advance_minute() {
    let mut clock = MinuteClock::new();

    clock.advance_minute();
    assert_eq!(clock.current_minute(), 1);
    assert_eq!(clock.current_day(), 0);

    clock.advance_minute();
    assert_eq!(clock.current_minute(), 2);
}

#[test]
fn test_day_boundary() {
    let mut clock = MinuteClock::new();

    // Advance to the last minute of day 0
    for _ in 0..(MINUTES_PER_DAY - 1) {
        clock.advance_minute();
    }
    assert_eq!(clock.current_day(), 0);
    assert_eq!(clock.minute_within_day(), MINUTES_PER_DAY - 1);

    // Cross into day 1
    clock.advance_minute();
    assert_eq!(clock.current_day(), 1);
    assert_eq!(clock.minute_within_day(), 0);
}

#[test]
fn test_minute_within_day_wraps() {
    let mut clock = MinuteClock::new();
    for _ in 0..(MINUTES_PER_DAY + 325) {
        clock.advance_minute();
    }
    assert_eq!(clock.current_day(), 1);
    assert_eq!(clock.minute_within_day(), 325);
}

#[test]
fn test_whole_days_discards_partial_day() {
    // Hours and minutes are dropped, never rounded up
    assert_eq!(whole_days(2 * MINUTES_PER_DAY + MINUTES_PER_DAY - 1), 2);
    assert_eq!(whole_days(544_320), 378);
}
