//! Cycle Length Tests
//!
//! Runs the clock until the main reservoir returns to 1..=N in order
//! and checks the elapsed time against known results.

use ball_clock_core::orchestrator::{BallClock, ClockConfig, CycleReport};

fn cycle(ball_count: u32) -> CycleReport {
    BallClock::new(ClockConfig { ball_count })
        .unwrap()
        .run_until_cycle()
}

#[test]
fn test_27_balls() {
    let report = cycle(27);
    assert_eq!(report.ball_count, 27);
    assert_eq!(report.minutes, 33_120);
    assert_eq!(report.days, 23);
}

#[test]
fn test_30_balls() {
    let report = cycle(30);
    assert_eq!(report.minutes, 21_600);
    assert_eq!(report.days, 15);
}

#[test]
fn test_45_balls() {
    let report = cycle(45);
    assert_eq!(report.minutes, 544_320);
    assert_eq!(report.days, 378);
}

#[test]
fn test_neighbouring_counts() {
    assert_eq!(cycle(28).days, 76);
    assert_eq!(cycle(29).days, 102);
    assert_eq!(cycle(31).days, 85);
}

#[test]
fn test_cycle_ends_with_every_ball_in_main() {
    let mut clock = BallClock::new(ClockConfig { ball_count: 30 }).unwrap();
    clock.run_until_cycle();

    let snapshot = clock.snapshot();
    assert_eq!(snapshot.main.len(), 30);
    assert!(snapshot.minute.is_empty());
    assert!(snapshot.five_minute.is_empty());
    assert!(snapshot.hour.is_empty());
    assert!(clock.is_initial_order());
}

#[test]
fn test_second_cycle_has_same_length() {
    let mut clock = BallClock::new(ClockConfig { ball_count: 27 }).unwrap();
    let first = clock.run_until_cycle();
    let second = clock.run_until_cycle();

    // Minutes are cumulative on the same clock
    assert_eq!(second.minutes, 2 * first.minutes);
}
