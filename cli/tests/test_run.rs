//! Run Driver Tests

use ball_clock_cli::run::format_elapsed;
use ball_clock_cli::{execute, parse_args, RunOutcome};
use std::time::Duration;

#[test]
fn test_cycle_mode_output() {
    let request = parse_args(&["30"]).unwrap();
    let report = execute(&request).unwrap();

    match &report.outcome {
        RunOutcome::Cycle(cycle) => assert_eq!(cycle.days, 15),
        other => panic!("unexpected outcome: {:?}", other),
    }

    let output = report.render().unwrap();
    let mut lines = output.lines();
    assert_eq!(lines.next(), Some("30 balls cycle after 15 days."));
    assert!(lines.next().unwrap().starts_with("Completed in "));
    assert_eq!(lines.next(), None);
}

#[test]
fn test_point_mode_output() {
    let request = parse_args(&["30", "325"]).unwrap();
    let output = execute(&request).unwrap().render().unwrap();

    let first = output.lines().next().unwrap();
    assert_eq!(
        first,
        r#"{"Main":[11,5,26,18,2,30,19,8,24,10,29,20,16,21,28,1,23,14,27,9],"Min":[],"FiveMin":[22,13,25,3,7],"Hour":[6,12,17,4,15]}"#
    );
}

#[test]
fn test_point_mode_zero_minutes() {
    let request = parse_args(&["27", "0"]).unwrap();
    let report = execute(&request).unwrap();

    match report.outcome {
        RunOutcome::Snapshot(snapshot) => {
            assert_eq!(snapshot.main.len(), 27);
            assert!(snapshot.hour.is_empty());
        }
        other => panic!("unexpected outcome: {:?}", other),
    }
}

#[test]
fn test_format_elapsed_rounds_milliseconds() {
    assert_eq!(
        format_elapsed(Duration::from_micros(499)),
        "Completed in 0 milliseconds (0.000 seconds)"
    );
    assert_eq!(
        format_elapsed(Duration::from_micros(2_500_400)),
        "Completed in 2500 milliseconds (2.500 seconds)"
    );
}
