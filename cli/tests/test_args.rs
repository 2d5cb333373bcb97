//! Argument Validation Tests
//!
//! Every rejected input must be reported before a simulation starts.

use ball_clock_cli::{parse_args, ArgsError, RunMode, RunRequest};

#[test]
fn test_one_argument_selects_cycle_mode() {
    assert_eq!(
        parse_args(&["30"]).unwrap(),
        RunRequest {
            ball_count: 30,
            mode: RunMode::CycleLength,
        }
    );
}

#[test]
fn test_two_arguments_select_point_mode() {
    assert_eq!(
        parse_args(&["30", "325"]).unwrap(),
        RunRequest {
            ball_count: 30,
            mode: RunMode::PointInTime { minutes: 325 },
        }
    );
}

#[test]
fn test_zero_minutes_is_valid() {
    let request = parse_args(&["27", "0"]).unwrap();
    assert_eq!(request.mode, RunMode::PointInTime { minutes: 0 });
}

#[test]
fn test_bounds_are_inclusive() {
    assert_eq!(parse_args(&["27"]).unwrap().ball_count, 27);
    assert_eq!(parse_args(&["127"]).unwrap().ball_count, 127);
}

#[test]
fn test_wrong_argument_count() {
    let none: [&str; 0] = [];
    assert_eq!(parse_args(&none), Err(ArgsError::InvalidArgumentCount(0)));
    assert_eq!(
        parse_args(&["30", "5", "9"]),
        Err(ArgsError::InvalidArgumentCount(3))
    );
}

#[test]
fn test_ball_count_too_small() {
    let err = parse_args(&["26"]).unwrap_err();
    assert_eq!(
        err,
        ArgsError::OutOfRangeInput {
            name: "number of balls",
            min: 27,
            max: 127,
            value: 26,
        }
    );
    assert_eq!(
        err.to_string(),
        "the value for number of balls must be between 27 and 127 inclusive: you provided 26"
    );
}

#[test]
fn test_ball_count_too_large() {
    let err = parse_args(&["128", "10"]).unwrap_err();
    assert!(matches!(
        err,
        ArgsError::OutOfRangeInput {
            name: "number of balls",
            value: 128,
            ..
        }
    ));
}

#[test]
fn test_non_integer_ball_count() {
    let err = parse_args(&["abc"]).unwrap_err();
    match &err {
        ArgsError::NonIntegerInput { value, .. } => assert_eq!(value, "abc"),
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(err.to_string().starts_with("non integer provided: abc"));
}

#[test]
fn test_non_integer_minutes() {
    let err = parse_args(&["30", "1.5"]).unwrap_err();
    assert!(matches!(err, ArgsError::NonIntegerInput { ref value, .. } if value == "1.5"));
}

#[test]
fn test_negative_minutes() {
    let err = parse_args(&["30", "-1"]).unwrap_err();
    assert_eq!(
        err,
        ArgsError::OutOfRangeInput {
            name: "minutes to simulate",
            min: 0,
            max: i64::MAX,
            value: -1,
        }
    );
}

#[test]
fn test_minutes_beyond_i64_are_not_integers() {
    let err = parse_args(&["30", "9223372036854775808"]).unwrap_err();
    assert!(matches!(err, ArgsError::NonIntegerInput { .. }));
}
