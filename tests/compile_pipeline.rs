//! End-to-end tests for the compiler: grammar acceptance, reduction into the
//! domain model, pretty rendering and training load.

use rstest::rstest;
use zwog::{compile_with_defaults, parse_workout, Block, ErrorKind, Interval, Workout};

fn steady(duration: u64, power: f64) -> Interval {
    Interval::steady(duration, power).unwrap()
}

fn ramp(duration: u64, start: f64, end: f64) -> Interval {
    Interval::ramp(duration, start, end).unwrap()
}

fn block(repeats: u32, intervals: Vec<Interval>) -> Block {
    Block::new(intervals, repeats).unwrap()
}

#[rstest]
#[case("x", ErrorKind::Syntax)]
#[case("1 @ 50% FTP", ErrorKind::Syntax)]
#[case("1h @ 50%", ErrorKind::UnexpectedEndOfInput)]
#[case("1h 50% FTP", ErrorKind::Syntax)]
#[case("1h @ 50 FTP", ErrorKind::Syntax)]
#[case(",1h @ 50% FTP", ErrorKind::Syntax)]
#[case("1h from 10 to 50 FTP", ErrorKind::Syntax)]
#[case("1h @ 10 to 50% FTP", ErrorKind::Syntax)]
#[case("1h from 10% to 50% FTP", ErrorKind::Syntax)]
#[case("2x 1h from 10 to 50% FTP, 2x 1h @ 50% FTP", ErrorKind::Syntax)]
#[case("1x from 10 to 50% FTP", ErrorKind::Syntax)]
#[case("1f from 10 to 50% FTP", ErrorKind::Syntax)]
fn test_grammar_rejections(#[case] source: &str, #[case] kind: ErrorKind) {
    let error = parse_workout(source).unwrap_err();
    assert_eq!(error.kind(), kind, "{}: {}", source, error);
    assert!(error.position().is_some());
}

#[rstest]
#[case("0s @ 50% FTP", ErrorKind::InvalidDuration)]
#[case("0.5s @ 50% FTP", ErrorKind::InvalidDuration)]
#[case("0x 1m @ 50% FTP", ErrorKind::InvalidRepeatCount)]
#[case("1.5x 1m @ 50% FTP", ErrorKind::Syntax)]
#[case("1e20s @ 50% FTP", ErrorKind::InvalidDuration)]
#[case("1e19s 1e19s @ 50% FTP", ErrorKind::InvalidDuration)]
fn test_value_rejections(#[case] source: &str, #[case] kind: ErrorKind) {
    assert_eq!(parse_workout(source).unwrap_err().kind(), kind);
}

#[test]
fn test_huge_repeated_durations_saturate_total() {
    let workout = parse_workout("2x 1e19s @ 50% FTP, 1m @ 50% FTP").unwrap();
    assert_eq!(workout.blocks()[0].intervals()[0].duration(), 10_000_000_000_000_000_000);
    assert_eq!(workout.total_duration(), u64::MAX);
}

#[test]
fn test_value_error_messages() {
    let error = parse_workout("0s @ 50% FTP").unwrap_err();
    assert_eq!(error.to_string(), "Duration values need to be strictly positive");
    assert_eq!(error.offset(), Some(0));

    let error = parse_workout("1m @ 50% FTP 0.5s @ 50% FTP").unwrap_err();
    assert_eq!(
        error.to_string(),
        "Interval duration values need to be strictly positive"
    );
    assert_eq!(error.offset(), Some(13));
}

#[rstest]
#[case("55s @ 100% FTP", "55s @ 100% FTP")]
#[case("1h60s @ 100% FTP", "1h1m @ 100% FTP")]
#[case("1hrs60sec @ 100% FTP", "1h1m @ 100% FTP")]
#[case("2min @ 100% FTP", "2m @ 100% FTP")]
#[case("60sec @ 100% FTP", "1m @ 100% FTP")]
#[case("1h1hrs1m 1min1sec  1sec @ 100% FTP", "2h2m2s @ 100% FTP")]
#[case("150s from 50 to 100%     FTP", "2m30s from 50 to 100% FTP")]
#[case(
    "150s from 50 to 100% FTP 2m @ 50% FTP",
    "2m30s from 50 to 100% FTP\n2m @ 50% FTP"
)]
#[case(
    "150s from 50 to 100% FTP, 2m @ 50% FTP",
    "2m30s from 50 to 100% FTP, 2m @ 50% FTP"
)]
#[case("3x 150s from 50 to 100% FTP", "3x 2m30s from 50 to 100% FTP")]
#[case(
    "3 x 150s from 50 to 100% FTP, 2m @ 50% FTP 5s @ 10  %   FTP  ",
    "3x 2m30s from 50 to 100% FTP, 2m @ 50% FTP\n5s @ 10% FTP"
)]
#[case("1x 1m @ 50% FTP", "1m @ 50% FTP")]
#[case("", "")]
fn test_pretty(#[case] source: &str, #[case] expected: &str) {
    let compiled = compile_with_defaults(source).unwrap();
    assert_eq!(compiled.pretty(), expected);
    assert_eq!(compiled.to_string(), expected);
}

#[test]
fn test_pretty_multiline_workout() {
    let source = "10min from 40 to 75% FTP 4x 4m @ 110% FTP, 3min @ 50% FTP \
                  2x 30s @ 150% FTP, 30s from 40 to 60% FTP, 4m30s @ 50% FTP \
                  600sec from 70 to 40% FTP";
    insta::assert_snapshot!(compile_with_defaults(source).unwrap().pretty(), @r###"
    10m from 40 to 75% FTP
    4x 4m @ 110% FTP, 3m @ 50% FTP
    2x 30s @ 150% FTP, 30s from 40 to 60% FTP, 4m30s @ 50% FTP
    10m from 70 to 40% FTP
    "###);
}

#[rstest]
#[case("60s @ 100% FTP", 100.0 / 60.0)]
#[case("60s from 0 to 100% FTP", 100.0 / 60.0 / 2.0)]
#[case("1h @ 66% FTP, 1h @ 100% FTP", 166.0)]
#[case("4x 1h @ 50% FTP", 50.0)]
#[case("2x 1h @ 50% FTP, 1h @ 60% FTP", 220.0)]
#[case("", 0.0)]
fn test_training_load(#[case] source: &str, #[case] expected: f64) {
    let load = compile_with_defaults(source).unwrap().training_load();
    assert!((load - expected).abs() < 1e-9, "{} != {}", load, expected);
}

#[rstest]
#[case("60s @ 100% FTP", vec![block(1, vec![steady(60, 100.0)])])]
#[case("4x 60s @ 100% FTP", vec![block(4, vec![steady(60, 100.0)])])]
#[case("4x 60s from 10 to 100% FTP", vec![block(4, vec![ramp(60, 10.0, 100.0)])])]
#[case(
    "4x 60s from 10 to 100% FTP, 20s @ 70% FTP",
    vec![block(4, vec![ramp(60, 10.0, 100.0), steady(20, 70.0)])]
)]
#[case(
    "4x 50s from 10 to 100% FTP 2h @ 90% FTP",
    vec![block(4, vec![ramp(50, 10.0, 100.0)]), block(1, vec![steady(7200, 90.0)])]
)]
#[case("1.5m @ 87.5% FTP", vec![block(1, vec![steady(90, 87.5)])])]
fn test_workout_structure(#[case] source: &str, #[case] blocks: Vec<Block>) {
    assert_eq!(parse_workout(source).unwrap(), Workout::new(blocks));
}

#[test]
fn test_ramp_direction_is_preserved() {
    let workout = parse_workout("10m from 80 to 40% FTP").unwrap();
    let interval = &workout.blocks()[0].intervals()[0];
    assert_eq!(interval.power(), zwog::Power::Ramp { start: 80.0, end: 40.0 });
}

#[test]
fn test_total_duration_counts_repeats() {
    let workout = parse_workout("10m @ 50% FTP 3x 1m @ 120% FTP, 2m @ 50% FTP").unwrap();
    assert_eq!(workout.total_duration(), 600 + 3 * 180);
}
