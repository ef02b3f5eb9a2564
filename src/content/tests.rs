//! Content domain: tests for tuning parsing.

use std::path::Path;

use super::{TuningFile, load_tuning, parse_tuning};
use crate::combat::AttackTuning;
use crate::movement::MovementTuning;

const SHIPPED: &str = include_str!("../../assets/data/tuning.ron");

#[test]
fn test_shipped_tuning_matches_defaults() {
    let parsed = parse_tuning("tuning.ron", SHIPPED).expect("shipped tuning parses");
    assert_eq!(parsed, TuningFile::default());
}

#[test]
fn test_partial_file_fills_defaults() {
    let parsed = parse_tuning(
        "partial.ron",
        "(movement: (walk_speed: 140.0), attacks: (knockback_x: 300.0))",
    )
    .expect("partial tuning parses");

    assert_eq!(parsed.movement.walk_speed, 140.0);
    assert_eq!(parsed.movement.jump_speed, MovementTuning::default().jump_speed);
    assert_eq!(parsed.attacks.knockback_x, 300.0);
    assert_eq!(parsed.attacks.small, AttackTuning::default().small);
    assert_eq!(parsed.body, TuningFile::default().body);
}

#[test]
fn test_empty_file_is_all_defaults() {
    let parsed = parse_tuning("empty.ron", "()").expect("empty struct parses");
    assert_eq!(parsed, TuningFile::default());
}

#[test]
fn test_malformed_file_reports_parse_error() {
    let err = parse_tuning("broken.ron", "(movement: (walk_speed: fast))")
        .expect_err("malformed tuning must fail");

    assert_eq!(err.file, "broken.ron");
    assert!(err.message.starts_with("Parse error"));
    assert!(err.to_string().starts_with("Failed to load broken.ron"));
}

#[test]
fn test_missing_file_reports_io_error() {
    let err = load_tuning(Path::new("does/not/exist.ron")).expect_err("missing file must fail");

    assert!(err.file.ends_with("exist.ron"));
    assert!(err.message.starts_with("IO error"));
}
