//! Tests for SingleProbeError and AggregateError formatting.

use std::error::Error as _;

use crate::error::{AggregateError, ProbeError, SingleProbeError, Stage};

fn failure(index: usize, stage: Stage, target: &str) -> SingleProbeError {
    SingleProbeError {
        index,
        stage,
        target: target.to_string(),
        error: ProbeError::Unrecognized,
    }
}

#[test]
fn single_error_display_names_stage_index_and_target() {
    let e = failure(3, Stage::Detect, "cat.txt");
    assert_eq!(e.to_string(), "[Detect] #3 cat.txt: Unrecognized image format");
    assert!(e.source().is_some());
}

#[test]
fn aggregate_error_display_includes_count() {
    let agg = AggregateError {
        errors: vec![failure(0, Stage::Open, "a"), failure(2, Stage::Decode, "b")],
    };

    let s = agg.to_string();
    assert!(s.contains("2 error(s)"));
    assert!(s.contains("#1: [Open] #0 a"));
    assert!(s.contains("#2: [Decode] #2 b"));
}

#[test]
fn aggregate_error_single_and_len() {
    let agg = AggregateError::single(failure(0, Stage::Resolve, "x"));
    assert_eq!(agg.len(), 1);
    assert!(!agg.is_empty());
}

#[test]
fn aggregate_error_from_single() {
    let agg: AggregateError = failure(1, Stage::Open, "input").into();
    assert_eq!(agg.errors[0].index, 1);
}

#[cfg(feature = "miette")]
#[test]
fn diagnostic_carries_help() {
    use crate::error::ProbeDiagnostic;

    let diag = ProbeDiagnostic::from(AggregateError::single(failure(0, Stage::Detect, "a")));
    assert_eq!(diag.message, "[Detect] on 'a'");
    assert!(diag.help.unwrap().contains("png"));
}
