use core::error::Error;
use std::fmt;

use reason_rail::{CapturedFailure, ErrorReason, FailureKind, Reason, SuccessReason};

#[derive(Debug)]
struct Outer(Inner);

#[derive(Debug)]
struct Inner;

impl fmt::Display for Outer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("request failed")
    }
}

impl fmt::Display for Inner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("connection reset")
    }
}

impl Error for Outer {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.0)
    }
}

impl Error for Inner {}

#[test]
fn error_reason_builder_accumulates_metadata_and_causes() {
    let err = ErrorReason::new("payment declined")
        .with_metadata("code", 402)
        .with_metadata("retryable", false)
        .caused_by(ErrorReason::new("card expired"))
        .with_causes([ErrorReason::new("issuer offline")]);

    assert_eq!(err.message(), "payment declined");
    assert_eq!(err.metadata().len(), 2);
    let causes: Vec<&str> = err.causes().iter().map(|c| c.message()).collect();
    assert_eq!(causes, ["card expired", "issuer offline"]);
    assert_eq!(err.source().map(|s| s.to_string()), Some("card expired".to_string()));
}

#[test]
fn exceptional_error_keeps_captured_failure() {
    let failure = CapturedFailure::new(FailureKind::Panic, "boom", "panic in thread 'main': boom");
    let err = ErrorReason::exceptional(failure.clone());

    assert!(err.is_exceptional());
    assert_eq!(err.message(), "boom");
    assert_eq!(err.captured(), Some(&failure));
    assert_eq!(format!("{failure:#}"), "panic in thread 'main': boom");
}

#[test]
fn from_std_error_mirrors_source_chain() {
    let err = ErrorReason::from_std_error(&Outer(Inner));

    assert_eq!(err.message(), "request failed");
    assert_eq!(err.causes().len(), 1);
    assert_eq!(err.causes()[0].message(), "connection reset");

    let captured = err.captured().expect("std errors are captured");
    assert_eq!(captured.kind(), FailureKind::Error);
    assert!(captured.diagnostic().contains("Caused by:"));
    assert!(captured.diagnostic().contains("0: connection reset"));
}

#[test]
fn alternate_display_prints_cause_tree() {
    let err = ErrorReason::new("sync failed")
        .with_metadata("node", "n1")
        .caused_by(ErrorReason::new("timeout").caused_by(ErrorReason::new("dns")));

    assert_eq!(err.to_string(), "sync failed");
    assert_eq!(format!("{err:#}"), "sync failed {node=n1}\n  timeout\n    dns");
}

#[test]
fn reason_variants_expose_kind() {
    let error = Reason::from(ErrorReason::new("E"));
    let success = Reason::from(SuccessReason::new("S").with_metadata("step", 1));

    assert!(error.is_error());
    assert!(error.as_success().is_none());
    assert!(success.is_success());
    assert_eq!(success.metadata().len(), 1);
    assert_eq!(error.to_string(), "error: E");
    assert_eq!(success.to_string(), "success: S");
}
