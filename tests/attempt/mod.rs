use std::fmt;

use reason_rail::{CapturedFailure, ErrorReason, FailureKind, Outcome, ReasonTrail, ValueOutcome};

#[derive(Debug)]
struct Unreachable {
    host: &'static str,
}

impl fmt::Display for Unreachable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} unreachable", self.host)
    }
}

impl std::error::Error for Unreachable {}

fn only_error<R: ReasonTrail>(outcome: &R) -> &ErrorReason {
    let errors: Vec<&ErrorReason> = outcome.errors().collect();
    assert_eq!(errors.len(), 1, "expected exactly one error");
    errors[0]
}

#[test]
fn untyped_attempt_succeeds_without_reasons() {
    let mut ran = false;
    let outcome = Outcome::attempt(|| ran = true);

    assert!(ran);
    assert_eq!(outcome, Outcome::ok());
}

#[test]
fn untyped_attempt_captures_panic() {
    let outcome = Outcome::attempt(|| panic!("disk on fire"));

    let error = only_error(&outcome);
    assert_eq!(error.message(), "disk on fire");
    let captured = error.captured().expect("panic should be captured");
    assert_eq!(captured.kind(), FailureKind::Panic);
    assert!(captured.diagnostic().starts_with("panic in thread"));
}

#[test]
fn formatted_panic_message_is_captured() {
    let shard = 3;
    let outcome = ValueOutcome::<()>::attempt(|| panic!("shard {shard} lost"));

    assert_eq!(only_error(&outcome).message(), "shard 3 lost");
}

#[test]
fn attempt_outcome_passes_work_result_through() {
    let failed = Outcome::attempt_outcome(|| Outcome::fail("E1").with_success("S"));
    assert_eq!(failed, Outcome::fail("E1").with_success("S"));

    let valued = ValueOutcome::attempt_outcome(|| ValueOutcome::ok(5).with_success("computed"));
    assert_eq!(valued.value(), Some(&5));
    assert_eq!(valued.successes().count(), 1);
}

#[test]
fn attempt_outcome_replaces_trail_on_panic() {
    let outcome = ValueOutcome::<i32>::attempt_outcome(|| {
        let partial = ValueOutcome::ok(1).with_success("half done");
        if partial.is_success() {
            panic!("interrupted");
        }
        partial
    });

    assert_eq!(outcome.reasons().len(), 1);
    assert_eq!(only_error(&outcome).message(), "interrupted");
}

#[test]
fn custom_handler_decides_the_error() {
    let outcome = Outcome::attempt_with(
        || panic!("socket closed"),
        |failure: CapturedFailure| {
            ErrorReason::new("transport error").with_metadata("detail", failure.message())
        },
    );

    let error = only_error(&outcome);
    assert_eq!(error.message(), "transport error");
    assert_eq!(error.metadata().get("detail").and_then(|v| v.as_str()), Some("socket closed"));
    assert!(!error.is_exceptional());
}

#[test]
fn handler_is_not_called_on_success() {
    let mut handled = false;
    let outcome = ValueOutcome::attempt_with(
        || 8,
        |failure| {
            handled = true;
            ErrorReason::exceptional(failure)
        },
    );

    assert!(!handled);
    assert_eq!(outcome.value(), Some(&8));
}

#[test]
fn attempt_fallible_converts_errors() {
    let outcome = ValueOutcome::<u16>::attempt_fallible(|| Err(Unreachable { host: "db-1" }));

    let error = only_error(&outcome);
    assert_eq!(error.message(), "db-1 unreachable");
    let captured = error.captured().expect("error should be captured");
    assert_eq!(captured.kind(), FailureKind::Error);
    assert!(captured.diagnostic().contains("Unreachable"));
}

#[test]
fn attempt_fallible_passes_ok_and_captures_panics() {
    let ok = ValueOutcome::attempt_fallible(|| Ok::<_, Unreachable>(443));
    assert_eq!(ok.value(), Some(&443));

    let panicked = ValueOutcome::attempt_fallible(|| -> Result<u16, Unreachable> { panic!("bug") });
    assert_eq!(only_error(&panicked).captured().map(|c| c.kind()), Some(FailureKind::Panic));
}

#[test]
fn attempt_fallible_with_custom_handler() {
    let outcome = ValueOutcome::<u16>::attempt_fallible_with(
        || Err(Unreachable { host: "cache" }),
        |failure| ErrorReason::new(format!("wrapped: {failure}")),
    );

    assert_eq!(only_error(&outcome).message(), "wrapped: cache unreachable");
}

#[test]
fn non_string_panic_payload_is_reported_by_type() {
    let outcome = Outcome::attempt(|| std::panic::panic_any(17u32));

    assert_eq!(only_error(&outcome).message(), "Box<dyn Any>");
}

#[test]
fn attempt_feeds_bind_chain() {
    let total = ValueOutcome::attempt(|| "12".parse::<i32>().unwrap_or_default())
        .bind(|n| ValueOutcome::attempt(move || n * 2))
        .bind(|n| ValueOutcome::<i32>::attempt(move || if n > 10 { panic!("too big") } else { n }));

    assert!(total.is_failed());
    assert_eq!(only_error(&total).message(), "too big");
}
