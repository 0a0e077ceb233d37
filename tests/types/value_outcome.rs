use reason_rail::{Outcome, ReasonTrail, ValueOutcome};

#[test]
fn ok_and_bind_to_new_value() {
    let outcome = ValueOutcome::ok(5).bind(|x| ValueOutcome::ok(x * 2));

    assert!(outcome.is_success());
    assert_eq!(outcome.value(), Some(&10));
}

#[test]
fn failed_receiver_never_calls_bind() {
    let mut called = false;
    let outcome = ValueOutcome::<i32>::fail("E1").bind(|x| {
        called = true;
        ValueOutcome::ok(x * 2)
    });

    assert!(!called);
    assert!(outcome.is_failed());
    let errors: Vec<&str> = outcome.errors().map(|e| e.message()).collect();
    assert_eq!(errors, ["E1"]);
    assert_eq!(outcome.value(), None);
}

#[test]
fn bind_changes_value_type_and_merges_trail() {
    let outcome = ValueOutcome::ok(3)
        .with_success("counted")
        .bind(|n| ValueOutcome::ok(format!("{n} items")).with_success("rendered"));

    assert_eq!(outcome.value().map(String::as_str), Some("3 items"));
    let successes: Vec<&str> = outcome.successes().map(|s| s.message()).collect();
    assert_eq!(successes, ["counted", "rendered"]);
}

#[test]
fn bind_to_untyped_outcome() {
    let outcome: Outcome = ValueOutcome::ok(17).bind(|n| {
        if n % 2 == 0 {
            Outcome::ok()
        } else {
            Outcome::fail("odd")
        }
    });

    assert!(outcome.is_failed());
}

#[test]
fn failed_receiver_retypes_on_bind_to_new_type() {
    let outcome: ValueOutcome<String> = ValueOutcome::<i32>::fail("Initial Result Error")
        .with_success("kept")
        .bind(|n| ValueOutcome::ok(n.to_string()));

    assert!(outcome.is_failed());
    assert_eq!(outcome.reasons().len(), 2);
}

#[test]
fn bind_and_keep_value_reattaches_original_value() {
    let outcome = ValueOutcome::ok(250u32)
        .with_success("loaded")
        .bind_and_keep_value(|amount| {
            assert_eq!(*amount, 250);
            Outcome::ok().with_success("validated")
        });

    assert_eq!(outcome.value(), Some(&250));
    let successes: Vec<&str> = outcome.successes().map(|s| s.message()).collect();
    assert_eq!(successes, ["loaded", "validated"]);
}

#[test]
fn bind_and_keep_value_propagates_validation_failure() {
    let outcome = ValueOutcome::ok(-1).bind_and_keep_value(|n| {
        if *n < 0 {
            Outcome::fail("negative")
        } else {
            Outcome::ok()
        }
    });

    assert!(outcome.is_failed());
    assert_eq!(outcome.value(), None);
}

#[test]
fn bind_and_keep_value_skips_on_failure() {
    let mut called = false;
    let outcome = ValueOutcome::<u8>::fail("E1").bind_and_keep_value(|_| {
        called = true;
        Outcome::ok()
    });

    assert!(!called);
    assert_eq!(outcome, ValueOutcome::fail("E1"));
}

#[test]
fn with_value_replaces_payload_only() {
    let outcome = ValueOutcome::ok(1).with_success("s").with_value(2);
    assert_eq!(outcome.value(), Some(&2));
    assert_eq!(outcome.reasons().len(), 1);

    let failed = ValueOutcome::<i32>::fail("E1").with_value(3);
    assert!(failed.is_failed());
    assert_eq!(failed.value(), None);
    assert_eq!(failed.value_or(0), 0);
}

#[test]
fn to_outcome_and_to_outcome_of_keep_reasons() {
    let failed = ValueOutcome::<i32>::fail("E1").with_success("S");

    let untyped = failed.clone().to_outcome();
    assert_eq!(untyped.reasons(), failed.reasons());

    let retyped: ValueOutcome<String> = failed.clone().to_outcome_of();
    assert_eq!(retyped.reasons(), failed.reasons());
    assert!(retyped.is_failed());
}

#[test]
fn map_value_maps_only_successes() {
    assert_eq!(ValueOutcome::ok(2).map_value(|n| n + 1).value(), Some(&3));

    let failed = ValueOutcome::<i32>::fail("E1").map_value(|n| n + 1);
    assert!(failed.is_failed());
}

#[test]
#[should_panic(expected = "on a failed outcome")]
fn unwrap_value_panics_on_failure() {
    let _ = ValueOutcome::<i32>::fail("E1").unwrap_value();
}

#[test]
#[should_panic(expected = "carries no value")]
fn bind_panics_on_valueless_success() {
    let retyped: ValueOutcome<i32> = ValueOutcome::ok("x").to_outcome_of();
    let _: Outcome = retyped.bind(|_| Outcome::ok());
}

#[test]
fn collect_gathers_values_and_all_reasons() {
    let all: ValueOutcome<Vec<i32>> =
        vec![ValueOutcome::ok(1).with_success("one"), ValueOutcome::ok(2)].into_iter().collect();
    assert_eq!(all.value(), Some(&vec![1, 2]));
    assert_eq!(all.reasons().len(), 1);

    let partial: ValueOutcome<Vec<i32>> =
        vec![ValueOutcome::ok(1), ValueOutcome::fail("E2"), ValueOutcome::fail("E3")]
            .into_iter()
            .collect();
    assert!(partial.is_failed());
    assert_eq!(partial.errors().count(), 2);
    assert_eq!(partial.value(), None);
}

#[test]
fn display_includes_value_on_success() {
    assert_eq!(ValueOutcome::ok(42).to_string(), "success (42)");
    assert_eq!(ValueOutcome::<i32>::fail("E1").to_string(), "failed: E1");
}

#[test]
fn on_error_hooks_leave_outcome_unchanged() {
    let mut count = 0;
    let ok = ValueOutcome::ok(1).on_error(|| count += 1);
    let failed = ValueOutcome::<i32>::fail("E").on_error_with(|errors| count += errors.count());

    assert_eq!(count, 1);
    assert_eq!(ok.value(), Some(&1));
    assert_eq!(failed, ValueOutcome::fail("E"));
}
