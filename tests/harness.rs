mod common;

use common::{log, Counter, CounterEffect, CounterEvent, CounterFailure};
use elmer::testing::{Harness, RecordingReporter};
use elmer::{Start, Transition};

fn recording() -> Harness<Counter, RecordingReporter> {
    Harness::with_reporter(Counter, RecordingReporter::new())
}

#[test]
fn start_yields_state_effects_and_view() {
    let harness = Harness::new(Counter);

    let state = harness.expect_start_state(1).expect("start succeeds");
    harness.expect(state, 1);
    harness.expect(harness.expect_view(&state), Some("1".to_string()));
    harness.expect(harness.expect_start_effects(1), Some(vec![log("Did start")]));
}

#[test]
fn increment_from_one() {
    let harness = Harness::new(Counter);

    harness.expect(
        harness.expect_update_state(&CounterEvent::Increment, &1),
        Some(2),
    );
    let effects = harness
        .expect_update_effects(&CounterEvent::Increment, &1)
        .expect("update succeeds");
    assert_eq!(effects.len(), 1);
    harness.expect(&effects[0], &log("Did increment"));
}

#[test]
fn unchanged_update_returns_input_state() {
    let harness = Harness::new(Counter);

    let update = harness
        .expect_update(&CounterEvent::Ping, &9)
        .expect("update succeeds");
    assert_eq!(update.transition, Transition::Unchanged);
    harness.expect(harness.expect_update_state(&CounterEvent::Ping, &9), Some(9));
}

#[test]
fn expect_update_failure_returns_the_failure() {
    let harness = recording();

    let failure = harness.expect_update_failure(&CounterEvent::Explode, &3);

    assert_eq!(failure, Some(CounterFailure::Exploded));
    assert!(harness.reporter().is_clean(), "no false unexpected-success report");
}

#[test]
fn unexpected_update_failure_is_reported_not_fatal() {
    let harness = recording();
    let line = line!() + 1;
    let state = harness.expect_update_state(&CounterEvent::Explode, &3);

    assert_eq!(state, None);
    let failures = harness.reporter().failures();
    assert_eq!(failures.len(), 1);
    assert!(failures[0].message.contains("unexpected failure in update: Exploded"));
    assert!(failures[0].file.ends_with("harness.rs"));
    assert_eq!(failures[0].line, line);
}

#[test]
fn unexpected_success_is_reported() {
    let harness = recording();

    assert_eq!(harness.expect_update_failure(&CounterEvent::Increment, &0), None);
    assert_eq!(harness.expect_start_failure(0), None);
    assert_eq!(harness.expect_view_failure(&0), None);

    let messages: Vec<String> = harness
        .reporter()
        .failures()
        .into_iter()
        .map(|f| f.message)
        .collect();
    assert_eq!(messages.len(), 3);
    assert!(messages[0].starts_with("expected update to fail"));
    assert!(messages[1].starts_with("expected start to fail"));
    assert!(messages[2].starts_with("expected render to fail"));
}

#[test]
fn start_and_render_failures_are_data() {
    let harness = recording();

    harness.expect(harness.expect_start_failure(-1), Some(CounterFailure::NegativeSeed(-1)));
    harness.expect(
        harness.expect_view_failure(&common::counter::UNRENDERABLE),
        Some(CounterFailure::Unrenderable(13)),
    );
    assert!(harness.reporter().is_clean());

    assert_eq!(harness.expect_start(-1), None);
    assert_eq!(harness.reporter().failures().len(), 1);
}

#[test]
fn expect_compares_debug_renderings() {
    let harness = recording();

    assert!(harness.expect(log("a"), CounterEffect::Log("a".to_string())));
    assert!(!harness.expect(log("a"), log("b")));

    let failures = harness.reporter().failures();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].message, r#"expected Log("b"), got Log("a")"#);
}

#[test]
#[should_panic(expected = "unexpected failure in start")]
fn default_reporter_fails_the_test() {
    Harness::new(Counter).expect_start_state(-5);
}

#[test]
fn functions_are_pure_across_repeated_calls() {
    let harness = Harness::new(Counter);

    for state in [-2_i64, 0, 1, 42] {
        assert_eq!(harness.expect_view(&state), harness.expect_view(&state));
        for event in [CounterEvent::Increment, CounterEvent::Decrement, CounterEvent::Ping] {
            assert_eq!(
                harness.expect_update(&event, &state),
                harness.expect_update(&event, &state)
            );
        }
    }
    let first: Option<Start<i64, CounterEffect>> = harness.expect_start(3);
    assert_eq!(first, harness.expect_start(3));
}

#[test]
fn borrowed_reporter_can_be_inspected_after_use() {
    let reporter = RecordingReporter::new();
    {
        let harness = Harness::with_reporter(Counter, &reporter);
        harness.expect(harness.expect_view(&2), Some("3".to_string()));
    }
    assert_eq!(reporter.failures().len(), 1);
}
