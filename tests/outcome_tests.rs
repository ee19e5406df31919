mod common;

use common::{any, message_texts, one, stream, zero};
use kombi::{fail, succeed, Diagnostic, ParseOutcome, Parser};

/// A parser that consumes `depth` tokens and then fails with `text`.
fn sink_after(depth: usize, text: &str) -> Parser<u8, u8> {
    let message = Diagnostic::error(text);
    let mut parser = fail::<u8, u8>().with_message(message);
    for _ in 0..depth {
        parser = any() * parser;
    }
    parser
}

#[test]
fn or_keeps_first_success() {
    let input = stream(&[0, 1, 0]);
    let outcome = zero().otherwise(any()).parse(&input);
    assert_eq!(outcome.value(), Some(&0));
    assert_eq!(outcome.remainder().remaining(), 2);
}

#[test]
fn or_falls_back_to_second_success() {
    let input = stream(&[1, 0]);
    let outcome = zero().otherwise(one()).parse(&input);
    assert_eq!(outcome.value(), Some(&1));
    assert_eq!(outcome.remainder().remaining(), 1);
}

#[test]
fn or_merges_diagnostics_on_equal_progress() {
    // both alternatives consume two tokens before failing
    let input = stream(&[0, 1, 0]);
    let choice = sink_after(2, "A").otherwise(sink_after(2, "B"));
    let outcome = choice.parse(&input);
    assert!(!outcome.is_successful());
    assert_eq!(message_texts(&outcome), ["A", "B"]);
    assert_eq!(outcome.remainder().remaining(), 1);
}

#[test]
fn or_prefers_the_deeper_failure() {
    let input = stream(&[0, 1, 0]);
    let choice = sink_after(2, "A").otherwise(sink_after(1, "B"));
    let outcome = choice.parse(&input);
    assert!(!outcome.is_successful());
    assert_eq!(message_texts(&outcome), ["A"]);
    assert_eq!(outcome.remainder().remaining(), 1);
}

#[test]
fn or_prefers_the_deeper_failure_in_second_position() {
    let input = stream(&[0, 1, 0]);
    let choice = sink_after(1, "A").otherwise(sink_after(2, "B"));
    let outcome = choice.parse(&input);
    assert_eq!(message_texts(&outcome), ["B"]);
}

#[test]
fn and_joins_stages() {
    let input = stream(&[0, 1]);
    let first = zero().parse(&input);
    let second = one().parse(first.remainder());
    let joined = first.and(second);
    assert_eq!(joined.value(), Some(&1));
    assert!(joined.remainder().at_end());
}

#[test]
fn and_fails_when_either_side_failed() {
    let input = stream(&[0, 1]);
    let first = zero().parse(&input);
    let second = zero().parse(first.remainder());
    let joined = first.and(second);
    assert!(!joined.is_successful());
    assert_eq!(message_texts(&joined), ["Unexpected token 1."]);
    // the remainder comes from the later stage
    assert_eq!(joined.remainder().remaining(), 1);
}

#[test]
fn and_unions_expectations() {
    let input = stream(&[0, 1]);
    let first = zero().named("zero").parse(&input);
    let second = one().named("one").parse(first.remainder());
    let joined = first.and(second);
    assert_eq!(joined.expectations(), ["zero", "one"]);
}

#[test]
fn on_success_passes_failures_through() {
    let input = stream(&[1]);
    let outcome = zero()
        .named("zero")
        .parse(&input)
        .on_success(|_| -> ParseOutcome<&str, u8> { panic!("must not run") });
    assert!(!outcome.is_successful());
    assert_eq!(outcome.expectations(), ["zero"]);
    assert_eq!(message_texts(&outcome), ["Unexpected token 1."]);
}

#[test]
fn on_success_replaces_successful_outcomes() {
    let input = stream(&[0, 1]);
    let outcome = zero().parse(&input).on_success(|inner| {
        let remainder = inner.remainder().clone();
        ParseOutcome::success("seen", remainder).with_expectation("bit")
    });
    assert_eq!(outcome.value(), Some(&"seen"));
    assert_eq!(outcome.remainder().remaining(), 1);
    assert_eq!(outcome.expectations(), ["bit"]);
}

#[test]
fn left_identity_of_then() {
    // then(succeed(v), f) behaves exactly like f(v)
    let input = stream(&[1, 0]);
    let bound = succeed(1u8).then(|bit| if bit == 1 { one() } else { zero() });
    let direct = one();
    let via_bind = bound.parse(&input);
    let straight = direct.parse(&input);
    assert_eq!(via_bind.value(), straight.value());
    assert_eq!(via_bind.remainder(), straight.remainder());
}

#[test]
fn right_identity_of_then() {
    let input = stream(&[0, 1]);
    let rebound = zero().then(succeed);
    let outcome = rebound.parse(&input);
    assert_eq!(outcome.value(), Some(&0));
    assert_eq!(outcome.remainder().remaining(), 1);
    assert!(outcome.messages().is_empty());
}

#[test]
fn select_with_identity_is_observationally_equal() {
    let input = stream(&[0, 1]);
    let mapped = zero().select(|bit| bit).parse(&input);
    let plain = zero().parse(&input);
    assert_eq!(mapped.value(), plain.value());
    assert_eq!(mapped.remainder(), plain.remainder());
    assert_eq!(mapped.messages(), plain.messages());
    assert_eq!(mapped.expectations(), plain.expectations());
}

#[test]
fn messages_attached_to_a_success_are_emitted() {
    let input = stream(&[0]);
    let outcome = zero()
        .with_message(Diagnostic::info("note"))
        .parse(&input);
    assert!(outcome.is_successful());
    assert_eq!(message_texts(&outcome), ["note"]);
}

#[test]
fn into_result_surfaces_the_diagnostics() {
    let input = stream(&[1]);
    let failure = zero().named("zero").parse(&input).into_result().unwrap_err();
    assert_eq!(failure.expectations, ["zero"]);
    assert_eq!(
        failure.to_string(),
        "expected zero: error: Unexpected token 1."
    );

    let value = one().parse(&input).into_result().unwrap();
    assert_eq!(value, 1);
}
