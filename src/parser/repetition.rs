//! Repetition combinators.
//!
//! Every operator here re-anchors each iteration at the remainder of the
//! previous *successful* one: a failed iteration never moves the outer
//! parser past its last success point. The loops also guard against
//! zero-consumption successes: an inner parser that succeeds without
//! advancing is collected once and then refused, so repetition always
//! terminates.

use super::{combinators::except, primitives::succeed, Parser};
use crate::outcome::{join_expectations, ParseOutcome};
use crate::stream::TokenStream;

/// Exactly one application of `parser`, as a one-element sequence.
pub fn once<V, T>(parser: Parser<V, T>) -> Parser<Vec<V>, T>
where
    V: Clone + Send + Sync + 'static,
    T: Send + Sync + 'static,
{
    parser.select(|value| vec![value])
}

/// Zero or more applications of `parser`. Always succeeds.
///
/// Messages of the successful iterations are concatenated in order and
/// their expectations unioned; the diagnostics of the failing iteration
/// that ends the loop are discarded.
pub fn many<V, T>(parser: Parser<V, T>) -> Parser<Vec<V>, T>
where
    V: Clone + Send + Sync + 'static,
    T: Send + Sync + 'static,
{
    Parser::new(move |input: &TokenStream<T>| {
        let mut values = Vec::new();
        let mut messages = Vec::new();
        let mut expectations = Vec::new();
        let mut cursor = input.clone();
        loop {
            let (value, remainder, step_messages, step_expectations) =
                parser.parse(&cursor).into_parts();
            let Some(value) = value else { break };
            values.push(value);
            messages.extend(step_messages);
            expectations.extend(step_expectations);
            let stalled = remainder == cursor;
            cursor = remainder;
            if stalled {
                break;
            }
        }
        ParseOutcome::success(values, cursor)
            .with_messages(messages)
            .with_expectations(expectations)
    })
}

/// One or more applications of `parser`. Fails exactly when the first
/// application fails, preserving its diagnostics.
pub fn at_least_once<V, T>(parser: Parser<V, T>) -> Parser<Vec<V>, T>
where
    V: Clone + Send + Sync + 'static,
    T: Send + Sync + 'static,
{
    let rest = many(parser.clone());
    once(parser).then(move |first| {
        rest.clone().select(move |tail: Vec<V>| {
            let mut all = first.clone();
            all.extend(tail);
            all
        })
    })
}

/// Zero or one application of `parser`. Always succeeds; the diagnostics
/// of a failed attempt are dropped, because the absence is legitimate.
pub fn maybe<V, T>(parser: Parser<V, T>) -> Parser<Vec<V>, T>
where
    V: Clone + Send + Sync + 'static,
    T: Send + Sync + 'static,
{
    once(parser).otherwise(succeed(Vec::new()))
}

/// Apply `parser` until `stop` matches, then consume `stop` and keep the
/// collected values. Fails when `stop` never matches before the collection
/// loop gives up.
pub fn until<V, W, T>(parser: Parser<V, T>, stop: Parser<W, T>) -> Parser<Vec<V>, T>
where
    V: Clone + Send + Sync + 'static,
    W: Clone + Send + Sync + 'static,
    T: Send + Sync + 'static,
{
    let terminator = stop.clone();
    many(except(parser, stop)).then(move |values| {
        terminator.clone().select(move |_| values.clone())
    })
}

/// Exactly `count` applications of `parser`.
///
/// Fails at the first failing iteration, keeping that iteration's messages
/// and naming the overall expectation. `count == 0` succeeds with an empty
/// sequence at the original input.
pub fn take<V, T>(parser: Parser<V, T>, count: usize) -> Parser<Vec<V>, T>
where
    V: Clone + Send + Sync + 'static,
    T: Send + Sync + 'static,
{
    Parser::new(move |input: &TokenStream<T>| {
        let mut values = Vec::with_capacity(count);
        let mut messages = Vec::new();
        let mut expectations = Vec::new();
        let mut cursor = input.clone();
        for _ in 0..count {
            let (value, remainder, step_messages, step_expectations) =
                parser.parse(&cursor).into_parts();
            match value {
                Some(value) => {
                    values.push(value);
                    messages.extend(step_messages);
                    expectations.extend(step_expectations);
                    cursor = remainder;
                }
                None => {
                    let wanted = join_expectations(&step_expectations)
                        .unwrap_or_else(|| String::from("token"));
                    return ParseOutcome::failure(remainder)
                        .with_messages(messages)
                        .with_messages(step_messages)
                        .with_expectation(format!("{count} repetitions of {wanted}"));
                }
            }
        }
        ParseOutcome::success(values, cursor)
            .with_messages(messages)
            .with_expectations(expectations)
    })
}

/// Run two sequence parsers one after the other and join their results.
pub fn concat<V, T>(first: Parser<Vec<V>, T>, second: Parser<Vec<V>, T>) -> Parser<Vec<V>, T>
where
    V: Clone + Send + Sync + 'static,
    T: Send + Sync + 'static,
{
    first.then(move |left| {
        second.clone().select(move |right: Vec<V>| {
            let mut joined = left.clone();
            joined.extend(right);
            joined
        })
    })
}
