//! The primitive parsers everything else is built from.

use std::fmt;

use super::Parser;
use crate::diagnostic::Diagnostic;
use crate::outcome::ParseOutcome;
use crate::stream::TokenStream;

/// Always succeeds with `value`, consuming nothing.
pub fn succeed<V, T>(value: V) -> Parser<V, T>
where
    V: Clone + Send + Sync + 'static,
    T: Send + Sync + 'static,
{
    Parser::new(move |input: &TokenStream<T>| ParseOutcome::success(value.clone(), input.clone()))
}

/// Always fails, consuming nothing and reporting nothing. Diagnostics are
/// attached by composing `with_message` / `named`.
pub fn fail<V, T>() -> Parser<V, T>
where
    V: Send + Sync + 'static,
    T: Send + Sync + 'static,
{
    Parser::new(|input: &TokenStream<T>| ParseOutcome::failure(input.clone()))
}

/// Consume one token satisfying `predicate`.
///
/// Fails without consuming when the stream is exhausted or the current
/// token does not satisfy the predicate.
pub fn token<T, F>(predicate: F) -> Parser<T, T>
where
    T: Clone + fmt::Display + Send + Sync + 'static,
    F: Fn(&T) -> bool + Send + Sync + 'static,
{
    Parser::new(move |input: &TokenStream<T>| match input.current() {
        Some(current) if predicate(current) => {
            ParseOutcome::success(current.clone(), input.advance())
        }
        Some(current) => ParseOutcome::failure(input.clone())
            .with_message(Diagnostic::error(format!("Unexpected token {current}."))),
        None => ParseOutcome::failure(input.clone())
            .with_message(Diagnostic::error("Unexpected end of input.")),
    })
}

/// Succeeds only at the end of input, consuming nothing.
pub fn end<T>() -> Parser<(), T>
where
    T: fmt::Display + Send + Sync + 'static,
{
    Parser::new(|input: &TokenStream<T>| {
        let outcome = match input.current() {
            None => ParseOutcome::success((), input.clone()),
            Some(current) => ParseOutcome::failure(input.clone())
                .with_message(Diagnostic::error(format!("Unexpected token {current}."))),
        };
        outcome.with_expectation("end of input")
    })
}
