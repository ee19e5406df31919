//! Sequencing and choice combinators, plus operator sugar.
//!
//! Sequencing threads one parser's remainder into the next and merges
//! their diagnostics in temporal order. Choice runs both alternatives
//! against the same origin, so a combined failure's remainder reflects
//! whichever branch progressed further.

use std::ops::{Add, BitOr, Mul, Shr, Sub};
use std::sync::Arc;

use super::Parser;
use crate::diagnostic::Diagnostic;
use crate::outcome::{join_expectations, ParseOutcome};
use crate::stream::TokenStream;

// === Combinators as methods ===

impl<V, T> Parser<V, T>
where
    V: Clone + Send + Sync + 'static,
    T: Send + Sync + 'static,
{
    /// Monadic bind: run `self`, then run the parser chosen by its value.
    ///
    /// A failure of `self` passes through re-typed; the messages of `self`
    /// precede those of the continuation.
    pub fn then<U, F>(self, f: F) -> Parser<U, T>
    where
        U: Send + Sync + 'static,
        F: Fn(V) -> Parser<U, T> + Send + Sync + 'static,
    {
        Parser::new(move |input: &TokenStream<T>| {
            let outcome = self.parse(input);
            match outcome.value().cloned() {
                Some(value) => {
                    let continuation = f(value).parse(outcome.remainder());
                    outcome.and(continuation)
                }
                None => outcome.into_failure(),
            }
        })
    }

    /// Run `self`, discard its value, then run `next` and keep its value.
    pub fn then_discard<U>(self, next: Parser<U, T>) -> Parser<U, T>
    where
        U: Clone + Send + Sync + 'static,
    {
        self.then(move |_| next.clone())
    }

    /// Map the parsed value.
    pub fn select<U, F>(self, f: F) -> Parser<U, T>
    where
        U: Send + Sync + 'static,
        F: Fn(V) -> U + Send + Sync + 'static,
    {
        Parser::new(move |input: &TokenStream<T>| self.parse(input).map_value(&f))
    }

    /// Bind plus projection: run `self`, run `f(value)`, and combine both
    /// values with `g`.
    pub fn select_many<U, W, F, G>(self, f: F, g: G) -> Parser<W, T>
    where
        U: Clone + Send + Sync + 'static,
        W: Send + Sync + 'static,
        F: Fn(V) -> Parser<U, T> + Send + Sync + 'static,
        G: Fn(V, U) -> W + Send + Sync + 'static,
    {
        let g = Arc::new(g);
        self.then(move |value| {
            let g = Arc::clone(&g);
            let captured = value.clone();
            f(value).select(move |inner| g(captured.clone(), inner))
        })
    }

    /// Keep a successful value only if it satisfies `predicate`.
    ///
    /// A rejected value cancels the consumption: the failure is reported at
    /// the original input, not at the consumed remainder.
    pub fn filter<F>(self, predicate: F) -> Parser<V, T>
    where
        F: Fn(&V) -> bool + Send + Sync + 'static,
    {
        Parser::new(move |input: &TokenStream<T>| {
            let outcome = self.parse(input);
            let keep = match outcome.value() {
                Some(value) => predicate(value),
                None => true,
            };
            if keep {
                return outcome;
            }
            let wanted =
                join_expectations(outcome.expectations()).unwrap_or_else(|| String::from("token"));
            let (_, _, messages, expectations) = outcome.into_parts();
            ParseOutcome::failure(input.clone())
                .with_messages(messages)
                .with_expectations(expectations)
                .with_message(Diagnostic::error(format!("Unexpected {wanted}")))
        })
    }

    /// Attach a human-readable name to whatever this parser produces,
    /// success or failure.
    pub fn named(self, name: impl Into<String>) -> Parser<V, T> {
        let name = name.into();
        Parser::new(move |input: &TokenStream<T>| self.parse(input).with_expectation(name.clone()))
    }

    /// Append a diagnostic to whatever this parser produces.
    pub fn with_message(self, message: Diagnostic) -> Parser<V, T> {
        Parser::new(move |input: &TokenStream<T>| self.parse(input).with_message(message.clone()))
    }

    /// Choice: try `self`; if it fails, try `second` on the same input.
    ///
    /// When both fail, the failure that consumed more input wins; an exact
    /// tie merges the diagnostics of both sides.
    pub fn otherwise(self, second: Parser<V, T>) -> Parser<V, T> {
        Parser::new(move |input: &TokenStream<T>| {
            let first = self.parse(input);
            if first.is_successful() {
                return first;
            }
            first.or(second.parse(input))
        })
    }
}

// === Negation ===

/// Succeeds (with `()`) exactly when `parser` fails, consuming nothing
/// either way.
pub fn not<V, T>(parser: Parser<V, T>) -> Parser<(), T>
where
    V: Send + Sync + 'static,
    T: Send + Sync + 'static,
{
    Parser::new(move |input: &TokenStream<T>| {
        let outcome = parser.parse(input);
        if outcome.is_successful() {
            let text = match join_expectations(outcome.expectations()) {
                Some(joined) => format!("Unexpected {joined}."),
                None => String::from("Unexpected token."),
            };
            ParseOutcome::failure(input.clone()).with_message(Diagnostic::error(text))
        } else {
            ParseOutcome::success((), input.clone())
        }
    })
}

/// Run `parser` only where `excluded` does not match.
pub fn except<V, W, T>(parser: Parser<V, T>, excluded: Parser<W, T>) -> Parser<V, T>
where
    V: Clone + Send + Sync + 'static,
    W: Send + Sync + 'static,
    T: Send + Sync + 'static,
{
    not(excluded).then_discard(parser)
}

// === Operator Overloading ===

/// `+` for sequence: A + B -> (A, B)
impl<V, U, T> Add<Parser<U, T>> for Parser<V, T>
where
    V: Clone + Send + Sync + 'static,
    U: Clone + Send + Sync + 'static,
    T: Send + Sync + 'static,
{
    type Output = Parser<(V, U), T>;

    fn add(self, rhs: Parser<U, T>) -> Self::Output {
        self.select_many(move |_| rhs.clone(), |left, right| (left, right))
    }
}

/// `-` for keep left: A - B -> A (parse B, discard its result)
impl<V, U, T> Sub<Parser<U, T>> for Parser<V, T>
where
    V: Clone + Send + Sync + 'static,
    U: Clone + Send + Sync + 'static,
    T: Send + Sync + 'static,
{
    type Output = Parser<V, T>;

    fn sub(self, rhs: Parser<U, T>) -> Self::Output {
        self.select_many(move |_| rhs.clone(), |left, _| left)
    }
}

/// `*` for keep right: A * B -> B (parse A, discard its result)
impl<V, U, T> Mul<Parser<U, T>> for Parser<V, T>
where
    V: Clone + Send + Sync + 'static,
    U: Clone + Send + Sync + 'static,
    T: Send + Sync + 'static,
{
    type Output = Parser<U, T>;

    fn mul(self, rhs: Parser<U, T>) -> Self::Output {
        self.then_discard(rhs)
    }
}

/// `|` for choice: A | B -> A or B
impl<V, T> BitOr<Parser<V, T>> for Parser<V, T>
where
    V: Clone + Send + Sync + 'static,
    T: Send + Sync + 'static,
{
    type Output = Parser<V, T>;

    fn bitor(self, rhs: Parser<V, T>) -> Self::Output {
        self.otherwise(rhs)
    }
}

/// `>>` for map: A >> fn -> B
impl<V, U, T, F> Shr<F> for Parser<V, T>
where
    V: Clone + Send + Sync + 'static,
    U: Send + Sync + 'static,
    T: Send + Sync + 'static,
    F: Fn(V) -> U + Send + Sync + 'static,
{
    type Output = Parser<U, T>;

    fn shr(self, f: F) -> Self::Output {
        self.select(f)
    }
}
