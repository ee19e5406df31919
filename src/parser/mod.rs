//! Parsers as first-class values.
//!
//! A parser is a pure function from a [`TokenStream`] to a
//! [`ParseOutcome`], wrapped in a shared pointer so composed parsers can be
//! cloned freely and captured by further combinators. Composition never
//! runs anything; invoking [`Parser::parse`] does.

mod combinators;
mod primitives;
mod repetition;

pub use combinators::{except, not};
pub use primitives::{end, fail, succeed, token};
pub use repetition::{at_least_once, concat, many, maybe, once, take, until};

use std::sync::Arc;

use crate::outcome::ParseOutcome;
use crate::stream::TokenStream;

type ParseFn<V, T> = dyn Fn(&TokenStream<T>) -> ParseOutcome<V, T> + Send + Sync;

/// A composable parser producing a `V` from a stream of `T` tokens.
///
/// Parsers are immutable values; the same parser may be applied to any
/// number of streams, concurrently, without synchronization.
pub struct Parser<V, T> {
    run: Arc<ParseFn<V, T>>,
}

impl<V, T> Parser<V, T> {
    /// Wrap a parse function. The function must never mutate shared state;
    /// everything it observes arrives through the input stream.
    pub fn new<F>(run: F) -> Self
    where
        F: Fn(&TokenStream<T>) -> ParseOutcome<V, T> + Send + Sync + 'static,
    {
        Self { run: Arc::new(run) }
    }

    /// Apply this parser to an input stream.
    pub fn parse(&self, input: &TokenStream<T>) -> ParseOutcome<V, T> {
        (self.run)(input)
    }
}

impl<V, T> Clone for Parser<V, T> {
    fn clone(&self) -> Self {
        Self {
            run: Arc::clone(&self.run),
        }
    }
}
