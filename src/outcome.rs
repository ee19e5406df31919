//! The algebraic result of running a parser.
//!
//! An outcome carries four independent streams of information: the value
//! (present exactly on success), the remainder of the input, an ordered log
//! of diagnostics, and a de-duplicated set of expectation names. Every
//! combinator in this crate is defined in terms of a handful of operations
//! on outcomes: `or` decides between two failing alternatives, `and` joins
//! two sequential stages, `on_success` threads a continuation, and the
//! `with_*` family attaches diagnostics.
//!
//! ## Choice tie-break
//!
//! When both alternatives of a choice fail, the failure that consumed more
//! input is usually the better diagnosis: it got further before going
//! wrong. `or` therefore compares how much input each failure left over and
//! keeps the diagnostics of the deeper one; only on an exact tie are both
//! sides merged, because neither is a better witness than the other.

use std::cmp::Ordering;

use crate::diagnostic::Diagnostic;
use crate::error::ParseFailure;
use crate::stream::TokenStream;

/// Result of applying a parser: a value plus remainder on success, or the
/// reached position plus diagnostics on failure.
///
/// The value is present exactly when the parse succeeded, so a failure's
/// value cannot be read at all. The remainder is always present: on
/// success it is the unconsumed input, on failure it is the furthest
/// position the parser reached before giving up.
#[derive(Debug)]
pub struct ParseOutcome<V, T> {
    value: Option<V>,
    remainder: TokenStream<T>,
    messages: Vec<Diagnostic>,
    expectations: Vec<String>,
}

impl<V, T> ParseOutcome<V, T> {
    /// A successful outcome with no diagnostics.
    pub fn success(value: V, remainder: TokenStream<T>) -> Self {
        Self {
            value: Some(value),
            remainder,
            messages: Vec::new(),
            expectations: Vec::new(),
        }
    }

    /// A failed outcome with no diagnostics.
    pub fn failure(remainder: TokenStream<T>) -> Self {
        Self {
            value: None,
            remainder,
            messages: Vec::new(),
            expectations: Vec::new(),
        }
    }

    pub fn is_successful(&self) -> bool {
        self.value.is_some()
    }

    /// The parsed value, if this outcome is successful.
    pub fn value(&self) -> Option<&V> {
        self.value.as_ref()
    }

    pub fn into_value(self) -> Option<V> {
        self.value
    }

    /// The input position this parse reached, whether it succeeded or not.
    pub fn remainder(&self) -> &TokenStream<T> {
        &self.remainder
    }

    /// The diagnostic log, in the order diagnostics were attached.
    pub fn messages(&self) -> &[Diagnostic] {
        &self.messages
    }

    /// Names of what the parser wanted to see, de-duplicated, in insertion
    /// order.
    pub fn expectations(&self) -> &[String] {
        &self.expectations
    }

    /// Append one diagnostic to the message log.
    #[must_use]
    pub fn with_message(mut self, message: Diagnostic) -> Self {
        self.messages.push(message);
        self
    }

    /// Append several diagnostics, preserving their order.
    #[must_use]
    pub fn with_messages(mut self, messages: impl IntoIterator<Item = Diagnostic>) -> Self {
        self.messages.extend(messages);
        self
    }

    /// Union one expectation name into the set.
    #[must_use]
    pub fn with_expectation(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !self.expectations.contains(&name) {
            self.expectations.push(name);
        }
        self
    }

    /// Union several expectation names into the set.
    #[must_use]
    pub fn with_expectations(mut self, names: impl IntoIterator<Item = String>) -> Self {
        for name in names {
            if !self.expectations.contains(&name) {
                self.expectations.push(name);
            }
        }
        self
    }

    /// Thread a continuation over a successful outcome. A failure passes
    /// through re-typed, keeping its remainder, messages, and expectations.
    pub fn on_success<U>(
        self,
        f: impl FnOnce(ParseOutcome<V, T>) -> ParseOutcome<U, T>,
    ) -> ParseOutcome<U, T> {
        if self.is_successful() {
            f(self)
        } else {
            self.into_failure()
        }
    }

    /// Join this outcome with the outcome of a following stage.
    ///
    /// The result succeeds only if both did, taking the second stage's
    /// value and remainder. Messages are concatenated in temporal order and
    /// expectations are unioned either way.
    pub fn and<U>(self, second: ParseOutcome<U, T>) -> ParseOutcome<U, T> {
        let successful = self.is_successful() && second.is_successful();
        let mut messages = self.messages;
        messages.extend(second.messages);
        ParseOutcome {
            value: if successful { second.value } else { None },
            remainder: second.remainder,
            messages,
            expectations: second.expectations.into_iter().fold(
                self.expectations,
                |mut names, name| {
                    if !names.contains(&name) {
                        names.push(name);
                    }
                    names
                },
            ),
        }
    }

    /// Decide between this outcome and an alternative that ran on the same
    /// origin.
    ///
    /// The first success wins. Between two failures, the one that consumed
    /// more input (smaller remainder) wins outright with its own
    /// diagnostics; an exact tie merges both sides at the shared position.
    pub fn or(self, second: ParseOutcome<V, T>) -> ParseOutcome<V, T> {
        if self.is_successful() {
            return self;
        }
        if second.is_successful() {
            return second;
        }
        match self.remainder.remaining().cmp(&second.remainder.remaining()) {
            Ordering::Less => self,
            Ordering::Greater => second,
            Ordering::Equal => {
                let merged = ParseOutcome::failure(self.remainder)
                    .with_messages(self.messages)
                    .with_expectations(self.expectations);
                merged
                    .with_messages(second.messages)
                    .with_expectations(second.expectations)
            }
        }
    }

    /// Surface this outcome to an embedder: the value on success, or an
    /// error carrying the diagnostics on failure.
    pub fn into_result(self) -> Result<V, ParseFailure> {
        match self.value {
            Some(value) => Ok(value),
            None => Err(ParseFailure {
                messages: self.messages,
                expectations: self.expectations,
            }),
        }
    }

    /// Re-type a failure, dropping the (absent) value slot.
    pub(crate) fn into_failure<U>(self) -> ParseOutcome<U, T> {
        ParseOutcome {
            value: None,
            remainder: self.remainder,
            messages: self.messages,
            expectations: self.expectations,
        }
    }

    /// Map the value in place, leaving everything else untouched.
    pub(crate) fn map_value<U>(self, f: impl FnOnce(V) -> U) -> ParseOutcome<U, T> {
        ParseOutcome {
            value: self.value.map(f),
            remainder: self.remainder,
            messages: self.messages,
            expectations: self.expectations,
        }
    }

    /// Split into the raw parts a loop-shaped combinator accumulates over.
    pub(crate) fn into_parts(self) -> (Option<V>, TokenStream<T>, Vec<Diagnostic>, Vec<String>) {
        (self.value, self.remainder, self.messages, self.expectations)
    }
}

impl<V: Clone, T> Clone for ParseOutcome<V, T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            remainder: self.remainder.clone(),
            messages: self.messages.clone(),
            expectations: self.expectations.clone(),
        }
    }
}

/// Join expectation names for a message: "a", "a or b", "a, b or c".
/// Returns `None` when there is nothing to join.
pub(crate) fn join_expectations(names: &[String]) -> Option<String> {
    match names {
        [] => None,
        [single] => Some(single.clone()),
        [rest @ .., last] => {
            let joined = rest
                .iter()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", ");
            Some(format!("{joined} or {last}"))
        }
    }
}
