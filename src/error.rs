//! The embedder-facing error for a failed parse.

use thiserror::Error;

use crate::diagnostic::Diagnostic;
use crate::outcome::join_expectations;

/// A failed parse, surfaced as a standard error.
///
/// Produced by [`ParseOutcome::into_result`](crate::ParseOutcome::into_result).
/// Carries the full diagnostic log and the expectation set so an embedder
/// can render or inspect them; the `Display` form summarizes both.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", describe(.messages, .expectations))]
pub struct ParseFailure {
    /// The observation log, in the order diagnostics were attached.
    pub messages: Vec<Diagnostic>,
    /// What the parser wanted to see, de-duplicated.
    pub expectations: Vec<String>,
}

fn describe(messages: &[Diagnostic], expectations: &[String]) -> String {
    let expected = join_expectations(expectations).map(|joined| format!("expected {joined}"));
    let log = messages
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ");
    match (expected, log.is_empty()) {
        (Some(expected), true) => expected,
        (Some(expected), false) => format!("{expected}: {log}"),
        (None, false) => log,
        (None, true) => String::from("parse failed"),
    }
}
