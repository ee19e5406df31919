//! Kombi - parser combinators over token streams
//!
//! Parsers are first-class values: primitives like [`token`] and [`end`]
//! are composed through sequencing, choice, and repetition combinators
//! into grammars, and applying a [`Parser`] to a [`TokenStream`] yields a
//! [`ParseOutcome`] carrying the value, the unconsumed remainder, and
//! structured diagnostics. The library does no lexing; any token type that
//! can be displayed in an error message will do.

pub mod diagnostic;
pub mod error;
pub mod outcome;
pub mod parser;
pub mod position;
pub mod stream;

pub use diagnostic::{Diagnostic, Severity};
pub use error::ParseFailure;
pub use outcome::ParseOutcome;
pub use parser::{
    at_least_once, concat, end, except, fail, many, maybe, not, once, succeed, take, token, until,
    Parser,
};
pub use position::{SourcePosition, Span};
pub use stream::TokenStream;
