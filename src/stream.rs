//! An immutable cursor over a finite token sequence.
//!
//! Backtracking parsers need to return to earlier input positions. Instead
//! of a mutable index with checkpoint/restore, the stream itself is a cheap
//! value: the token sequence lives behind a shared allocation and a cursor
//! is just an offset into it. Every outcome can then carry the exact
//! position it reached, and "restoring" is nothing more than holding on to
//! an earlier stream.

use std::fmt;
use std::sync::Arc;

/// A cursor into a shared, finite token sequence.
///
/// Cloning is cheap (a reference-count bump plus an offset copy), and
/// `advance` returns a new stream rather than mutating. Two streams are
/// equal exactly when they view the same underlying allocation at the same
/// offset; streams over distinct allocations are never equal, even if the
/// tokens happen to match.
pub struct TokenStream<T> {
    tokens: Arc<[T]>,
    offset: usize,
}

impl<T> TokenStream<T> {
    pub fn new(tokens: impl Into<Arc<[T]>>) -> Self {
        Self {
            tokens: tokens.into(),
            offset: 0,
        }
    }

    /// True exactly when no further token exists.
    pub fn at_end(&self) -> bool {
        self.offset >= self.tokens.len()
    }

    /// The token under the cursor, or `None` at the end of input.
    pub fn current(&self) -> Option<&T> {
        self.tokens.get(self.offset)
    }

    /// Count of tokens from the cursor to the end.
    pub fn remaining(&self) -> usize {
        self.tokens.len() - self.offset.min(self.tokens.len())
    }

    /// A stream one position further along. Advancing at the end returns an
    /// equal stream.
    #[must_use]
    pub fn advance(&self) -> Self {
        if self.at_end() {
            self.clone()
        } else {
            Self {
                tokens: Arc::clone(&self.tokens),
                offset: self.offset + 1,
            }
        }
    }
}

impl<T> Clone for TokenStream<T> {
    fn clone(&self) -> Self {
        Self {
            tokens: Arc::clone(&self.tokens),
            offset: self.offset,
        }
    }
}

impl<T> PartialEq for TokenStream<T> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.tokens, &other.tokens) && self.offset == other.offset
    }
}

impl<T> Eq for TokenStream<T> {}

impl<T> From<Vec<T>> for TokenStream<T> {
    fn from(tokens: Vec<T>) -> Self {
        Self::new(tokens)
    }
}

impl<T: fmt::Debug> fmt::Debug for TokenStream<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenStream")
            .field("offset", &self.offset)
            .field("remaining", &self.remaining())
            .finish()
    }
}
