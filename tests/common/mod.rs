//! Shared fixtures: a two-kind token alphabet over `u8`.

#![allow(dead_code)]

use kombi::{token, ParseOutcome, Parser, TokenStream};

pub fn stream(bits: &[u8]) -> TokenStream<u8> {
    TokenStream::new(bits.to_vec())
}

/// Matches a `0` token.
pub fn zero() -> Parser<u8, u8> {
    token(|bit: &u8| *bit == 0)
}

/// Matches a `1` token.
pub fn one() -> Parser<u8, u8> {
    token(|bit: &u8| *bit == 1)
}

/// Matches any token.
pub fn any() -> Parser<u8, u8> {
    token(|_: &u8| true)
}

pub fn message_texts<V>(outcome: &ParseOutcome<V, u8>) -> Vec<String> {
    outcome
        .messages()
        .iter()
        .map(|message| message.text.clone())
        .collect()
}
