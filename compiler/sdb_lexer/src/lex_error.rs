//! Lexer error types.
//!
//! A `LexError` pairs WHERE (`span`) with WHAT (`kind`). Only
//! `TooManyTokens` is fatal: it means an expression blew through the fixed
//! token buffer, which debugger commands never do in normal use.

use sdb_ir::{Span, MAX_TOKEN_TEXT, TOKEN_CAPACITY};
use std::fmt::Write as _;

/// What kind of lexer error occurred.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum LexErrorKind {
    /// No rule matches at the current position.
    #[error("no match at position {position}")]
    NoMatch { position: u32 },
    /// A literal or register name longer than a token can hold.
    #[error("token of {len} bytes exceeds the {limit}-byte limit", limit = MAX_TOKEN_TEXT)]
    TokenTooLong { len: usize },
    /// The expression produced more tokens than the buffer holds.
    #[error("expression exceeds {capacity} tokens", capacity = TOKEN_CAPACITY)]
    TooManyTokens,
}

/// A lexer error with its location in the source text.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("{kind}")]
pub struct LexError {
    /// WHERE the error occurred.
    pub span: Span,
    /// WHAT went wrong.
    pub kind: LexErrorKind,
}

impl LexError {
    #[cold]
    pub fn no_match(span: Span) -> Self {
        LexError {
            span,
            kind: LexErrorKind::NoMatch {
                position: span.start,
            },
        }
    }

    /// `len` is the stored text length, which excludes a register's `$`.
    #[cold]
    pub fn token_too_long(span: Span, len: usize) -> Self {
        LexError {
            span,
            kind: LexErrorKind::TokenTooLong { len },
        }
    }

    #[cold]
    pub fn too_many_tokens(span: Span) -> Self {
        LexError {
            span,
            kind: LexErrorKind::TooManyTokens,
        }
    }

    /// Byte offset of the offending input.
    #[inline]
    pub fn position(&self) -> u32 {
        self.span.start
    }

    /// Whether this error reflects an internal limit rather than bad input.
    ///
    /// Callers should abort the command instead of offering a retry.
    pub fn is_fatal(&self) -> bool {
        matches!(self.kind, LexErrorKind::TooManyTokens)
    }

    /// Render the error with a caret under the offending position.
    ///
    /// ```text
    /// no match at position 2
    /// 1+@
    ///   ^
    /// ```
    pub fn render(&self, source: &str) -> String {
        let mut out = String::new();
        let column = source
            .get(..self.position() as usize)
            .map_or(0, |prefix| prefix.chars().count());
        // Writing to a String cannot fail.
        let _ = writeln!(out, "{self}");
        let _ = writeln!(out, "{source}");
        let _ = write!(out, "{:column$}^", "");
        out
    }
}
