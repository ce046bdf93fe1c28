//! Reclassify `*` as prefix dereference where the left context demands it.
//!
//! `*` is multiplication after an operand and dereference anywhere an
//! operand is expected to start: at the beginning of the expression, after
//! `(`, after a binary operator, or after another dereference. The pass runs
//! once, left to right, looking one token back and never ahead.

use sdb_ir::{TokenKind, TokenList};

/// Rewrite `Star` tokens in prefix position to `Deref`, in place.
pub fn disambiguate(tokens: &mut TokenList) {
    let tokens = tokens.as_mut_slice();
    let mut prev: Option<TokenKind> = None;

    for token in tokens.iter_mut() {
        if token.kind == TokenKind::Star && expects_operand(prev) {
            token.kind = TokenKind::Deref;
        }
        prev = Some(token.kind);
    }
}

/// Whether the token after `prev` must begin an operand.
#[inline]
fn expects_operand(prev: Option<TokenKind>) -> bool {
    match prev {
        None => true,
        Some(kind) => {
            kind == TokenKind::LParen || kind == TokenKind::Deref || kind.is_binary_op()
        }
    }
}
