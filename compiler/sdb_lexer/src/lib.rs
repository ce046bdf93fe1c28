//! SDB Lexer - turns debugger expression text into a `TokenList`.
//!
//! Lexing is two steps:
//! - [`tokenize`] scans left to right with the ordered rule table in
//!   [`rules`], first anchored match wins
//! - [`disambiguate`] reclassifies prefix `*` as dereference
//!
//! [`lex`] runs both. Every call builds a fresh list; nothing is shared
//! between calls.

mod disambiguate;
mod lex_error;
pub mod rules;

pub use disambiguate::disambiguate;
pub use lex_error::{LexError, LexErrorKind};

use rules::{compiled_rules, RuleAction};
use sdb_ir::{Span, Token, TokenKind, TokenList, MAX_TOKEN_TEXT};

/// Scan `source` into tokens without disambiguation.
///
/// Whitespace is consumed silently. Register tokens store the name with the
/// `$` sigil stripped, ready for register lookup.
pub fn tokenize(source: &str) -> Result<TokenList, LexError> {
    let rules = compiled_rules();
    let mut tokens = TokenList::new();
    let mut position = 0;

    while position < source.len() {
        let rest = &source[position..];
        let Some((index, len)) = rules
            .iter()
            .enumerate()
            .find_map(|(i, rule)| rule.match_len(rest).map(|len| (i, len)))
        else {
            let width = rest.chars().next().map_or(1, char::len_utf8);
            return Err(LexError::no_match(Span::from_range(
                position..position + width,
            )));
        };

        let rule = &rules[index].rule;
        let span = Span::from_range(position..position + len);
        let matched = &rest[..len];
        tracing::trace!(
            rule = index,
            pattern = rule.pattern,
            position,
            len,
            text = matched,
            "match"
        );
        position += len;

        let RuleAction::Emit(kind) = rule.action else {
            continue;
        };

        let token = if kind.is_operand() {
            let text = if kind == TokenKind::Register {
                matched.strip_prefix('$').unwrap_or(matched)
            } else {
                matched
            };
            if text.len() > MAX_TOKEN_TEXT {
                return Err(LexError::token_too_long(span, text.len()));
            }
            Token::with_text(kind, text, span)
        } else {
            Token::new(kind, span)
        };

        if tokens.try_push(token).is_err() {
            tracing::error!(position = span.start, "token buffer full");
            return Err(LexError::too_many_tokens(span));
        }
    }

    Ok(tokens)
}

/// Tokenize and disambiguate: the token sequence the evaluator consumes.
pub fn lex(source: &str) -> Result<TokenList, LexError> {
    let mut tokens = tokenize(source)?;
    disambiguate(&mut tokens);
    Ok(tokens)
}
