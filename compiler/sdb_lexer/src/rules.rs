//! The ordered rule table.
//!
//! At each position the lexer tries the rules top to bottom and takes the
//! first one that matches *at* that position. Order is part of the contract:
//! the `0b`/`0x` literal rules sit above the bare decimal rule, otherwise
//! `0x1f` would lex as `0` followed by garbage.

use regex::Regex;
use sdb_ir::TokenKind;
use std::sync::LazyLock;

/// What to do with the text a rule matched.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum RuleAction {
    /// Consume without producing a token (whitespace).
    Skip,
    /// Produce a token of this kind.
    Emit(TokenKind),
}

/// One row of the rule table.
#[derive(Copy, Clone, Debug)]
pub struct Rule {
    pub pattern: &'static str,
    pub action: RuleAction,
}

const fn rule(pattern: &'static str, action: RuleAction) -> Rule {
    Rule { pattern, action }
}

/// Rules in priority order.
pub const RULES: &[Rule] = &[
    rule(r"[ \t]+", RuleAction::Skip),
    rule(r"==", RuleAction::Emit(TokenKind::EqEq)),
    rule(r"!=", RuleAction::Emit(TokenKind::NotEq)),
    rule(r"&&", RuleAction::Emit(TokenKind::AndAnd)),
    rule(r"\+", RuleAction::Emit(TokenKind::Plus)),
    rule(r"-", RuleAction::Emit(TokenKind::Minus)),
    rule(r"\*", RuleAction::Emit(TokenKind::Star)),
    rule(r"/", RuleAction::Emit(TokenKind::Slash)),
    rule(r"\(", RuleAction::Emit(TokenKind::LParen)),
    rule(r"\)", RuleAction::Emit(TokenKind::RParen)),
    rule(r"0[bB][01]+", RuleAction::Emit(TokenKind::BinLit)),
    rule(r"0[xX][0-9a-fA-F]+", RuleAction::Emit(TokenKind::HexLit)),
    rule(r"[0-9]+", RuleAction::Emit(TokenKind::DecLit)),
    rule(r"\$\$?[0-9A-Za-z_]+", RuleAction::Emit(TokenKind::Register)),
];

/// A rule with its pattern compiled and anchored at the start of the input.
pub(crate) struct CompiledRule {
    pub(crate) rule: Rule,
    pub(crate) regex: Regex,
}

impl CompiledRule {
    /// Length of the match starting exactly at the beginning of `rest`.
    #[inline]
    pub(crate) fn match_len(&self, rest: &str) -> Option<usize> {
        self.regex
            .find(rest)
            .map(|m| m.end())
            .filter(|&len| len > 0)
    }
}

/// Rules are used on every keystroke-sized expression, so compile them once.
static COMPILED: LazyLock<Vec<CompiledRule>> = LazyLock::new(|| {
    RULES
        .iter()
        .map(|&rule| {
            let anchored = format!("^(?:{})", rule.pattern);
            let regex = Regex::new(&anchored).unwrap_or_else(|e| {
                panic!("rule table compilation failed: {e}\n{}", rule.pattern)
            });
            CompiledRule { rule, regex }
        })
        .collect()
});

pub(crate) fn compiled_rules() -> &'static [CompiledRule] {
    &COMPILED
}

#[cfg(test)]
mod tests;
