//! Recursive evaluation over token ranges.
//!
//! There is no parse tree. A half-open index range over the token slice
//! stands in for a node: a single operand is a leaf, a range wrapped by one
//! matching pair of parentheses is its interior, and anything else is split
//! at its main operator.
//!
//! # Main operator
//!
//! The operator outside every parenthesized group with the largest
//! precedence rank (the loosest binding). Among binary operators of equal
//! rank the rightmost wins, which makes `10-5-3` split as `(10-5)-3`. Among
//! dereferences the leftmost wins, so `**a` reads `*(*a)`.

use crate::errors::{
    bad_address, expected_operand, literal_overflow, missing_operand, missing_operator,
    unbalanced_parens, unknown_register, EvalError, EvalResult,
};
use crate::machine::Machine;
use crate::operators::evaluate_binary;
use sdb_ir::{Operator, Span, Token, TokenKind, UnaryOp, Word};
use std::ops::Range;

/// Evaluates ranges of one token sequence against one machine.
///
/// Borrowing both for the duration of a call keeps every evaluation
/// independent: there is no scratch state to reset between calls.
pub struct Evaluator<'a, M: Machine + ?Sized> {
    tokens: &'a [Token],
    machine: &'a M,
}

impl<'a, M: Machine + ?Sized> Evaluator<'a, M> {
    pub fn new(tokens: &'a [Token], machine: &'a M) -> Self {
        Evaluator { tokens, machine }
    }

    /// Evaluate the inclusive token range `[p, q]`.
    ///
    /// `p > q` is an empty range and fails with `MissingOperand`.
    pub fn eval(&self, p: usize, q: usize) -> EvalResult {
        if p > q {
            return Err(missing_operand(self.point_at(p)));
        }
        self.eval_range(p..q.saturating_add(1))
    }

    #[tracing::instrument(level = "trace", skip(self), err)]
    fn eval_range(&self, range: Range<usize>) -> EvalResult {
        let Range { start, end } = range;
        if start >= end {
            return Err(missing_operand(self.point_at(start)));
        }
        if end > self.tokens.len() {
            return Err(missing_operand(self.point_at(self.tokens.len())));
        }

        if end - start == 1 {
            return self.eval_operand(&self.tokens[start]);
        }

        if self.check_parentheses(start, end - 1) {
            return self.eval_range(start + 1..end - 1);
        }

        let op_index = self.find_main_op(start, end - 1)?;
        let op_token = &self.tokens[op_index];
        let Some(op) = op_token.kind.operator() else {
            return Err(missing_operator(self.span_of(start, end - 1)));
        };
        tracing::trace!(op = %op, index = op_index, "split");

        match op {
            Operator::Unary(UnaryOp::Deref) => {
                if op_index != start {
                    return Err(missing_operator(self.span_of(start, op_index)));
                }
                let addr = self.eval_range(op_index + 1..end)?;
                self.machine
                    .translate_and_read(addr)
                    .map_err(|e| bad_address(e.addr, self.span_of(start, end - 1)))
            }
            Operator::Binary(bin) => {
                let left = self.eval_range(start..op_index)?;
                let right = self.eval_range(op_index + 1..end)?;
                evaluate_binary(left, right, bin).map_err(|e| e.with_span(op_token.span))
            }
        }
    }

    /// Decode a literal or resolve a register.
    fn eval_operand(&self, token: &Token) -> EvalResult {
        match token.kind {
            TokenKind::BinLit | TokenKind::HexLit | TokenKind::DecLit => {
                decode_literal(token).ok_or_else(|| literal_overflow(&token.text, token.span))
            }
            TokenKind::Register => self
                .machine
                .register_value_of(&token.text)
                .map_err(|e| unknown_register(e.name, token.span)),
            kind => Err(expected_operand(kind, token.span)),
        }
    }

    /// Whether `[p, q]` is exactly one balanced `( ... )` group.
    ///
    /// `(1)+(2)` starts and ends with parentheses but is not wrapped: the
    /// first group closes before `q`.
    pub fn check_parentheses(&self, p: usize, q: usize) -> bool {
        let (Some(first), Some(last)) = (self.tokens.get(p), self.tokens.get(q)) else {
            return false;
        };
        if p >= q || first.kind != TokenKind::LParen || last.kind != TokenKind::RParen {
            return false;
        }

        let mut depth = 0usize;
        for (i, token) in self.tokens[p..=q].iter().enumerate() {
            match token.kind {
                TokenKind::LParen => depth += 1,
                TokenKind::RParen => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        return p + i == q;
                    }
                }
                _ => {}
            }
        }
        false
    }

    /// Locate the main operator of `[p, q]`.
    ///
    /// Parenthesized groups are skipped whole. A `)` without its `(`, or a
    /// `(` left open at `q`, is `UnbalancedParens`; a range with no operator
    /// outside parentheses is `MissingOperator`.
    pub fn find_main_op(&self, p: usize, q: usize) -> Result<usize, EvalError> {
        let mut depth = 0usize;
        let mut best: Option<(usize, u8)> = None;

        for (i, token) in self.tokens.iter().enumerate().take(q.saturating_add(1)).skip(p) {
            match token.kind {
                TokenKind::LParen => depth += 1,
                TokenKind::RParen => {
                    if depth == 0 {
                        return Err(unbalanced_parens(token.span));
                    }
                    depth -= 1;
                }
                _ if depth > 0 => {}
                kind => {
                    let Some(op) = kind.operator() else {
                        continue;
                    };
                    let rank = op.precedence();
                    let replace = match best {
                        None => true,
                        Some((_, best_rank)) if rank > best_rank => true,
                        // Rightmost binary operator keeps left associativity;
                        // prefix operators nest right to left, so keep the first.
                        Some((_, best_rank)) if rank == best_rank => {
                            matches!(op, Operator::Binary(_))
                        }
                        Some(_) => false,
                    };
                    if replace {
                        best = Some((i, rank));
                    }
                }
            }
        }

        if depth != 0 {
            return Err(unbalanced_parens(self.span_of(p, q)));
        }
        best.map(|(i, _)| i)
            .ok_or_else(|| missing_operator(self.span_of(p, q)))
    }

    /// Span covering tokens `[p, q]`.
    fn span_of(&self, p: usize, q: usize) -> Span {
        match (self.tokens.get(p), self.tokens.get(q)) {
            (Some(first), Some(last)) => first.span.merge(last.span),
            (Some(first), None) => first.span,
            _ => self.point_at(p),
        }
    }

    /// Zero-length span where token `index` starts, or after the last token.
    fn point_at(&self, index: usize) -> Span {
        match self.tokens.get(index) {
            Some(token) => Span::point(token.span.start),
            None => self
                .tokens
                .last()
                .map_or(Span::DUMMY, |t| Span::point(t.span.end)),
        }
    }
}

/// Decode literal text in its radix, `None` on overflow.
fn decode_literal(token: &Token) -> Option<Word> {
    let radix = token.kind.radix()?;
    let digits = if radix == 10 {
        token.text.as_str()
    } else {
        token.text.get(2..)?
    };
    Word::from_str_radix(digits, radix).ok()
}
