//! SDB Eval - evaluates debugger expressions to machine words.
//!
//! # Architecture
//!
//! - `Machine`: the register file and guest memory, supplied by the simulator
//! - `Evaluator`: recursion over inclusive token ranges of a lexed expression
//! - `evaluate_binary`: word arithmetic and comparisons
//! - [`expr`]: text in, word out
//!
//! Evaluation is synchronous and reentrant. Each call lexes into its own
//! `TokenList` and borrows it immutably, so concurrent callers share nothing.

pub mod errors;
mod evaluator;
mod machine;
mod operators;

#[cfg(test)]
mod test_helpers;

pub use errors::{EvalError, EvalErrorKind, EvalResult, ExprError};
pub use evaluator::Evaluator;
pub use machine::{GuestMemory, Machine, OutOfRange, RegisterFile, UnknownRegister};
pub use operators::evaluate_binary;

use errors::empty_expression;
use sdb_ir::{Token, Word};

/// Evaluate the inclusive range `[p, q]` of an already lexed expression.
pub fn evaluate<M: Machine + ?Sized>(tokens: &[Token], p: usize, q: usize, machine: &M) -> EvalResult {
    Evaluator::new(tokens, machine).eval(p, q)
}

/// Lex, disambiguate and evaluate `source`.
///
/// Lexing failures keep their position; blank input is `EmptyExpression`.
pub fn expr<M: Machine + ?Sized>(source: &str, machine: &M) -> Result<Word, ExprError> {
    let tokens = sdb_lexer::lex(source)?;
    if tokens.is_empty() {
        return Err(empty_expression().into());
    }
    let value = evaluate(tokens.as_slice(), 0, tokens.len() - 1, machine)?;
    tracing::debug!(source, value, "evaluated");
    Ok(value)
}

#[cfg(test)]
mod tests;
