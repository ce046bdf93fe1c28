//! SDB IR - data model for the debugger's expression core.
//!
//! This crate contains the types every other `sdb_*` crate agrees on:
//! - `Word`, the simulated machine word
//! - `Span` for byte ranges in expression text
//! - `Token`, `TokenKind` and the fixed-capacity `TokenList`
//! - `BinaryOp` / `UnaryOp` with their precedence ranks
//!
//! No AST is built for debugger expressions. The evaluator works directly on
//! inclusive index ranges over a `TokenList`, so the token sequence is the
//! only intermediate representation.

mod operators;
mod span;
mod token;

pub use operators::{BinaryOp, Operator, UnaryOp};
pub use span::Span;
pub use token::{CapacityExceeded, Token, TokenKind, TokenList, MAX_TOKEN_TEXT, TOKEN_CAPACITY};

/// A simulated machine word.
///
/// Matches the register width of the riscv64 guest: literals, register
/// values and memory reads are all represented in this type.
pub type Word = u64;
