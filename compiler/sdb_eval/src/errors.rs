//! Error types for expression evaluation.
//!
//! `EvalErrorKind` is the typed category; factory functions below are the
//! construction API. Errors never carry a partial value: the first failure
//! in any sub-range ends the whole evaluation.

use sdb_ir::{Span, TokenKind, Word};
use sdb_lexer::LexError;

/// Result of evaluating a token range.
pub type EvalResult = Result<Word, EvalError>;

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalErrorKind {
    #[error("empty expression")]
    EmptyExpression,
    /// A sub-range came out empty, e.g. `1+` or `2**`.
    #[error("missing operand")]
    MissingOperand,
    #[error("missing operator between operands")]
    MissingOperator,
    #[error("expected an operand, found {found}")]
    ExpectedOperand { found: TokenKind },
    #[error("unbalanced parentheses")]
    UnbalancedParens,
    #[error("literal `{text}` does not fit in a machine word")]
    LiteralOverflow { text: String },
    #[error("unknown register `{name}`")]
    UnknownRegister { name: String },
    #[error("cannot read memory at {addr:#x}")]
    BadAddress { addr: Word },
    #[error("division by zero")]
    DivisionByZero,
}

/// An evaluation failure, located in the source text when possible.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind}")]
pub struct EvalError {
    pub kind: EvalErrorKind,
    pub span: Option<Span>,
}

impl EvalError {
    pub fn from_kind(kind: EvalErrorKind) -> Self {
        EvalError { kind, span: None }
    }

    /// Attach `span` unless a more precise one is already present.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        if self.span.is_none() {
            self.span = Some(span);
        }
        self
    }
}

#[cold]
pub fn empty_expression() -> EvalError {
    EvalError::from_kind(EvalErrorKind::EmptyExpression)
}

#[cold]
pub fn missing_operand(span: Span) -> EvalError {
    EvalError::from_kind(EvalErrorKind::MissingOperand).with_span(span)
}

#[cold]
pub fn missing_operator(span: Span) -> EvalError {
    EvalError::from_kind(EvalErrorKind::MissingOperator).with_span(span)
}

#[cold]
pub fn expected_operand(found: TokenKind, span: Span) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ExpectedOperand { found }).with_span(span)
}

#[cold]
pub fn unbalanced_parens(span: Span) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnbalancedParens).with_span(span)
}

#[cold]
pub fn literal_overflow(text: &str, span: Span) -> EvalError {
    EvalError::from_kind(EvalErrorKind::LiteralOverflow {
        text: text.to_owned(),
    })
    .with_span(span)
}

#[cold]
pub fn unknown_register(name: String, span: Span) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnknownRegister { name }).with_span(span)
}

#[cold]
pub fn bad_address(addr: Word, span: Span) -> EvalError {
    EvalError::from_kind(EvalErrorKind::BadAddress { addr }).with_span(span)
}

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

/// Failure of the text-level entry point: lexing or evaluation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExprError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl ExprError {
    pub fn span(&self) -> Option<Span> {
        match self {
            ExprError::Lex(e) => Some(e.span),
            ExprError::Eval(e) => e.span,
        }
    }

    /// Only token-buffer overflow during lexing is fatal.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ExprError::Lex(e) if e.is_fatal())
    }
}
