//! Token types produced by the SDB lexer.
//!
//! Tokens are produced left to right and stored in a `TokenList` whose
//! capacity is fixed at [`TOKEN_CAPACITY`]. Debugger expressions are short
//! command arguments, so running out of room is treated as an internal
//! limit being hit rather than something to grow past.

use crate::{BinaryOp, Operator, Span, UnaryOp};
use smallvec::SmallVec;
use std::fmt;

/// Maximum number of tokens a single expression may produce.
pub const TOKEN_CAPACITY: usize = 32;

/// Maximum length in bytes of the text stored for a literal or register token.
pub const MAX_TOKEN_TEXT: usize = 31;

/// Token kinds.
///
/// `Deref` is never produced by the lexer: it is derived from `Star` by the
/// disambiguation pass once the left context is known.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    // Operators
    Plus,
    Minus,
    Star,
    Slash,
    EqEq,
    NotEq,
    AndAnd,

    // Delimiters
    LParen,
    RParen,

    // Operands
    BinLit,
    DecLit,
    HexLit,
    Register,

    /// Prefix dereference (reclassified `Star`).
    Deref,
}

impl TokenKind {
    /// Returns the operator this token denotes, if any.
    pub const fn operator(self) -> Option<Operator> {
        match self {
            Self::Plus => Some(Operator::Binary(BinaryOp::Add)),
            Self::Minus => Some(Operator::Binary(BinaryOp::Sub)),
            Self::Star => Some(Operator::Binary(BinaryOp::Mul)),
            Self::Slash => Some(Operator::Binary(BinaryOp::Div)),
            Self::EqEq => Some(Operator::Binary(BinaryOp::Eq)),
            Self::NotEq => Some(Operator::Binary(BinaryOp::NotEq)),
            Self::AndAnd => Some(Operator::Binary(BinaryOp::And)),
            Self::Deref => Some(Operator::Unary(UnaryOp::Deref)),
            Self::LParen | Self::RParen | Self::BinLit | Self::DecLit | Self::HexLit
            | Self::Register => None,
        }
    }

    #[inline]
    pub const fn is_binary_op(self) -> bool {
        matches!(self.operator(), Some(Operator::Binary(_)))
    }

    /// Literal or register reference: the only kinds valid as a leaf.
    #[inline]
    pub const fn is_operand(self) -> bool {
        matches!(
            self,
            Self::BinLit | Self::DecLit | Self::HexLit | Self::Register
        )
    }

    /// Radix of a literal kind, `None` for everything else.
    pub const fn radix(self) -> Option<u32> {
        match self {
            Self::BinLit => Some(2),
            Self::DecLit => Some(10),
            Self::HexLit => Some(16),
            _ => None,
        }
    }

    /// Human-readable name for diagnostics.
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Plus => "`+`",
            Self::Minus => "`-`",
            Self::Star => "`*`",
            Self::Slash => "`/`",
            Self::EqEq => "`==`",
            Self::NotEq => "`!=`",
            Self::AndAnd => "`&&`",
            Self::LParen => "`(`",
            Self::RParen => "`)`",
            Self::BinLit => "binary literal",
            Self::DecLit => "decimal literal",
            Self::HexLit => "hex literal",
            Self::Register => "register",
            Self::Deref => "dereference",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A token with its span in the source.
///
/// `text` holds the matched substring for literals (prefix included, e.g.
/// `0x1f`) and the bare register name for registers (sigil stripped). It is
/// empty for operators and parentheses.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
}

impl Token {
    /// Create an operator or parenthesis token.
    #[inline]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token {
            kind,
            text: String::new(),
            span,
        }
    }

    /// Create a literal or register token carrying its text.
    #[inline]
    pub fn with_text(kind: TokenKind, text: &str, span: Span) -> Self {
        debug_assert!(text.len() <= MAX_TOKEN_TEXT, "token text too long");
        Token {
            kind,
            text: text.to_owned(),
            span,
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.text.is_empty() {
            write!(f, "{:?} @ {}", self.kind, self.span)
        } else {
            write!(f, "{:?}({}) @ {}", self.kind, self.text, self.span)
        }
    }
}

/// Returned by [`TokenList::try_push`] when the list is already full.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct CapacityExceeded;

/// Ordered token sequence with room for [`TOKEN_CAPACITY`] tokens.
///
/// Storage is inline, so producing the list for a debugger expression never
/// touches the heap for the tokens themselves.
#[derive(Clone, Default, Eq, PartialEq)]
pub struct TokenList {
    tokens: SmallVec<[Token; TOKEN_CAPACITY]>,
}

impl TokenList {
    pub fn new() -> Self {
        TokenList {
            tokens: SmallVec::new(),
        }
    }

    /// Append a token, refusing once the fixed capacity is reached.
    pub fn try_push(&mut self, token: Token) -> Result<(), CapacityExceeded> {
        if self.tokens.len() >= TOKEN_CAPACITY {
            return Err(CapacityExceeded);
        }
        self.tokens.push(token);
        Ok(())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    #[inline]
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    /// Mutable view used by post-lexing passes that reclassify tokens in place.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [Token] {
        &mut self.tokens
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Token kinds in order, mostly useful for assertions.
    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(|t| t.kind).collect()
    }
}

impl std::ops::Index<usize> for TokenList {
    type Output = Token;

    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl fmt::Debug for TokenList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.tokens.iter()).finish()
    }
}
