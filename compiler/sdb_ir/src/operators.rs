//! Binary and unary operators of debugger expressions.
//!
//! Precedence ranks follow the convention "smaller number binds tighter":
//!
//! | rank | operators   |
//! |------|-------------|
//! | 1    | `*` (deref) |
//! | 2    | `*` `/`     |
//! | 3    | `+` `-`     |
//! | 4    | `==` `!=`   |
//! | 5    | `&&`        |

use std::fmt;

/// Binary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,

    // Comparison
    Eq,
    NotEq,

    // Logical
    And,
}

impl BinaryOp {
    /// Returns the source-level symbol for this operator.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::And => "&&",
        }
    }

    /// Returns the precedence rank of this operator.
    ///
    /// Higher number = lower precedence (binds less tightly).
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Mul | Self::Div => 2,
            Self::Add | Self::Sub => 3,
            Self::Eq | Self::NotEq => 4,
            Self::And => 5,
        }
    }
}

/// Unary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOp {
    /// Prefix `*`: read the word stored at a guest address.
    Deref,
}

impl UnaryOp {
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Deref => "*",
        }
    }

    pub const fn precedence(self) -> u8 {
        match self {
            Self::Deref => 1,
        }
    }
}

/// Either kind of operator, as found at a token position.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Operator {
    Binary(BinaryOp),
    Unary(UnaryOp),
}

impl Operator {
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Binary(op) => op.precedence(),
            Self::Unary(op) => op.precedence(),
        }
    }

    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Binary(op) => op.as_symbol(),
            Self::Unary(op) => op.as_symbol(),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}
