//! Binary operator semantics on machine words.
//!
//! `+ - *` wrap like the guest's unsigned registers. `/` truncates and
//! refuses a zero divisor. Comparisons and `&&` produce `1` or `0`.

use crate::errors::{division_by_zero, EvalResult};
use sdb_ir::{BinaryOp, Word};

/// Combine two already-evaluated operands.
pub fn evaluate_binary(left: Word, right: Word, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Add => Ok(left.wrapping_add(right)),
        BinaryOp::Sub => Ok(left.wrapping_sub(right)),
        BinaryOp::Mul => Ok(left.wrapping_mul(right)),
        BinaryOp::Div => left.checked_div(right).ok_or_else(division_by_zero),
        BinaryOp::Eq => Ok(Word::from(left == right)),
        BinaryOp::NotEq => Ok(Word::from(left != right)),
        BinaryOp::And => Ok(Word::from(left != 0 && right != 0)),
    }
}
