//! Integer operators.
//!
//! The operator set is closed, so dispatch is a plain match over `MathOp`
//! and `CompOp`. Arithmetic wraps on overflow.

use calc_ir::{CompOp, MathOp};

/// Division or modulo with a zero divisor.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct DivisionByZero;

/// Apply one step of a math fold: `acc op rhs`.
///
/// `and`/`or` treat any non-zero integer as true and produce `1` or `0`.
fn apply_math(op: MathOp, acc: i64, rhs: i64) -> Result<i64, DivisionByZero> {
    Ok(match op {
        MathOp::Add => acc.wrapping_add(rhs),
        MathOp::Sub => acc.wrapping_sub(rhs),
        MathOp::Mul => acc.wrapping_mul(rhs),
        MathOp::Div => {
            if rhs == 0 {
                return Err(DivisionByZero);
            }
            acc.wrapping_div(rhs)
        }
        MathOp::Mod => {
            if rhs == 0 {
                return Err(DivisionByZero);
            }
            acc.wrapping_rem(rhs)
        }
        MathOp::And => i64::from(acc != 0 && rhs != 0),
        MathOp::Or => i64::from(acc != 0 || rhs != 0),
    })
}

/// Left fold of `operands` under `op`. A single operand is returned as is.
pub fn fold_math(op: MathOp, operands: &[i64]) -> Result<i64, DivisionByZero> {
    let Some((&first, rest)) = operands.split_first() else {
        return Ok(0);
    };
    rest.iter().try_fold(first, |acc, &rhs| apply_math(op, acc, rhs))
}

pub fn compare(op: CompOp, lhs: i64, rhs: i64) -> bool {
    match op {
        CompOp::Lt => lhs < rhs,
        CompOp::Lte => lhs <= rhs,
        CompOp::Gt => lhs > rhs,
        CompOp::Gte => lhs >= rhs,
        CompOp::Eq => lhs == rhs,
        CompOp::Neq => lhs != rhs,
    }
}
