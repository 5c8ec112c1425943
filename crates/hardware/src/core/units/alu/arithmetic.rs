//! ALU arithmetic operations.
//!
//! Implements addition, subtraction, multiplication, division, and
//! increment/decrement on 8-bit operands. Overflow wraps; division and
//! modulo by zero are reported instead of trapping the host.

use super::AluOp;
use crate::common::error::AluError;

/// Executes an integer arithmetic operation.
///
/// # Arguments
///
/// * `op` - The ALU operation to perform (must be an arithmetic variant).
/// * `a`  - First operand.
/// * `b`  - Second operand (ignored by `Inc` and `Dec`).
///
/// # Returns
///
/// The wrapped result. Non-arithmetic opcodes yield `AluError::Unsupported`.
pub fn execute(op: AluOp, a: u8, b: u8) -> Result<u8, AluError> {
    match op {
        AluOp::Add => Ok(a.wrapping_add(b)),
        AluOp::Sub => Ok(a.wrapping_sub(b)),
        AluOp::Mul => Ok(a.wrapping_mul(b)),
        AluOp::Div => a.checked_div(b).ok_or(AluError::DivisionByZero),
        AluOp::Mod => a.checked_rem(b).ok_or(AluError::DivisionByZero),
        AluOp::Inc => Ok(a.wrapping_add(1)),
        AluOp::Dec => Ok(a.wrapping_sub(1)),
        _ => Err(AluError::Unsupported(op)),
    }
}
