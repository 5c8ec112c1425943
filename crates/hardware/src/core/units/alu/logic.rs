//! ALU bitwise operations.
//!
//! Implements AND, OR, XOR, and NOT on 8-bit operands.

use super::AluOp;
use crate::common::error::AluError;

/// Executes a bitwise operation.
///
/// # Arguments
///
/// * `op` - The ALU operation to perform (must be a logic variant).
/// * `a`  - First operand.
/// * `b`  - Second operand (ignored by `Not`).
///
/// # Returns
///
/// The result. Non-logic opcodes yield `AluError::Unsupported`.
pub fn execute(op: AluOp, a: u8, b: u8) -> Result<u8, AluError> {
    match op {
        AluOp::And => Ok(a & b),
        AluOp::Or => Ok(a | b),
        AluOp::Xor => Ok(a ^ b),
        AluOp::Not => Ok(!a),
        _ => Err(AluError::Unsupported(op)),
    }
}
