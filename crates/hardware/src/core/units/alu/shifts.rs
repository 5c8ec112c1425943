//! ALU shift operations.
//!
//! The shift amount is taken modulo the register width, so shifting by 8 or
//! more never panics; `SHL R0, R1` with `R1 = 9` shifts by one.

use super::AluOp;
use crate::common::error::AluError;

/// Register width in bits.
const WIDTH_BITS: u32 = u8::BITS;

/// Executes a shift operation.
///
/// # Arguments
///
/// * `op` - `Shl` or `Shr`.
/// * `a`  - Value to shift.
/// * `b`  - Shift amount.
pub fn execute(op: AluOp, a: u8, b: u8) -> Result<u8, AluError> {
    let amount = u32::from(b) % WIDTH_BITS;
    match op {
        AluOp::Shl => Ok(a << amount),
        AluOp::Shr => Ok(a >> amount),
        _ => Err(AluError::Unsupported(op)),
    }
}
