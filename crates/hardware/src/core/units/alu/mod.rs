//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the 8-bit integer ALU. Every result wraps modulo 256,
//! matching the width of the registers it is written back to.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub, Mul, Div, Mod, Inc, Dec
//! - [`logic`]:      And, Or, Xor, Not
//! - [`shifts`]:     Shl, Shr

/// Integer arithmetic operations (add, subtract, multiply, divide).
pub mod arithmetic;

/// Bitwise logical operations (and, or, xor, not).
pub mod logic;

/// Shift operations (shl, shr).
pub mod shifts;

use crate::common::error::AluError;
use crate::core::arch::flags::Flags;

/// Closed set of operations the ALU can perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AluOp {
    /// `a + b`
    Add,
    /// `a - b`
    Sub,
    /// `a * b`
    Mul,
    /// `a / b`
    Div,
    /// `a % b`
    Mod,
    /// `a + 1`
    Inc,
    /// `a - 1`
    Dec,
    /// `a & b`
    And,
    /// `a | b`
    Or,
    /// `a ^ b`
    Xor,
    /// `!a`
    Not,
    /// `a << b`
    Shl,
    /// `a >> b`
    Shr,
}

/// Arithmetic Logic Unit for 8-bit register operations.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an ALU operation.
    ///
    /// Dispatches to the appropriate submodule based on the operation type.
    /// Unary operations (`Inc`, `Dec`, `Not`) ignore `b`.
    ///
    /// # Arguments
    ///
    /// * `op` - The ALU operation to perform
    /// * `a`  - First operand, also the destination register's current value
    /// * `b`  - Second operand
    ///
    /// # Returns
    ///
    /// The wrapped 8-bit result, or an [`AluError`] for division by zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use ls8sim_core::core::units::alu::{Alu, AluOp};
    ///
    /// assert_eq!(Alu::execute(AluOp::Mul, 8, 9), Ok(72));
    /// assert_eq!(Alu::execute(AluOp::Add, 255, 2), Ok(1));
    /// assert_eq!(Alu::execute(AluOp::Shl, 0b0000_0011, 2), Ok(0b0000_1100));
    /// ```
    pub fn execute(op: AluOp, a: u8, b: u8) -> Result<u8, AluError> {
        match op {
            AluOp::Add
            | AluOp::Sub
            | AluOp::Mul
            | AluOp::Div
            | AluOp::Mod
            | AluOp::Inc
            | AluOp::Dec => arithmetic::execute(op, a, b),

            AluOp::And | AluOp::Or | AluOp::Xor | AluOp::Not => logic::execute(op, a, b),

            AluOp::Shl | AluOp::Shr => shifts::execute(op, a, b),
        }
    }

    /// Compares two register values and produces the resulting flags.
    pub const fn compare(a: u8, b: u8) -> Flags {
        Flags::compare(a, b)
    }
}
