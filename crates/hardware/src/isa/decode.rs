//! Opcode decoding.
//!
//! This module maps opcode bytes onto the closed [`Opcode`] enumeration. It provides:
//! 1. **Dispatch Mapping:** A static byte-to-variant table; unknown bytes decode to `None`.
//! 2. **Encoding Hints:** Operand count, instruction length, ALU and PC-setting bits.
//! 3. **Mnemonics:** The assembler name of each instruction.

use super::opcodes as op;
use crate::common::constants::{ALU_FLAG_MASK, OPERAND_COUNT_SHIFT, SETS_PC_MASK};

/// Every instruction the machine executes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Opcode {
    /// Halt.
    Hlt = op::HLT,
    /// Load immediate.
    Ldi = op::LDI,
    /// Print register.
    Prn = op::PRN,
    /// Push register.
    Push = op::PUSH,
    /// Pop into register.
    Pop = op::POP,
    /// Call subroutine.
    Call = op::CALL,
    /// Return from subroutine.
    Ret = op::RET,
    /// Unconditional jump.
    Jmp = op::JMP,
    /// Jump if equal.
    Jeq = op::JEQ,
    /// Jump if not equal.
    Jne = op::JNE,
    /// Add.
    Add = op::ADD,
    /// Subtract.
    Sub = op::SUB,
    /// Multiply.
    Mul = op::MUL,
    /// Divide.
    Div = op::DIV,
    /// Modulo.
    Mod = op::MOD,
    /// Increment.
    Inc = op::INC,
    /// Decrement.
    Dec = op::DEC,
    /// Compare.
    Cmp = op::CMP,
    /// Bitwise and.
    And = op::AND,
    /// Bitwise not.
    Not = op::NOT,
    /// Bitwise or.
    Or = op::OR,
    /// Bitwise xor.
    Xor = op::XOR,
    /// Shift left.
    Shl = op::SHL,
    /// Shift right.
    Shr = op::SHR,
}

impl Opcode {
    /// All decodable opcodes.
    pub const ALL: [Self; 24] = [
        Self::Hlt,
        Self::Ldi,
        Self::Prn,
        Self::Push,
        Self::Pop,
        Self::Call,
        Self::Ret,
        Self::Jmp,
        Self::Jeq,
        Self::Jne,
        Self::Add,
        Self::Sub,
        Self::Mul,
        Self::Div,
        Self::Mod,
        Self::Inc,
        Self::Dec,
        Self::Cmp,
        Self::And,
        Self::Not,
        Self::Or,
        Self::Xor,
        Self::Shl,
        Self::Shr,
    ];

    /// Decodes an opcode byte.
    ///
    /// Returns `None` for bytes with no dispatch entry.
    pub const fn from_u8(byte: u8) -> Option<Self> {
        Some(match byte {
            op::HLT => Self::Hlt,
            op::LDI => Self::Ldi,
            op::PRN => Self::Prn,
            op::PUSH => Self::Push,
            op::POP => Self::Pop,
            op::CALL => Self::Call,
            op::RET => Self::Ret,
            op::JMP => Self::Jmp,
            op::JEQ => Self::Jeq,
            op::JNE => Self::Jne,
            op::ADD => Self::Add,
            op::SUB => Self::Sub,
            op::MUL => Self::Mul,
            op::DIV => Self::Div,
            op::MOD => Self::Mod,
            op::INC => Self::Inc,
            op::DEC => Self::Dec,
            op::CMP => Self::Cmp,
            op::AND => Self::And,
            op::NOT => Self::Not,
            op::OR => Self::Or,
            op::XOR => Self::Xor,
            op::SHL => Self::Shl,
            op::SHR => Self::Shr,
            _ => return None,
        })
    }

    /// Returns the raw opcode byte.
    #[inline]
    pub const fn byte(self) -> u8 {
        self as u8
    }

    /// Number of operand bytes following the opcode (0-2).
    #[inline]
    pub const fn operand_count(self) -> usize {
        (self.byte() >> OPERAND_COUNT_SHIFT) as usize
    }

    /// Total instruction length in bytes (1-3).
    #[inline]
    pub const fn size(self) -> usize {
        1 + self.operand_count()
    }

    /// Returns `true` if the instruction is executed by the ALU.
    #[inline]
    pub const fn is_alu(self) -> bool {
        self.byte() & ALU_FLAG_MASK != 0
    }

    /// Returns `true` if the instruction assigns the PC itself.
    #[inline]
    pub const fn sets_pc(self) -> bool {
        self.byte() & SETS_PC_MASK != 0
    }

    /// Assembler mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Hlt => "HLT",
            Self::Ldi => "LDI",
            Self::Prn => "PRN",
            Self::Push => "PUSH",
            Self::Pop => "POP",
            Self::Call => "CALL",
            Self::Ret => "RET",
            Self::Jmp => "JMP",
            Self::Jeq => "JEQ",
            Self::Jne => "JNE",
            Self::Add => "ADD",
            Self::Sub => "SUB",
            Self::Mul => "MUL",
            Self::Div => "DIV",
            Self::Mod => "MOD",
            Self::Inc => "INC",
            Self::Dec => "DEC",
            Self::Cmp => "CMP",
            Self::And => "AND",
            Self::Not => "NOT",
            Self::Or => "OR",
            Self::Xor => "XOR",
            Self::Shl => "SHL",
            Self::Shr => "SHR",
        }
    }
}

impl TryFrom<u8> for Opcode {
    type Error = u8;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        Self::from_u8(byte).ok_or(byte)
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.mnemonic())
    }
}
