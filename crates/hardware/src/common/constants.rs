//! Global Machine Constants.
//!
//! This module defines the fixed dimensions of the simulated machine. It includes:
//! 1. **Memory Constants:** Capacity of the flat byte-addressable RAM.
//! 2. **Register Constants:** Register file size and the reserved stack-pointer slot.
//! 3. **Encoding Constants:** Bit fields of the opcode byte used as decode hints.

/// Capacity of main memory in bytes.
pub const MEMORY_SIZE: usize = 256;

/// Number of general-purpose registers (`R0`-`R7`).
pub const REGISTER_COUNT: usize = 8;

/// Register index reserved for the stack pointer (`R7`).
pub const SP: usize = 7;

/// Value the stack pointer holds after reset.
///
/// The stack grows downwards from here; addresses `0xF4..=0xFF` are left
/// untouched by a fresh stack.
pub const INITIAL_SP: u8 = 0xF4;

/// Shift that moves the operand-count field (bits 7-6) into bits 1-0.
pub const OPERAND_COUNT_SHIFT: u8 = 6;

/// Bit set in opcodes executed by the ALU.
pub const ALU_FLAG_MASK: u8 = 0b0010_0000;

/// Bit set in opcodes that assign the program counter themselves.
pub const SETS_PC_MASK: u8 = 0b0001_0000;
