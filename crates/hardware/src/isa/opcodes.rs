//! LS-8 Opcodes.
//!
//! Opcode bytes are laid out as `AABCDDDD`: `AA` is the operand count, `B`
//! marks ALU instructions, `C` marks instructions that set the PC, and `DDDD`
//! identifies the instruction.

/// Halt the machine.
pub const HLT: u8 = 0b0000_0001;

/// Load immediate: `LDI reg, imm`.
pub const LDI: u8 = 0b1000_0010;

/// Print register: `PRN reg`.
pub const PRN: u8 = 0b0100_0111;

/// Push register onto the stack.
pub const PUSH: u8 = 0b0100_0101;

/// Pop the stack into a register.
pub const POP: u8 = 0b0100_0110;

/// Call the subroutine whose address is in a register.
pub const CALL: u8 = 0b0101_0000;

/// Return from subroutine.
pub const RET: u8 = 0b0001_0001;

/// Unconditional jump to the address in a register.
pub const JMP: u8 = 0b0101_0100;

/// Jump if the equal flag is set.
pub const JEQ: u8 = 0b0101_0101;

/// Jump if the equal flag is clear.
pub const JNE: u8 = 0b0101_0110;

/// `ADD a, b`
pub const ADD: u8 = 0b1010_0000;

/// `SUB a, b`
pub const SUB: u8 = 0b1010_0001;

/// `MUL a, b`
pub const MUL: u8 = 0b1010_0010;

/// `DIV a, b`
pub const DIV: u8 = 0b1010_0011;

/// `MOD a, b`
pub const MOD: u8 = 0b1010_0100;

/// `INC a`
pub const INC: u8 = 0b0110_0101;

/// `DEC a`
pub const DEC: u8 = 0b0110_0110;

/// Compare two registers and set the flags.
pub const CMP: u8 = 0b1010_0111;

/// `AND a, b`
pub const AND: u8 = 0b1010_1000;

/// `NOT a`
pub const NOT: u8 = 0b0110_1001;

/// `OR a, b`
pub const OR: u8 = 0b1010_1010;

/// `XOR a, b`
pub const XOR: u8 = 0b1010_1011;

/// `SHL a, b`
pub const SHL: u8 = 0b1010_1100;

/// `SHR a, b`
pub const SHR: u8 = 0b1010_1101;
