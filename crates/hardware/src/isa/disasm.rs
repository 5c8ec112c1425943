//! Instruction Disassembler.
//!
//! Converts the bytes of one instruction into assembler text for debug
//! tracing, logging, and test diagnostics.
//!
//! # Usage
//!
//! ```
//! use ls8sim_core::isa::disasm::disassemble;
//! assert_eq!(disassemble(&[0b1000_0010, 0, 8]), "LDI R0, 8");
//! assert_eq!(disassemble(&[0b1010_0010, 0, 1]), "MUL R0, R1");
//! ```

use super::decode::Opcode;

/// Renders an instruction as text.
///
/// `bytes` starts at the opcode; missing operand bytes render as `?`.
/// Undecodable opcodes render as `.byte 0bXXXXXXXX`.
pub fn disassemble(bytes: &[u8]) -> String {
    let Some(&first) = bytes.first() else {
        return String::from("<empty>");
    };
    let Some(opcode) = Opcode::from_u8(first) else {
        return format!(".byte {first:#010b}");
    };

    let operand = |i: usize| -> String {
        bytes
            .get(1 + i)
            .map_or_else(|| String::from("?"), u8::to_string)
    };
    let reg = |i: usize| format!("R{}", operand(i));

    match opcode {
        Opcode::Hlt | Opcode::Ret => opcode.mnemonic().to_owned(),
        Opcode::Ldi => format!("LDI {}, {}", reg(0), operand(1)),
        _ => match opcode.operand_count() {
            1 => format!("{} {}", opcode.mnemonic(), reg(0)),
            _ => format!("{} {}, {}", opcode.mnemonic(), reg(0), reg(1)),
        },
    }
}
