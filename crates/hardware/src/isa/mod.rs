//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the LS-8 opcode constants, the decoder that maps opcode bytes to
//! the [`Opcode`](decode::Opcode) enumeration, and a disassembler.

/// Instruction decoding and encoding hints.
pub mod decode;

/// Instruction disassembler for debug tracing and diagnostics.
pub mod disasm;

/// Raw opcode byte values.
pub mod opcodes;

pub use decode::Opcode;
