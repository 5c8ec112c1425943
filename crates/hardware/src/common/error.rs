//! Error definitions.
//!
//! This module defines every failure the simulator can report. It provides:
//! 1. **Unit Errors:** Faults raised by memory, the register file, and the ALU.
//! 2. **Execution Errors:** The run-level error, annotated with the faulting program counter.
//! 3. **Load Errors:** Failures while reading or parsing a program image.
//!
//! None of these are recoverable inside the instruction loop; they abort the
//! run and are handed to the caller, which decides how to report them.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::core::units::alu::AluOp;

/// Memory access fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MemoryError {
    /// The address lies outside the memory extent.
    #[error("address {address:#x} is outside memory")]
    OutOfBounds {
        /// The offending address.
        address: usize,
    },
}

/// Register file access fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RegisterError {
    /// The index does not name one of the eight registers.
    #[error("register index {index} is out of range")]
    InvalidRegister {
        /// The offending register index.
        index: usize,
    },
}

/// ALU fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AluError {
    /// The ALU was asked to perform an operation it does not implement.
    ///
    /// Indicates the decoder and the ALU disagree about the operation set.
    #[error("unsupported ALU operation {0:?}")]
    Unsupported(AluOp),
    /// Division or modulo by zero.
    #[error("division by zero")]
    DivisionByZero,
}

/// Fatal error raised while executing a program.
#[derive(Debug, Error)]
pub enum ExecError {
    /// The byte at `pc` has no dispatch entry.
    #[error("unknown opcode {opcode:#010b} at pc {pc:#04x}")]
    UnknownOpcode {
        /// The undecodable opcode byte.
        opcode: u8,
        /// Address the opcode was fetched from.
        pc: usize,
    },
    /// A memory access faulted.
    #[error("memory fault at pc {pc:#04x}: {source}")]
    Memory {
        /// Program counter of the faulting instruction.
        pc: usize,
        /// Underlying memory error.
        #[source]
        source: MemoryError,
    },
    /// An operand named a register outside the register file.
    #[error("register fault at pc {pc:#04x}: {source}")]
    Register {
        /// Program counter of the faulting instruction.
        pc: usize,
        /// Underlying register error.
        #[source]
        source: RegisterError,
    },
    /// The ALU rejected the operation.
    #[error("ALU fault at pc {pc:#04x}: {source}")]
    Alu {
        /// Program counter of the faulting instruction.
        pc: usize,
        /// Underlying ALU error.
        #[source]
        source: AluError,
    },
    /// The run exceeded the configured instruction budget.
    #[error("step limit of {limit} instructions exceeded")]
    StepLimitExceeded {
        /// The configured limit.
        limit: u64,
    },
}

impl ExecError {
    /// Returns the program counter the error was raised at, if it has one.
    pub const fn pc(&self) -> Option<usize> {
        match self {
            Self::UnknownOpcode { pc, .. }
            | Self::Memory { pc, .. }
            | Self::Register { pc, .. }
            | Self::Alu { pc, .. } => Some(*pc),
            Self::StepLimitExceeded { .. } => None,
        }
    }
}

/// Error raised while loading a program image.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The program file does not exist.
    #[error("{} not found", .path.display())]
    NotFound {
        /// Path that was requested.
        path: PathBuf,
    },
    /// The program file exists but could not be read.
    #[error("could not read {}: {source}", .path.display())]
    Io {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// A line is not an 8-bit binary literal.
    #[error("line {line}: `{text}` is not an 8-bit binary value")]
    Parse {
        /// 1-based line number.
        line: usize,
        /// The offending text, comments stripped.
        text: String,
    },
    /// The program does not fit in memory.
    #[error("program is {len} bytes but memory holds {capacity}")]
    ProgramTooLarge {
        /// Program length in bytes.
        len: usize,
        /// Memory capacity in bytes.
        capacity: usize,
    },
}

impl LoadError {
    /// Classifies an I/O failure on `path`, separating a missing file from other errors.
    pub fn from_io(path: &std::path::Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            Self::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    }
}
