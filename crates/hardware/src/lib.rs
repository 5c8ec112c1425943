//! LS-8 computer simulator library.
//!
//! This crate implements a small stored-program 8-bit computer:
//! 1. **Core:** The fetch-decode-execute engine, register file, flags, and ALU.
//! 2. **ISA:** Opcode definitions, decoding, and disassembly.
//! 3. **SoC:** 256 bytes of RAM and the output sink `PRN` writes to.
//! 4. **Simulation:** Program loader, configuration, simulator facade, and statistics.
//!
//! ```
//! use ls8sim_core::{Config, Simulator};
//!
//! let program = ls8sim_core::sim::loader::parse_program(
//!     "10000010\n00000000\n00001000\n\
//!      10000010\n00000001\n00001001\n\
//!      10100010\n00000000\n00000001\n\
//!      01000111\n00000000\n\
//!      00000001\n",
//! )?;
//! let mut sim = Simulator::new(&Config::default());
//! sim.load(&program)?;
//! let mut printed: Vec<u8> = Vec::new();
//! let _ = sim.run(&mut printed)?;
//! assert_eq!(printed, vec![72]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

/// Common types and constants (machine dimensions, errors).
pub mod common;
/// Simulator configuration (defaults, JSON loading).
pub mod config;
/// CPU core (engine, registers, flags, ALU).
pub mod core;
/// Instruction set (opcodes, decode, disassembly).
pub mod isa;
/// Program loader and simulator facade.
pub mod sim;
/// Main memory and output sink.
pub mod soc;
/// Execution statistics.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Main CPU type; owns registers, memory, flags, and statistics.
pub use crate::core::Cpu;
/// Top-level simulator facade.
pub use crate::sim::Simulator;
