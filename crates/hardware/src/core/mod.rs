//! Core processor implementation.
//!
//! This module contains the execution engine, the architectural state it
//! manipulates, and the ALU.

/// Architectural state (register file, flags).
pub mod arch;

/// CPU core implementation and execution loop.
pub mod cpu;

/// Execution units (ALU).
pub mod units;

pub use self::cpu::{Cpu, RunState};
