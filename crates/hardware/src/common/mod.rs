//! Common types and constants used throughout the simulator.
//!
//! This module provides the building blocks shared across all components:
//! 1. **Constants:** Memory capacity, register layout, and opcode bit fields.
//! 2. **Error Handling:** Typed errors for memory, registers, the ALU, execution, and loading.

/// Machine-wide constants.
pub mod constants;

/// Error types.
pub mod error;

pub use constants::{INITIAL_SP, MEMORY_SIZE, REGISTER_COUNT, SP};
pub use error::{AluError, ExecError, LoadError, MemoryError, RegisterError};
