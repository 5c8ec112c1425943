//! Architectural state.
//!
//! This module contains the machine's programmer-visible registers:
//! 1. **GPRs:** The eight general-purpose registers, `R7` doubling as the stack pointer.
//! 2. **Flags:** The `00000LGE` condition-code register.

/// Flags register.
pub mod flags;

/// General-Purpose Register file implementation.
pub mod gpr;
