//! General-Purpose Register File.
//!
//! This module implements the eight-entry register file. It performs the following:
//! 1. **Storage:** Maintains registers `R0`-`R7` as fixed-width 8-bit values.
//! 2. **Bounds Checking:** Rejects register indices outside the file.
//! 3. **Stack Pointer:** Exposes `R7` as the stack pointer used by PUSH, POP, CALL, and RET.

use crate::common::constants::{INITIAL_SP, REGISTER_COUNT, SP};
use crate::common::error::RegisterError;

/// General-Purpose Register file.
///
/// Register `R7` doubles as the stack pointer. Nothing stops a program from
/// using it as an ordinary register, but the stack instructions always address
/// memory through it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gpr {
    regs: [u8; REGISTER_COUNT],
}

impl Gpr {
    /// Creates a register file with `R0`-`R6` cleared and the stack pointer at [`INITIAL_SP`].
    pub fn new() -> Self {
        Self::with_sp(INITIAL_SP)
    }

    /// Creates a register file with `R0`-`R6` cleared and the stack pointer at `sp`.
    pub fn with_sp(sp: u8) -> Self {
        let mut regs = [0; REGISTER_COUNT];
        regs[SP] = sp;
        Self { regs }
    }

    /// Reads a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-7).
    ///
    /// # Returns
    ///
    /// The register value, or `InvalidRegister` when `idx` is out of range.
    pub fn read(&self, idx: usize) -> Result<u8, RegisterError> {
        self.regs
            .get(idx)
            .copied()
            .ok_or(RegisterError::InvalidRegister { index: idx })
    }

    /// Writes a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-7).
    /// * `val` - The 8-bit value to store.
    pub fn write(&mut self, idx: usize, val: u8) -> Result<(), RegisterError> {
        let slot = self
            .regs
            .get_mut(idx)
            .ok_or(RegisterError::InvalidRegister { index: idx })?;
        *slot = val;
        Ok(())
    }

    /// Returns the stack pointer (`R7`).
    #[inline]
    pub const fn sp(&self) -> u8 {
        self.regs[SP]
    }

    /// Sets the stack pointer (`R7`).
    #[inline]
    pub const fn set_sp(&mut self, val: u8) {
        self.regs[SP] = val;
    }

    /// Returns a snapshot of all eight registers.
    pub const fn snapshot(&self) -> [u8; REGISTER_COUNT] {
        self.regs
    }

    /// Formats all registers as space-separated two-digit hex values.
    pub fn dump(&self) -> String {
        self.regs
            .iter()
            .map(|r| format!("{r:02X}"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for Gpr {
    fn default() -> Self {
        Self::new()
    }
}
