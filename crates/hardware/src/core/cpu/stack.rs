//! Stack access.
//!
//! The stack lives in main memory and grows downwards. Every access goes
//! through the stack pointer held in `R7`; SP arithmetic wraps at 8 bits, so
//! the stack cannot leave the 256-byte address space.

use super::Cpu;
use crate::common::error::ExecError;

impl Cpu {
    /// Decrements SP, then stores `val` at the new top of stack.
    pub(crate) fn push_byte(&mut self, val: u8) -> Result<(), ExecError> {
        let sp = self.regs.sp().wrapping_sub(1);
        self.regs.set_sp(sp);
        self.ram
            .write(usize::from(sp), val)
            .map_err(|source| ExecError::Memory {
                pc: self.pc,
                source,
            })?;
        self.stats.stack_ops += 1;
        self.stats.observe_stack(self.initial_sp, sp);
        Ok(())
    }

    /// Loads the byte at the top of stack, then increments SP.
    pub(crate) fn pop_byte(&mut self) -> Result<u8, ExecError> {
        let sp = self.regs.sp();
        let val = self
            .ram
            .read(usize::from(sp))
            .map_err(|source| ExecError::Memory {
                pc: self.pc,
                source,
            })?;
        self.regs.set_sp(sp.wrapping_add(1));
        self.stats.stack_ops += 1;
        Ok(val)
    }
}
