//! Instruction handlers.
//!
//! Each handler reads its operand bytes relative to the current PC. Handlers
//! for instructions without the PC-setting bit leave the PC alone and let the
//! engine advance it; control-transfer handlers assign it themselves.

use super::{Cpu, RunState};
use crate::common::error::{ExecError, MemoryError};
use crate::core::units::alu::{Alu, AluOp};
use crate::isa::Opcode;
use crate::soc::traits::Output;

impl Cpu {
    pub(crate) fn op_hlt(&mut self) {
        self.state = RunState::Halted;
    }

    /// `LDI reg, imm`
    pub(crate) fn op_ldi(&mut self) -> Result<(), ExecError> {
        let reg = self.operand(0)?;
        let imm = self.operand(1)?;
        self.set_reg(reg, imm)
    }

    /// `PRN reg`
    pub(crate) fn op_prn(&mut self, out: &mut dyn Output) -> Result<(), ExecError> {
        let value = self.reg(self.operand(0)?)?;
        out.emit(value);
        self.stats.values_printed += 1;
        Ok(())
    }

    /// `PUSH reg`
    pub(crate) fn op_push(&mut self) -> Result<(), ExecError> {
        let value = self.reg(self.operand(0)?)?;
        self.push_byte(value)
    }

    /// `POP reg`
    pub(crate) fn op_pop(&mut self) -> Result<(), ExecError> {
        let reg = self.operand(0)?;
        // Validate the destination before SP moves.
        let _ = self.reg(reg)?;
        let value = self.pop_byte()?;
        self.set_reg(reg, value)
    }

    /// `CALL reg`: pushes the address of the next instruction, then jumps.
    pub(crate) fn op_call(&mut self) -> Result<(), ExecError> {
        let target = self.reg(self.operand(0)?)?;
        let next = self.pc + Opcode::Call.size();
        let ret = u8::try_from(next).map_err(|_| ExecError::Memory {
            pc: self.pc,
            source: MemoryError::OutOfBounds { address: next },
        })?;
        self.push_byte(ret)?;
        tracing::debug!(from = self.pc, to = target, "call");
        self.transfer(target);
        Ok(())
    }

    /// `RET`
    pub(crate) fn op_ret(&mut self) -> Result<(), ExecError> {
        let target = self.pop_byte()?;
        tracing::debug!(from = self.pc, to = target, "ret");
        self.transfer(target);
        Ok(())
    }

    /// `JMP reg`. Flags are neither read nor written.
    pub(crate) fn op_jmp(&mut self) -> Result<(), ExecError> {
        let target = self.reg(self.operand(0)?)?;
        tracing::debug!(from = self.pc, to = target, "jmp");
        self.transfer(target);
        Ok(())
    }

    /// `JEQ reg` / `JNE reg`: jumps when `taken`, otherwise falls through.
    pub(crate) fn op_jump_if(&mut self, taken: bool) -> Result<(), ExecError> {
        let target = self.reg(self.operand(0)?)?;
        if taken {
            tracing::debug!(from = self.pc, to = target, "branch taken");
            self.transfer(target);
        } else {
            self.pc += Opcode::Jeq.size();
        }
        Ok(())
    }

    /// `CMP a, b`: rewrites all of `FL`.
    pub(crate) fn op_cmp(&mut self) -> Result<(), ExecError> {
        let a = self.reg(self.operand(0)?)?;
        let b = self.reg(self.operand(1)?)?;
        self.fl = Alu::compare(a, b);
        self.stats.inst_alu += 1;
        Ok(())
    }

    /// Register-to-register ALU instruction; the result lands in the first operand.
    ///
    /// Single-operand forms (`INC`, `DEC`, `NOT`) pass 0 as the second value.
    pub(crate) fn op_alu(&mut self, opcode: Opcode, op: AluOp) -> Result<(), ExecError> {
        let dest = self.operand(0)?;
        let a = self.reg(dest)?;
        let b = if opcode.operand_count() == 2 {
            self.reg(self.operand(1)?)?
        } else {
            0
        };
        let result = Alu::execute(op, a, b).map_err(|source| ExecError::Alu {
            pc: self.pc,
            source,
        })?;
        self.stats.inst_alu += 1;
        self.set_reg(dest, result)
    }

    fn transfer(&mut self, target: u8) {
        self.pc = usize::from(target);
        self.stats.branches_taken += 1;
    }
}
