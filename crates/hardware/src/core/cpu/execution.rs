//! Main Execution Loop.
//!
//! This module implements the fetch-decode-execute cycle. It performs the following:
//! 1. **Fetch:** Reads the opcode byte at the program counter.
//! 2. **Decode/Dispatch:** Resolves the byte to an [`Opcode`] and routes it to its handler.
//! 3. **PC Update:** Advances the PC by the decoded instruction length unless the
//!    instruction transfers control itself.
//! 4. **Observability:** Produces trace lines and `tracing` events for debugging.

use super::{Cpu, RunState};
use crate::common::error::ExecError;
use crate::core::units::alu::AluOp;
use crate::isa::Opcode;
use crate::isa::disasm::disassemble;
use crate::soc::traits::Output;

impl Cpu {
    /// Executes a single instruction.
    ///
    /// Does nothing once the CPU has halted. An undecodable opcode fails with
    /// [`ExecError::UnknownOpcode`] before any state is touched.
    pub fn step(&mut self, out: &mut dyn Output) -> Result<(), ExecError> {
        if self.state == RunState::Halted {
            return Ok(());
        }

        let pc = self.pc;
        let byte = self
            .ram
            .read(pc)
            .map_err(|source| ExecError::Memory { pc, source })?;
        let opcode = Opcode::from_u8(byte).ok_or(ExecError::UnknownOpcode { opcode: byte, pc })?;

        if self.trace {
            eprintln!("{}", self.trace_line());
        }
        tracing::trace!(pc, opcode = %opcode, "dispatch");

        self.dispatch(opcode, out)?;

        // Length comes from the opcode's AA bits; PC-setting handlers own the PC.
        if !opcode.sets_pc() && self.state == RunState::Running {
            self.pc += opcode.size();
        }
        self.stats.instructions_retired += 1;
        Ok(())
    }

    /// Runs until `HLT`.
    ///
    /// # Returns
    ///
    /// The number of instructions executed, or the first fault. When
    /// [`Cpu::max_steps`] is set and the program has not halted within that
    /// many instructions, fails with [`ExecError::StepLimitExceeded`].
    pub fn run(&mut self, out: &mut dyn Output) -> Result<u64, ExecError> {
        let mut steps: u64 = 0;
        while self.state == RunState::Running {
            if let Some(limit) = self.max_steps {
                if steps >= limit {
                    tracing::warn!(limit, pc = self.pc, "step limit reached");
                    return Err(ExecError::StepLimitExceeded { limit });
                }
            }
            self.step(out)?;
            steps += 1;
        }
        tracing::info!(steps, "halted");
        Ok(steps)
    }

    /// Renders the machine state as one diagnostic line.
    ///
    /// Format: `TRACE: PC | M[PC] M[PC+1] M[PC+2] | R0 .. R7 | disassembly`,
    /// all values in two-digit hex. Bytes past the end of memory show as `00`.
    pub fn trace_line(&self) -> String {
        let bytes = [
            self.ram.peek(self.pc),
            self.ram.peek(self.pc + 1),
            self.ram.peek(self.pc + 2),
        ];
        format!(
            "TRACE: {:02X} | {:02X} {:02X} {:02X} | {} | {}",
            self.pc,
            bytes[0],
            bytes[1],
            bytes[2],
            self.regs.dump(),
            disassemble(&bytes)
        )
    }

    /// Routes a decoded opcode to its handler.
    fn dispatch(&mut self, opcode: Opcode, out: &mut dyn Output) -> Result<(), ExecError> {
        match opcode {
            Opcode::Hlt => {
                self.op_hlt();
                Ok(())
            }
            Opcode::Ldi => self.op_ldi(),
            Opcode::Prn => self.op_prn(out),
            Opcode::Push => self.op_push(),
            Opcode::Pop => self.op_pop(),
            Opcode::Call => self.op_call(),
            Opcode::Ret => self.op_ret(),
            Opcode::Jmp => self.op_jmp(),
            Opcode::Jeq => self.op_jump_if(self.fl.equal()),
            Opcode::Jne => self.op_jump_if(!self.fl.equal()),
            Opcode::Cmp => self.op_cmp(),
            Opcode::Add => self.op_alu(opcode, AluOp::Add),
            Opcode::Sub => self.op_alu(opcode, AluOp::Sub),
            Opcode::Mul => self.op_alu(opcode, AluOp::Mul),
            Opcode::Div => self.op_alu(opcode, AluOp::Div),
            Opcode::Mod => self.op_alu(opcode, AluOp::Mod),
            Opcode::Inc => self.op_alu(opcode, AluOp::Inc),
            Opcode::Dec => self.op_alu(opcode, AluOp::Dec),
            Opcode::And => self.op_alu(opcode, AluOp::And),
            Opcode::Not => self.op_alu(opcode, AluOp::Not),
            Opcode::Or => self.op_alu(opcode, AluOp::Or),
            Opcode::Xor => self.op_alu(opcode, AluOp::Xor),
            Opcode::Shl => self.op_alu(opcode, AluOp::Shl),
            Opcode::Shr => self.op_alu(opcode, AluOp::Shr),
        }
    }

    /// Reads operand byte `n` (0-based) of the current instruction.
    pub(crate) fn operand(&self, n: usize) -> Result<u8, ExecError> {
        let addr = self.pc + 1 + n;
        self.ram.read(addr).map_err(|source| ExecError::Memory {
            pc: self.pc,
            source,
        })
    }

    /// Reads the register named by an operand byte.
    pub(crate) fn reg(&self, idx: u8) -> Result<u8, ExecError> {
        self.regs
            .read(usize::from(idx))
            .map_err(|source| ExecError::Register {
                pc: self.pc,
                source,
            })
    }

    /// Writes the register named by an operand byte.
    pub(crate) fn set_reg(&mut self, idx: u8, val: u8) -> Result<(), ExecError> {
        self.regs
            .write(usize::from(idx), val)
            .map_err(|source| ExecError::Register {
                pc: self.pc,
                source,
            })
    }
}
