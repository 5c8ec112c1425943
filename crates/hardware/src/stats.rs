//! Execution statistics collection and reporting.
//!
//! This module tracks what a run did. It provides:
//! 1. **Instruction Count:** Instructions retired.
//! 2. **Instruction Mix:** ALU, stack, control-transfer, and output counts.
//! 3. **Stack Usage:** Deepest stack reached relative to the reset stack pointer.

use std::fmt;
use std::time::{Duration, Instant};

/// Statistics gathered while executing a program.
#[derive(Clone, Debug)]
pub struct ExecStats {
    start_time: Instant,
    /// Number of instructions executed to completion.
    pub instructions_retired: u64,
    /// Instructions executed by the ALU (including `CMP`).
    pub inst_alu: u64,
    /// Stack memory accesses (`PUSH`, `POP`, and the push/pop inside `CALL`/`RET`).
    pub stack_ops: u64,
    /// Control transfers that changed the PC (`CALL`, `RET`, `JMP`, taken `JEQ`/`JNE`).
    pub branches_taken: u64,
    /// Values emitted by `PRN`.
    pub values_printed: u64,
    /// Deepest stack reached, in bytes below the reset stack pointer.
    pub peak_stack_depth: u8,
}

impl Default for ExecStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            instructions_retired: 0,
            inst_alu: 0,
            stack_ops: 0,
            branches_taken: 0,
            values_printed: 0,
            peak_stack_depth: 0,
        }
    }
}

impl ExecStats {
    /// Records the stack depth after a push, keeping the maximum.
    ///
    /// An SP above `initial_sp` (after popping an empty stack) counts as depth 0.
    pub fn observe_stack(&mut self, initial_sp: u8, sp: u8) {
        let depth = initial_sp.saturating_sub(sp);
        self.peak_stack_depth = self.peak_stack_depth.max(depth);
    }

    /// Wall-clock time since the statistics were created.
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Prints the statistics to stderr.
    pub fn print(&self) {
        eprintln!("{self}");
    }
}

impl fmt::Display for ExecStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "==========================================")?;
        writeln!(f, "  Execution statistics")?;
        writeln!(f, "==========================================")?;
        writeln!(f, "  instructions retired : {}", self.instructions_retired)?;
        writeln!(f, "  alu instructions     : {}", self.inst_alu)?;
        writeln!(f, "  stack operations     : {}", self.stack_ops)?;
        writeln!(f, "  branches taken       : {}", self.branches_taken)?;
        writeln!(f, "  values printed       : {}", self.values_printed)?;
        writeln!(f, "  peak stack depth     : {} bytes", self.peak_stack_depth)?;
        write!(f, "  wall time            : {:?}", self.elapsed())
    }
}
