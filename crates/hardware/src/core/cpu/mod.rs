//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which owns the entire
//! machine state. It coordinates the following:
//! 1. **State Management:** Registers, flags, program counter, and the running/halted state.
//! 2. **Memory:** The 256-byte RAM holding both program and stack.
//! 3. **Execution:** The fetch-decode-execute loop ([`execution`]) and instruction handlers ([`ops`]).

/// Fetch-decode-execute loop, dispatch, and tracing.
pub mod execution;

/// Instruction handlers.
pub mod ops;

/// Stack push/pop through the stack pointer.
pub mod stack;

use crate::common::error::LoadError;
use crate::config::Config;
use crate::core::arch::flags::Flags;
use crate::core::arch::gpr::Gpr;
use crate::soc::ram::Ram;
use crate::stats::ExecStats;

/// Execution state of the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    /// Fetching and executing instructions.
    #[default]
    Running,
    /// Stopped by `HLT`; further steps do nothing.
    Halted,
}

/// Main CPU structure containing all machine state.
///
/// There is exactly one `Cpu` per run and it owns everything mutable, so
/// nothing here needs synchronisation.
#[derive(Debug)]
pub struct Cpu {
    /// General-purpose registers; `R7` is the stack pointer.
    pub regs: Gpr,
    /// Main memory.
    pub ram: Ram,
    /// Program counter.
    pub pc: usize,
    /// Flags register, written by `CMP`.
    pub fl: Flags,
    /// Running or halted.
    pub state: RunState,
    /// Write a trace line to stderr before each instruction.
    pub trace: bool,
    /// Instruction budget for [`Cpu::run`]; `None` is unbounded.
    pub max_steps: Option<u64>,
    /// Execution statistics.
    pub stats: ExecStats,
    initial_sp: u8,
}

impl Cpu {
    /// Creates a CPU in its reset state with empty memory.
    pub fn new(config: &Config) -> Self {
        let initial_sp = config.system.initial_sp;
        Self {
            regs: Gpr::with_sp(initial_sp),
            ram: Ram::new(),
            pc: 0,
            fl: Flags::default(),
            state: RunState::Running,
            trace: config.general.trace_instructions,
            max_steps: config.general.max_steps,
            stats: ExecStats::default(),
            initial_sp,
        }
    }

    /// Copies a program image into memory at address 0.
    pub fn load(&mut self, image: &[u8]) -> Result<(), LoadError> {
        self.ram.load(image)?;
        tracing::info!(bytes = image.len(), "program loaded");
        Ok(())
    }

    /// Returns registers, flags, PC, run state, and statistics to reset values.
    ///
    /// Memory is left as is, so a loaded program can be run again.
    pub fn reset(&mut self) {
        self.regs = Gpr::with_sp(self.initial_sp);
        self.pc = 0;
        self.fl = Flags::default();
        self.state = RunState::Running;
        self.stats = ExecStats::default();
    }

    /// Returns `true` once `HLT` has executed.
    #[inline]
    pub fn is_halted(&self) -> bool {
        self.state == RunState::Halted
    }

    /// Stack pointer value after reset.
    #[inline]
    pub const fn initial_sp(&self) -> u8 {
        self.initial_sp
    }
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
