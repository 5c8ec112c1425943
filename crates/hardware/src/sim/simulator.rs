//! Simulator facade.
//!
//! Bundles a configured [`Cpu`] with program loading so that a caller can go
//! from a program file to a finished run in three calls.

use std::path::Path;

use crate::common::error::{ExecError, LoadError};
use crate::config::Config;
use crate::core::Cpu;
use crate::sim::loader;
use crate::soc::traits::Output;
use crate::stats::ExecStats;

/// Outcome of a run that reached `HLT`.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Instructions executed.
    pub steps: u64,
    /// Statistics at the time the CPU halted.
    pub stats: ExecStats,
}

/// Top-level simulator.
#[derive(Debug)]
pub struct Simulator {
    /// CPU and memory.
    pub cpu: Cpu,
}

impl Simulator {
    /// Creates a simulator with the given configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            cpu: Cpu::new(config),
        }
    }

    /// Loads a program image at address 0.
    pub fn load(&mut self, image: &[u8]) -> Result<(), LoadError> {
        self.cpu.load(image)
    }

    /// Reads a program file and loads it at address 0.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<(), LoadError> {
        let image = loader::load_program(path)?;
        self.load(&image)
    }

    /// Executes one instruction.
    pub fn tick(&mut self, out: &mut dyn Output) -> Result<(), ExecError> {
        self.cpu.step(out)
    }

    /// Runs the loaded program until it halts.
    pub fn run(&mut self, out: &mut dyn Output) -> Result<RunSummary, ExecError> {
        let steps = self.cpu.run(out)?;
        Ok(RunSummary {
            steps,
            stats: self.cpu.stats.clone(),
        })
    }
}
