//! Output sink trait.
//!
//! `PRN` is the machine's only observable output. The engine hands each printed
//! value to an [`Output`] supplied by the caller, which decides how to display
//! or record it.

use std::io::{self, Write};

/// Receiver for values printed by the running program.
pub trait Output {
    /// Receives one printed value, in program order.
    fn emit(&mut self, value: u8);
}

/// Captures printed values in order.
impl Output for Vec<u8> {
    fn emit(&mut self, value: u8) {
        self.push(value);
    }
}

/// Writes each printed value as a decimal line on stdout.
#[derive(Debug, Default)]
pub struct StdoutOutput;

impl Output for StdoutOutput {
    fn emit(&mut self, value: u8) {
        let mut out = io::stdout().lock();
        if let Err(e) = writeln!(out, "{value}") {
            tracing::warn!(error = %e, "failed to write program output");
        }
    }
}
