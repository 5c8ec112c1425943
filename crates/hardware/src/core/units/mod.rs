//! Execution units and functional components.

/// Arithmetic Logic Unit for register operations.
pub mod alu;
