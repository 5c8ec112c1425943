//! CPU execution tests.

/// ALU instruction handlers.
pub mod alu_ops;





/// `PUSH` and `POP`.
pub mod stack;
