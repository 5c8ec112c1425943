//! Machine components outside the core.
//!
//! Holds main memory and the output sink `PRN` writes to.

/// Main memory.
pub mod ram;

/// Output sink trait and the stdout implementation.
pub mod traits;

pub use ram::Ram;
pub use traits::{Output, StdoutOutput};
