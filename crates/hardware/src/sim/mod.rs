//! Simulation utilities and program loading.
//!
//! Provides the program loader and the [`Simulator`] facade that ties
//! configuration, loading, and execution together.

pub mod loader;

/// Simulator facade.
pub mod simulator;

pub use simulator::{RunSummary, Simulator};
