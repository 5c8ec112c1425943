//! # Unit Components
//!
//! Tests grouped by the component they exercise.

/// Tests for configuration defaults and JSON loading.
pub mod config;


/// Tests for the execution engine and instruction handlers.
///
/// Programs are assembled with the shared builder and run through the
/// `TestContext` harness.
pub mod cpu;
