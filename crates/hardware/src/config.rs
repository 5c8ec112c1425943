//! Configuration system for the simulator.
//!
//! This module defines the configuration structures used to parameterize a run.
//! It provides:
//! 1. **Defaults:** Baseline machine constants (reset stack pointer, step budget).
//! 2. **Structures:** Hierarchical config for general run behaviour and the machine itself.
//! 3. **Loading:** Deserialization from JSON text or files.
//!
//! Every field is optional in JSON; anything omitted takes its default.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::error::LoadError;

/// Default configuration constants for the simulator.
mod defaults {
    /// Stack pointer value after reset.
    pub const INITIAL_SP: u8 = crate::common::constants::INITIAL_SP;
}

/// Error raised while reading a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error(transparent)]
    Load(#[from] LoadError),
    /// The file is not valid configuration JSON.
    #[error("invalid configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General run behaviour (tracing, step budget).
    pub general: GeneralConfig,
    /// Machine parameters.
    pub system: SystemConfig,
}

impl Config {
    /// Parses a configuration from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Reads and parses a JSON configuration file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| LoadError::from_io(path, source))?;
        Self::from_json_str(&text)
    }
}

/// General run configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GeneralConfig {
    /// Write a trace line to stderr before every instruction.
    #[serde(default)]
    pub trace_instructions: bool,

    /// Maximum number of instructions to execute before giving up.
    ///
    /// `None` runs until the program halts.
    #[serde(default)]
    pub max_steps: Option<u64>,
}

/// Machine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SystemConfig {
    /// Stack pointer (`R7`) value after reset.
    #[serde(default = "SystemConfig::default_initial_sp")]
    pub initial_sp: u8,
}

impl SystemConfig {
    const fn default_initial_sp() -> u8 {
        defaults::INITIAL_SP
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            initial_sp: defaults::INITIAL_SP,
        }
    }
}
