//! REPL configuration.
//!
//! Defaults live here; a JSON file can override them and the binary's
//! command-line flags override both.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::model::Dimension;
use crate::{Error, Result};

/// Settings for one REPL session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReplConfig {
    /// Dimension of the cube shown at startup.
    pub initial_dimension: Dimension,
    /// Seed for `random`; `None` seeds from the operating system.
    pub seed: Option<u64>,
    /// Emit ANSI colors for colored vertices and edges.
    pub color: bool,
    /// Prompt printed before each command line.
    pub prompt: String,
    /// Echo the current symmetry and its order after every change.
    pub verbose: bool,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            initial_dimension: Dimension::CUBE,
            seed: None,
            color: true,
            prompt: "> ".into(),
            verbose: false,
        }
    }
}

impl ReplConfig {
    /// Parse a JSON configuration. Missing fields keep their defaults.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| Error::Config(e.to_string()))
    }

    /// Read a JSON configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("{}: {e}", path.display())))?;
        Self::from_json(&text)
    }
}
