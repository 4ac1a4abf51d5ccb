//! Evaluation settings loaded from TOML.
//!
//! ```toml
//! [piece_values]
//! pawn = 100
//! knight = 300
//! ```
//!
//! Missing keys keep their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigError;
use crate::eval::{AbsoluteFork, Material, PieceValues};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalConfig {
    pub piece_values: PieceValues,
}

impl EvalConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        debug!(path = %path.display(), ?config, "loaded eval config");
        Ok(config)
    }

    pub fn absolute_fork(&self) -> AbsoluteFork {
        AbsoluteFork::new(self.piece_values)
    }

    pub fn material(&self) -> Material {
        Material::new(self.piece_values)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
