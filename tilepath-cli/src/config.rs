//! Configuration loading for the tilepath program

use std::path::Path;

use serde::Deserialize;
use tilepath_search::GridCosts;

use crate::error::{CliError, Result};

/// Top-level configuration file layout. Every section is optional.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Config {
    /// Step costs (default: straight 10, diagonal 14)
    #[serde(default)]
    pub costs: GridCosts,

    #[serde(default)]
    pub render: RenderConfig,
}

/// How found paths are drawn
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RenderConfig {
    /// Character for path cells (default: '*')
    #[serde(default = "default_path_char")]
    pub path_char: char,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            path_char: default_path_char(),
        }
    }
}

fn default_path_char() -> char {
    '*'
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text)
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }
}
