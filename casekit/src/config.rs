use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::CliError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub json: bool,
    pub ellipsis_max_len: isize,
    pub pad_fill: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            json: false,
            ellipsis_max_len: 80,
            pad_fill: " ".to_string(),
        }
    }
}

impl CliConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, CliError> {
        let data = fs::read(path)?;
        let config = serde_json::from_slice(&data)?;
        Ok(config)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), CliError> {
        let data = serde_json::to_vec_pretty(self)?;
        fs::write(path, data)?;
        Ok(())
    }

    /// Loads `path` when given, otherwise falls back to the defaults.
    pub fn resolve(path: Option<&Path>) -> Result<Self, CliError> {
        match path {
            Some(path) => {
                log::debug!("loading config from {}", path.display());
                Self::load_from_file(path)
            }
            None => Ok(Self::default()),
        }
    }
}
