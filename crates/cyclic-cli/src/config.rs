//! Optional TOML defaults file.
//!
//! ```toml
//! alphabet = "ABCDEFGHIJKLMNOPQRSTUVWXYZ"
//! length = 4
//! context = ["amd64", "linux"]
//! scan_limit = 4294967296
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::context::ContextWord;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub alphabet: Option<String>,
    pub length: Option<usize>,
    pub context: Vec<String>,
    pub scan_limit: Option<u64>,
}

impl FileConfig {
    /// `<config_dir>/cyclic/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("cyclic").join("config.toml"))
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        Ok(config)
    }

    /// Load an explicitly requested file, or fall back to the default
    /// location. Only an explicit path turns a bad file into an error.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            let config = Self::load(path)?;
            info!("Loaded config from {:?}", path);
            return Ok(config);
        }

        let Some(path) = Self::default_path().filter(|p| p.is_file()) else {
            return Ok(Self::default());
        };

        match Self::load(&path) {
            Ok(config) => {
                info!("Loaded config from {:?}", path);
                Ok(config)
            }
            Err(e) => {
                warn!("{:#}, using defaults", e);
                Ok(Self::default())
            }
        }
    }

    pub fn context_words(&self) -> Result<Vec<ContextWord>> {
        self.context
            .iter()
            .map(|word| word.parse().map_err(anyhow::Error::msg))
            .collect()
    }
}
