//! User configuration: which extensions count as images and how keys map to
//! actions. Read from `config.json` in the platform config directory; every
//! field falls back to its default when absent.

use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::host::image::AVAILABLE_EXTENSIONS;
use crate::keymap::{Keymap, DEFAULT_KEYMAP};

const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub extensions: Vec<String>,
    pub keymap: BTreeMap<String, String>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            extensions: AVAILABLE_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            keymap: DEFAULT_KEYMAP
                .iter()
                .map(|(key, action)| (key.to_string(), action.to_string()))
                .collect(),
        }
    }
}

impl ViewerConfig {
    /// Load from the platform config directory, or defaults if no file exists.
    pub fn load() -> Result<Self> {
        Self::load_from(&config_dir().join(CONFIG_FILE))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!(target: "peek.config", "no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse config {}", path.display()))
    }

    /// Lower-cased extension set, without leading dots.
    pub fn extension_set(&self) -> HashSet<String> {
        self.extensions
            .iter()
            .map(|e| e.trim_start_matches('.').to_ascii_lowercase())
            .collect()
    }

    pub fn keymap(&self) -> Keymap {
        Keymap::from_bindings(&self.keymap)
    }
}

pub fn config_dir() -> PathBuf {
    if let Some(proj) = ProjectDirs::from("com", "Peek", "Peek") {
        proj.config_dir().to_path_buf()
    } else {
        std::env::temp_dir().join("Peek")
    }
}
