//! Storage configuration

use serde::Deserialize;
use std::path::PathBuf;

/// Where the journal lives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// YAML files under `data_dir`
    #[default]
    File,
    /// Nothing persists past the process
    Memory,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,

    /// Directory holding `journal.yaml` and `app_state.yaml`
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// YAML panel catalog; the built-in sets are used when unset
    #[serde(default)]
    pub panel_catalog: Option<PathBuf>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            data_dir: default_data_dir(),
            panel_catalog: None,
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}
