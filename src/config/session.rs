//! Session configuration

use serde::Deserialize;

use super::ValidationError;
use crate::application::MAX_BATCH_SIZE;
use crate::domain::foundation::PanelSetId;

/// How a prayer session runs
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Entries shown per loop iteration
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,

    /// Panel set used when none is requested and none was used before
    #[serde(default = "default_panel_set")]
    pub default_panel_set: String,

    /// Cycle through the catalog instead of reusing the last panel set
    #[serde(default)]
    pub rotate_panel_sets: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            batch_size: default_batch_size(),
            default_panel_set: default_panel_set(),
            rotate_panel_sets: false,
        }
    }
}

fn default_batch_size() -> usize {
    3
}

fn default_panel_set() -> String {
    "classic".to_string()
}

impl SessionConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.batch_size == 0 || self.batch_size > MAX_BATCH_SIZE {
            return Err(ValidationError::InvalidBatchSize {
                max: MAX_BATCH_SIZE,
                actual: self.batch_size,
            });
        }
        self.panel_set_id()?;
        Ok(())
    }

    pub fn panel_set_id(&self) -> Result<PanelSetId, ValidationError> {
        PanelSetId::new(self.default_panel_set.as_str())
            .map_err(|_| ValidationError::InvalidPanelSetId(self.default_panel_set.clone()))
    }
}
