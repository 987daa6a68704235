//! App State Port - small bits of state that outlive one session.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::StoreError;
use crate::domain::foundation::PanelSetId;
use crate::domain::session::PrayerStreak;

/// State carried from one session to the next.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AppState {
    /// Panel set recorded when the last session entered its loop.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_panel_set: Option<PanelSetId>,

    #[serde(default)]
    pub streak: PrayerStreak,
}

/// Port for loading and saving [`AppState`].
#[async_trait]
pub trait AppStateStore: Send + Sync {
    /// Load the state; a store with nothing saved yields the default.
    async fn load(&self) -> Result<AppState, StoreError>;

    async fn save(&self, state: &AppState) -> Result<(), StoreError>;
}
