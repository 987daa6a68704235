//! App state stores: one in memory, one in `app_state.yaml`.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;

use super::yaml_file::{read_or_default, write_atomic};
use crate::ports::{AppState, AppStateStore, StoreError};

const APP_STATE_FILE: &str = "app_state.yaml";

/// Keeps [`AppState`] in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAppStateStore {
    state: Arc<RwLock<AppState>>,
}

impl InMemoryAppStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: AppState) -> Self {
        Self {
            state: Arc::new(RwLock::new(state)),
        }
    }
}

#[async_trait]
impl AppStateStore for InMemoryAppStateStore {
    async fn load(&self) -> Result<AppState, StoreError> {
        Ok(self.state.read().await.clone())
    }

    async fn save(&self, state: &AppState) -> Result<(), StoreError> {
        *self.state.write().await = state.clone();
        Ok(())
    }
}

/// Keeps [`AppState`] in `app_state.yaml` next to the journal.
#[derive(Debug, Clone)]
pub struct FileAppStateStore {
    path: PathBuf,
}

impl FileAppStateStore {
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            path: data_dir.as_ref().join(APP_STATE_FILE),
        }
    }
}

#[async_trait]
impl AppStateStore for FileAppStateStore {
    async fn load(&self) -> Result<AppState, StoreError> {
        read_or_default(&self.path).await
    }

    async fn save(&self, state: &AppState) -> Result<(), StoreError> {
        write_atomic(&self.path, state).await
    }
}
