//! Panel Catalog Port - where authored panel sets come from.

use async_trait::async_trait;

use super::StoreError;
use crate::domain::foundation::PanelSetId;
use crate::domain::panel::PanelSet;

/// Read-only source of panel sets.
#[async_trait]
pub trait PanelCatalog: Send + Sync {
    /// Find a panel set by id. Returns `None` if the catalog has no such set.
    async fn get(&self, id: &PanelSetId) -> Result<Option<PanelSet>, StoreError>;

    /// All panel set ids, in catalog order.
    async fn list_ids(&self) -> Result<Vec<PanelSetId>, StoreError>;
}
