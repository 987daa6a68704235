//! In-Memory Entry Store Adapter
//!
//! Keeps the journal in memory. Useful for testing and development.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::journal_document::JournalDocument;
use crate::domain::foundation::{CategoryId, EntryId, Timestamp};
use crate::domain::journal::{Category, Entry, EntryMetadata};
use crate::ports::{EntryStore, StoreError};

/// In-memory storage for entries and categories
#[derive(Debug, Clone, Default)]
pub struct InMemoryEntryStore {
    journal: Arc<RwLock<JournalDocument>>,
}

impl InMemoryEntryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-filled with records (entries keep their timestamps)
    pub fn with_records(categories: Vec<Category>, entries: Vec<Entry>) -> Self {
        Self {
            journal: Arc::new(RwLock::new(JournalDocument {
                categories,
                entries,
            })),
        }
    }

    /// Number of stored entries
    pub async fn entry_count(&self) -> usize {
        self.journal.read().await.entries.len()
    }
}

#[async_trait]
impl EntryStore for InMemoryEntryStore {
    async fn create_entry(
        &self,
        content: &str,
        category_id: Option<CategoryId>,
    ) -> Result<Entry, StoreError> {
        self.journal.write().await.create_entry(content, category_id)
    }

    async fn get_entry(&self, id: &EntryId) -> Result<Entry, StoreError> {
        self.journal.read().await.get_entry(id)
    }

    async fn update_entry_answered(
        &self,
        id: &EntryId,
        answered: bool,
        answered_at: Option<Timestamp>,
        answer_note: Option<String>,
    ) -> Result<bool, StoreError> {
        self.journal
            .write()
            .await
            .update_answered(id, answered, answered_at, answer_note)
    }

    async fn record_presented(&self, ids: &[EntryId]) -> Result<Vec<Entry>, StoreError> {
        self.journal.write().await.record_presented(ids)
    }

    async fn list_entry_metadata(&self) -> Result<Vec<EntryMetadata>, StoreError> {
        Ok(self.journal.read().await.metadata())
    }

    async fn list_categories(&self) -> Result<Vec<Category>, StoreError> {
        Ok(self.journal.read().await.categories.clone())
    }

    async fn create_category(&self, name: &str) -> Result<Category, StoreError> {
        self.journal.write().await.create_category(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn create_then_get_entry() {
        let store = InMemoryEntryStore::new();
        let created = store.create_entry("Provision", None).await.unwrap();
        let fetched = store.get_entry(created.id()).await.unwrap();
        assert_eq!(fetched, created);
        assert_eq!(store.entry_count().await, 1);
    }

    #[tokio::test]
    async fn create_entry_rejects_blank_content() {
        let store = InMemoryEntryStore::new();
        let result = store.create_entry("", None).await;
        assert!(matches!(result, Err(StoreError::Validation(_))));
        assert_eq!(store.entry_count().await, 0);
    }

    #[tokio::test]
    async fn get_unknown_entry_fails() {
        let store = InMemoryEntryStore::new();
        let id = EntryId::new();
        assert!(matches!(
            store.get_entry(&id).await,
            Err(StoreError::EntryNotFound(missing)) if missing == id
        ));
    }

    #[tokio::test]
    async fn update_answered_sets_timestamp() {
        let store = InMemoryEntryStore::new();
        let entry = store.create_entry("Rest", None).await.unwrap();

        store
            .update_entry_answered(entry.id(), true, None, Some("slept well".into()))
            .await
            .unwrap();

        let fetched = store.get_entry(entry.id()).await.unwrap();
        assert!(fetched.is_answered());
        assert!(fetched.answered_at().is_some());
        assert_eq!(fetched.answer_note(), Some("slept well"));
    }

    #[tokio::test]
    async fn presenting_bumps_display_count() {
        let store = InMemoryEntryStore::new();
        let entry = store.create_entry("Neighbours", None).await.unwrap();

        let shown = store.record_presented(&[*entry.id()]).await.unwrap();

        assert_eq!(shown[0].display_count(), 1);
        assert_eq!(store.get_entry(entry.id()).await.unwrap().display_count(), 1);
    }

    #[tokio::test]
    async fn update_unknown_entry_fails() {
        let store = InMemoryEntryStore::new();
        let result = store
            .update_entry_answered(&EntryId::new(), true, None, None)
            .await;
        assert!(matches!(result, Err(StoreError::EntryNotFound(_))));
    }

    #[tokio::test]
    async fn metadata_lists_every_entry() {
        let store = InMemoryEntryStore::new();
        store.create_entry("a", None).await.unwrap();
        store.create_entry("b", None).await.unwrap();
        assert_eq!(store.list_entry_metadata().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn seeded_store_exposes_categories() {
        let cat = Category::new("Church").unwrap();
        let store = InMemoryEntryStore::with_records(vec![cat.clone()], vec![]);
        assert_eq!(store.list_categories().await.unwrap(), vec![cat]);
    }
}
