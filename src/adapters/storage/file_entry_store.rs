//! File-based Entry Store Adapter
//!
//! Keeps the whole journal in a single `journal.yaml` under the data
//! directory. Every call reads the file; every write replaces it.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

use super::journal_document::JournalDocument;
use super::yaml_file::{read_or_default, write_atomic};
use crate::domain::foundation::{CategoryId, EntryId, Timestamp};
use crate::domain::journal::{Category, Entry, EntryMetadata};
use crate::ports::{EntryStore, StoreError};

const JOURNAL_FILE: &str = "journal.yaml";

/// File-based storage for entries and categories
#[derive(Debug)]
pub struct FileEntryStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileEntryStore {
    /// Create a store rooted at `data_dir`
    ///
    /// # Example
    /// ```ignore
    /// let store = FileEntryStore::new("./data");
    /// ```
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            path: data_dir.as_ref().join(JOURNAL_FILE),
            write_lock: Mutex::new(()),
        }
    }

    /// Path of the journal document
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<JournalDocument, StoreError> {
        read_or_default(&self.path).await
    }

    /// Load, apply `change`, and save only when it succeeds.
    async fn modify<T>(
        &self,
        change: impl FnOnce(&mut JournalDocument) -> Result<T, StoreError>,
    ) -> Result<T, StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut journal = self.load().await?;
        let out = change(&mut journal)?;
        write_atomic(&self.path, &journal).await?;
        Ok(out)
    }
}

#[async_trait]
impl EntryStore for FileEntryStore {
    async fn create_entry(
        &self,
        content: &str,
        category_id: Option<CategoryId>,
    ) -> Result<Entry, StoreError> {
        let entry = self
            .modify(|journal| journal.create_entry(content, category_id))
            .await?;
        tracing::debug!(entry_id = %entry.id(), "entry saved");
        Ok(entry)
    }

    async fn get_entry(&self, id: &EntryId) -> Result<Entry, StoreError> {
        self.load().await?.get_entry(id)
    }

    async fn update_entry_answered(
        &self,
        id: &EntryId,
        answered: bool,
        answered_at: Option<Timestamp>,
        answer_note: Option<String>,
    ) -> Result<bool, StoreError> {
        self.modify(|journal| journal.update_answered(id, answered, answered_at, answer_note))
            .await
    }

    async fn record_presented(&self, ids: &[EntryId]) -> Result<Vec<Entry>, StoreError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        self.modify(|journal| journal.record_presented(ids)).await
    }

    async fn list_entry_metadata(&self) -> Result<Vec<EntryMetadata>, StoreError> {
        Ok(self.load().await?.metadata())
    }

    async fn list_categories(&self) -> Result<Vec<Category>, StoreError> {
        Ok(self.load().await?.categories)
    }

    async fn create_category(&self, name: &str) -> Result<Category, StoreError> {
        self.modify(|journal| journal.create_category(name)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn empty_directory_has_no_entries() {
        let dir = TempDir::new().unwrap();
        let store = FileEntryStore::new(dir.path());
        assert!(store.list_entry_metadata().await.unwrap().is_empty());
        assert!(store.list_categories().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn entries_survive_a_new_store_instance() {
        let dir = TempDir::new().unwrap();
        let created = {
            let store = FileEntryStore::new(dir.path());
            let cat = store.create_category("Friends").await.unwrap();
            store
                .create_entry("Sam's new job", Some(*cat.id()))
                .await
                .unwrap()
        };

        let reopened = FileEntryStore::new(dir.path());
        let fetched = reopened.get_entry(created.id()).await.unwrap();
        assert_eq!(fetched, created);
        assert_eq!(reopened.list_categories().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn failed_create_does_not_touch_the_file() {
        let dir = TempDir::new().unwrap();
        let store = FileEntryStore::new(dir.path());

        let result = store.create_entry("   ", None).await;

        assert!(matches!(result, Err(StoreError::Validation(_))));
        assert!(!store.path().exists());
    }

    #[tokio::test]
    async fn answered_flag_is_persisted() {
        let dir = TempDir::new().unwrap();
        let store = FileEntryStore::new(dir.path());
        let entry = store.create_entry("Healing", None).await.unwrap();

        store
            .update_entry_answered(entry.id(), true, None, None)
            .await
            .unwrap();

        let meta = store.list_entry_metadata().await.unwrap();
        assert!(meta[0].answered);
        let fetched = FileEntryStore::new(dir.path())
            .get_entry(entry.id())
            .await
            .unwrap();
        assert!(fetched.answered_at().is_some());
    }

    #[tokio::test]
    async fn display_count_is_persisted() {
        let dir = TempDir::new().unwrap();
        let store = FileEntryStore::new(dir.path());
        let entry = store.create_entry("Harvest", None).await.unwrap();

        store.record_presented(&[*entry.id()]).await.unwrap();
        store.record_presented(&[*entry.id()]).await.unwrap();

        let fetched = FileEntryStore::new(dir.path())
            .get_entry(entry.id())
            .await
            .unwrap();
        assert_eq!(fetched.display_count(), 2);
    }

    #[tokio::test]
    async fn hand_edited_answer_without_time_is_rejected() {
        let dir = TempDir::new().unwrap();
        let yaml = [
            "entries:",
            "- id: 6f1c2a9e-1d4b-4c55-9a8e-0f5b8b6e2d11",
            "  content: Rain",
            "  created_at: 2024-03-01T08:00:00Z",
            "  last_modified: 2024-03-01T08:00:00Z",
            "  answered: true",
        ]
        .join("\n");
        std::fs::write(dir.path().join(JOURNAL_FILE), yaml).unwrap();
        let store = FileEntryStore::new(dir.path());

        assert!(matches!(
            store.list_entry_metadata().await,
            Err(StoreError::Serialization(_))
        ));
    }

    #[tokio::test]
    async fn unreadable_journal_reports_serialization_error() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(JOURNAL_FILE), "entries: {not: [a list").unwrap();
        let store = FileEntryStore::new(dir.path());

        assert!(matches!(
            store.list_entry_metadata().await,
            Err(StoreError::Serialization(_))
        ));
    }
}
