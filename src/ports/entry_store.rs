//! Entry Store Port - the durable repository of entries and categories.
//!
//! The store owns the authoritative records and enforces referential
//! integrity (an entry's category must exist). The core only reads
//! copies and identifiers. Variants (flat file, embedded database,
//! remote service) are picked at composition time; the core never
//! branches on which one is active.

use async_trait::async_trait;

use crate::domain::foundation::{CategoryId, EntryId, Timestamp, ValidationError};
use crate::domain::journal::{Category, Entry, EntryMetadata};

/// Errors that can occur during store operations.
#[derive(Debug, Clone, thiserror::Error)]
pub enum StoreError {
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),

    #[error("Entry not found: {0}")]
    EntryNotFound(EntryId),

    #[error("Category not found: {0}")]
    CategoryNotFound(CategoryId),

    #[error("Failed to serialize journal: {0}")]
    Serialization(String),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Port for persisting and reading journal entries.
#[async_trait]
pub trait EntryStore: Send + Sync {
    /// Create an entry.
    ///
    /// # Errors
    ///
    /// - `Validation` if content is blank or too long
    /// - `CategoryNotFound` if `category_id` does not resolve
    async fn create_entry(
        &self,
        content: &str,
        category_id: Option<CategoryId>,
    ) -> Result<Entry, StoreError>;

    /// Fetch one entry.
    ///
    /// # Errors
    ///
    /// - `EntryNotFound` if absent
    async fn get_entry(&self, id: &EntryId) -> Result<Entry, StoreError>;

    /// Set or clear the answered flag of an entry.
    ///
    /// Answering with no `answered_at` stamps the current time. Answering
    /// an entry that is already answered keeps its time and only replaces
    /// the note when one is given. Returns whether the flag flipped.
    ///
    /// # Errors
    ///
    /// - `EntryNotFound` if absent
    async fn update_entry_answered(
        &self,
        id: &EntryId,
        answered: bool,
        answered_at: Option<Timestamp>,
        answer_note: Option<String>,
    ) -> Result<bool, StoreError>;

    /// Count one more showing for each entry and return the updated
    /// entries in the order given.
    ///
    /// # Errors
    ///
    /// - `EntryNotFound` if any id is absent, in which case nothing changes
    async fn record_presented(&self, ids: &[EntryId]) -> Result<Vec<Entry>, StoreError>;

    /// Selection metadata for every stored entry.
    async fn list_entry_metadata(&self) -> Result<Vec<EntryMetadata>, StoreError>;

    /// Every category, for resolving display names.
    async fn list_categories(&self) -> Result<Vec<Category>, StoreError>;

    /// Create a category.
    ///
    /// # Errors
    ///
    /// - `Validation` if the name is blank
    async fn create_category(&self, name: &str) -> Result<Category, StoreError>;
}
