//! The journal as one serializable document.
//!
//! Shared by the in-memory and file stores so both enforce the same rules.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CategoryId, EntryId, Timestamp};
use crate::domain::journal::{Category, Entry, EntryMetadata};
use crate::ports::StoreError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct JournalDocument {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub entries: Vec<Entry>,
}

impl JournalDocument {
    pub fn create_entry(
        &mut self,
        content: &str,
        category_id: Option<CategoryId>,
    ) -> Result<Entry, StoreError> {
        if let Some(cid) = &category_id {
            if !self.categories.iter().any(|c| c.id() == cid) {
                return Err(StoreError::CategoryNotFound(*cid));
            }
        }
        let entry = Entry::new(content, category_id)?;
        self.entries.push(entry.clone());
        Ok(entry)
    }

    pub fn get_entry(&self, id: &EntryId) -> Result<Entry, StoreError> {
        self.entries
            .iter()
            .find(|e| e.id() == id)
            .cloned()
            .ok_or(StoreError::EntryNotFound(*id))
    }

    pub fn update_answered(
        &mut self,
        id: &EntryId,
        answered: bool,
        answered_at: Option<Timestamp>,
        answer_note: Option<String>,
    ) -> Result<bool, StoreError> {
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.id() == id)
            .ok_or(StoreError::EntryNotFound(*id))?;
        Ok(entry.set_answered(answered, answered_at, answer_note, Timestamp::now()))
    }

    /// Bumps the display count of every id, all or nothing.
    pub fn record_presented(&mut self, ids: &[EntryId]) -> Result<Vec<Entry>, StoreError> {
        let mut positions = Vec::with_capacity(ids.len());
        for id in ids {
            let pos = self
                .entries
                .iter()
                .position(|e| e.id() == id)
                .ok_or(StoreError::EntryNotFound(*id))?;
            positions.push(pos);
        }
        Ok(positions
            .into_iter()
            .map(|pos| {
                let entry = &mut self.entries[pos];
                entry.record_display();
                entry.clone()
            })
            .collect())
    }

    pub fn metadata(&self) -> Vec<EntryMetadata> {
        self.entries.iter().map(Entry::metadata).collect()
    }

    pub fn create_category(&mut self, name: &str) -> Result<Category, StoreError> {
        let category = Category::new(name)?;
        self.categories.push(category.clone());
        Ok(category)
    }
}
