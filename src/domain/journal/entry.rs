//! Entry aggregate - a single recorded prayer.
//!
//! # Invariants
//!
//! - `id` is immutable and unique
//! - `content` is non-empty after trimming and at most [`MAX_CONTENT_LENGTH`] chars
//! - `answered_at` is `Some` iff `answered` is true
//! - `last_modified >= created_at`
//!
//! Records read back from a journal file pass through the same checks.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CategoryId, EntryId, Timestamp, ValidationError};

/// Maximum length of an entry's free text.
pub const MAX_CONTENT_LENGTH: usize = 4000;

/// A recorded prayer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "EntryRecord")]
pub struct Entry {
    id: EntryId,
    content: String,
    created_at: Timestamp,
    last_modified: Timestamp,
    answered: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    answered_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    answer_note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    category_id: Option<CategoryId>,
    display_count: u32,
}

/// Unchecked shape of an entry as stored on disk.
#[derive(Deserialize)]
struct EntryRecord {
    id: EntryId,
    content: String,
    created_at: Timestamp,
    last_modified: Timestamp,
    #[serde(default)]
    answered: bool,
    #[serde(default)]
    answered_at: Option<Timestamp>,
    #[serde(default)]
    answer_note: Option<String>,
    #[serde(default)]
    category_id: Option<CategoryId>,
    #[serde(default)]
    display_count: u32,
}

impl TryFrom<EntryRecord> for Entry {
    type Error = ValidationError;

    fn try_from(raw: EntryRecord) -> Result<Self, Self::Error> {
        let content = Entry::validate_content(&raw.content)?;
        if raw.answered != raw.answered_at.is_some() {
            return Err(ValidationError::invalid_format(
                "answered_at",
                "must be present exactly when the entry is answered",
            ));
        }
        if raw.answer_note.is_some() && !raw.answered {
            return Err(ValidationError::invalid_format(
                "answer_note",
                "only answered entries carry a note",
            ));
        }
        if raw.last_modified < raw.created_at {
            return Err(ValidationError::invalid_format(
                "last_modified",
                "cannot precede created_at",
            ));
        }
        Ok(Self {
            id: raw.id,
            content,
            created_at: raw.created_at,
            last_modified: raw.last_modified,
            answered: raw.answered,
            answered_at: raw.answered_at,
            answer_note: raw.answer_note,
            category_id: raw.category_id,
            display_count: raw.display_count,
        })
    }
}

impl Entry {
    /// Create a new, unanswered entry stamped with the current time.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if content is blank
    /// - `OutOfRange` if content is too long
    pub fn new(content: &str, category_id: Option<CategoryId>) -> Result<Self, ValidationError> {
        Self::new_at(content, category_id, Timestamp::now())
    }

    /// Create a new entry with an explicit creation time.
    pub fn new_at(
        content: &str,
        category_id: Option<CategoryId>,
        created_at: Timestamp,
    ) -> Result<Self, ValidationError> {
        let content = Self::validate_content(content)?;
        Ok(Self {
            id: EntryId::new(),
            content,
            created_at,
            last_modified: created_at,
            answered: false,
            answered_at: None,
            answer_note: None,
            category_id,
            display_count: 0,
        })
    }

    /// Trims and validates entry text, returning the normalized content.
    pub fn validate_content(content: &str) -> Result<String, ValidationError> {
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("content"));
        }
        let len = trimmed.chars().count();
        if len > MAX_CONTENT_LENGTH {
            return Err(ValidationError::out_of_range(
                "content",
                1,
                MAX_CONTENT_LENGTH as i64,
                len as i64,
            ));
        }
        Ok(trimmed.to_string())
    }

    pub fn id(&self) -> &EntryId {
        &self.id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn last_modified(&self) -> &Timestamp {
        &self.last_modified
    }

    pub fn is_answered(&self) -> bool {
        self.answered
    }

    pub fn answered_at(&self) -> Option<&Timestamp> {
        self.answered_at.as_ref()
    }

    pub fn answer_note(&self) -> Option<&str> {
        self.answer_note.as_deref()
    }

    pub fn category_id(&self) -> Option<&CategoryId> {
        self.category_id.as_ref()
    }

    /// How many times the entry has been shown in a prayer loop.
    pub fn display_count(&self) -> u32 {
        self.display_count
    }

    /// Selection metadata for this entry.
    pub fn metadata(&self) -> EntryMetadata {
        EntryMetadata {
            id: self.id,
            created_at: self.created_at,
            last_modified: self.last_modified,
            answered: self.answered,
        }
    }

    /// Set the answered status, returning whether the flag flipped.
    ///
    /// Answering without an explicit time stamps the entry with `at`.
    /// Answering an entry that is already answered keeps its original time
    /// and only replaces the note when a new one is given. Clearing the flag
    /// drops the answered time and note. `last_modified` moves to `at` on
    /// any change but never before `created_at`.
    pub fn set_answered(
        &mut self,
        answered: bool,
        answered_at: Option<Timestamp>,
        answer_note: Option<String>,
        at: Timestamp,
    ) -> bool {
        let note = answer_note
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());
        let flipped = self.answered != answered;
        match (self.answered, answered) {
            (false, true) => {
                self.answered = true;
                self.answered_at = Some(answered_at.unwrap_or(at));
                self.answer_note = note;
            }
            (true, true) => match note {
                Some(note) => self.answer_note = Some(note),
                None => return false,
            },
            (true, false) => {
                self.answered = false;
                self.answered_at = None;
                self.answer_note = None;
            }
            (false, false) => return false,
        }
        self.last_modified = at.max(self.created_at);
        flipped
    }

    /// Count one more appearance in a prayer loop.
    pub fn record_display(&mut self) {
        self.display_count = self.display_count.saturating_add(1);
    }
}

/// The slice of an entry the selector needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryMetadata {
    pub id: EntryId,
    pub created_at: Timestamp,
    pub last_modified: Timestamp,
    pub answered: bool,
}
