//! Panel-ready content handed to the presentation layer.

use serde::{Deserialize, Serialize};

use super::{ActionKind, SessionState};
use crate::domain::foundation::{EntryId, PanelSetId, SessionId, Timestamp};
use crate::domain::journal::Entry;
use crate::domain::panel::Panel;

/// A copy of an entry as shown inside the loop panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresentedEntry {
    pub id: EntryId,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub created_at: Timestamp,
    pub answered: bool,
    /// Times the entry has been shown in a prayer loop, this showing included.
    #[serde(default)]
    pub display_count: u32,
}

impl PresentedEntry {
    pub fn from_entry(entry: &Entry, category: Option<String>) -> Self {
        Self {
            id: *entry.id(),
            content: entry.content().to_string(),
            category,
            created_at: *entry.created_at(),
            answered: entry.is_answered(),
            display_count: entry.display_count(),
        }
    }
}

/// Running counters for one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionStats {
    pub entries_added: u32,
    pub entries_presented: u32,
    pub entries_answered: u32,
    pub batches_presented: u32,
}

/// Everything a renderer needs to draw the current panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PanelDescriptor {
    pub session_id: SessionId,
    pub panel_set_id: PanelSetId,
    pub state: SessionState,
    /// `None` once the session has ended.
    pub panel: Option<Panel>,
    pub entries: Vec<PresentedEntry>,
    pub legal_actions: Vec<ActionKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<SessionStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub streak: Option<u32>,
}

impl PanelDescriptor {
    pub fn allows(&self, action: ActionKind) -> bool {
        self.legal_actions.contains(&action)
    }
}
