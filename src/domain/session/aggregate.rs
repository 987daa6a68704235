//! PrayerSession aggregate - transient state of one run through a panel set.
//!
//! The session only records outcomes; the controller performs any store
//! I/O first and applies the result here once it has succeeded, so a
//! failed transition never leaves a half-updated session.
//!
//! # Invariants
//!
//! - every id in `current_batch` is also in `presented`
//! - `presented` only grows while the session is alive
//! - once `Ended`, no mutation succeeds

use std::collections::HashSet;

use super::{PresentedEntry, SessionError, SessionState, SessionStats};
use crate::domain::foundation::{EntryId, PanelSetId, SessionId, StateMachine, Timestamp};

/// Transient state of one prayer session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrayerSession {
    id: SessionId,
    panel_set_id: PanelSetId,
    state: SessionState,
    panel_index: usize,
    presented: HashSet<EntryId>,
    current_batch: Vec<PresentedEntry>,
    stats: SessionStats,
    started_at: Timestamp,
    ended_at: Option<Timestamp>,
}

impl PrayerSession {
    /// Starts a session on the first panel of its set.
    pub fn start(panel_set_id: PanelSetId, initial: SessionState) -> Self {
        Self {
            id: SessionId::new(),
            panel_set_id,
            state: initial,
            panel_index: 0,
            presented: HashSet::new(),
            current_batch: Vec::new(),
            stats: SessionStats::default(),
            started_at: Timestamp::now(),
            ended_at: None,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn panel_set_id(&self) -> &PanelSetId {
        &self.panel_set_id
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Index of the current panel within the panel set.
    pub fn panel_index(&self) -> usize {
        self.panel_index
    }

    /// Ids already shown in this session's loop.
    pub fn presented(&self) -> &HashSet<EntryId> {
        &self.presented
    }

    pub fn current_batch(&self) -> &[PresentedEntry] {
        &self.current_batch
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    pub fn started_at(&self) -> &Timestamp {
        &self.started_at
    }

    pub fn ended_at(&self) -> Option<&Timestamp> {
        self.ended_at.as_ref()
    }

    pub fn is_ended(&self) -> bool {
        self.state.is_ended()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Fails with `InvalidState` once the session has ended.
    pub fn ensure_active(&self) -> Result<(), SessionError> {
        if self.is_ended() {
            Err(SessionError::invalid_state("the session has ended"))
        } else {
            Ok(())
        }
    }

    /// Moves to `target`, which must be a legal move from the current state.
    ///
    /// Leaving the loop clears the batch on display; reaching `Ended`
    /// stamps the end time.
    pub fn enter(&mut self, target: SessionState, panel_index: usize) -> Result<(), SessionError> {
        self.ensure_active()?;
        let next = self
            .state
            .transition_to(target)
            .map_err(|e| SessionError::invalid_state(e.to_string()))?;

        if next != SessionState::PresentLoop {
            self.current_batch.clear();
        }
        if next.is_ended() {
            self.ended_at = Some(Timestamp::now());
        }
        self.state = next;
        self.panel_index = panel_index;
        Ok(())
    }

    /// Puts a freshly drawn batch on display and remembers its ids.
    pub fn present_batch(&mut self, batch: Vec<PresentedEntry>) -> Result<(), SessionError> {
        self.ensure_in(SessionState::PresentLoop)?;
        self.presented.extend(batch.iter().map(|e| e.id));
        self.stats.entries_presented += batch.len() as u32;
        self.stats.batches_presented += 1;
        self.current_batch = batch;
        Ok(())
    }

    pub fn record_entry_added(&mut self) -> Result<(), SessionError> {
        self.ensure_in(SessionState::ShareAndAdd)?;
        self.stats.entries_added += 1;
        Ok(())
    }

    /// Records that `entry_id` was marked answered, updating the copy on
    /// display if it is part of the current batch. Only a newly answered
    /// entry counts towards the session stats.
    pub fn record_answered(
        &mut self,
        entry_id: &EntryId,
        newly_answered: bool,
    ) -> Result<(), SessionError> {
        self.ensure_in(SessionState::PresentLoop)?;
        if let Some(shown) = self.current_batch.iter_mut().find(|e| &e.id == entry_id) {
            shown.answered = true;
        }
        if newly_answered {
            self.stats.entries_answered += 1;
        }
        Ok(())
    }

    fn ensure_in(&self, expected: SessionState) -> Result<(), SessionError> {
        self.ensure_active()?;
        if self.state != expected {
            return Err(SessionError::invalid_state(format!(
                "expected {:?}, session is in {:?}",
                expected, self.state
            )));
        }
        Ok(())
    }
}
