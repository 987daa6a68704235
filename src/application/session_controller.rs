//! PrayerSessionController - drives one prayer session at a time.
//!
//! Each operation performs its store I/O first and only then applies the
//! outcome to the [`PrayerSession`], so a failed call leaves the session
//! exactly as it was. Successful calls render the new panel through the
//! [`PresentationAdapter`]; failed ones go to `notify_error`.

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::domain::foundation::{CategoryId, EntryId, PanelSetId, Timestamp, ValidationError};
use crate::domain::panel::PanelSet;
use crate::domain::selection::RecencySelector;
use crate::domain::session::{
    ActionKind, PanelDescriptor, PrayerSession, PresentedEntry, SessionAction, SessionError,
    SessionState, TransitionTable, Trigger,
};
use crate::ports::{AppStateStore, EntryStore, PanelCatalog, PresentationAdapter, StoreError};

/// Largest batch the loop panel will show.
pub const MAX_BATCH_SIZE: usize = 50;

/// Knobs that shape a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSettings {
    /// Entries drawn per loop iteration.
    pub batch_size: usize,
    /// Panel set used when none is requested and none was used before.
    pub default_panel_set: PanelSetId,
    /// Move on to the next catalog set instead of reusing the last one.
    pub rotate_panel_sets: bool,
    /// Fixed RNG seed for reproducible draws.
    pub seed: Option<u64>,
}

impl SessionSettings {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.batch_size == 0 || self.batch_size > MAX_BATCH_SIZE {
            return Err(ValidationError::out_of_range(
                "batch_size",
                1,
                MAX_BATCH_SIZE as i64,
                self.batch_size as i64,
            ));
        }
        Ok(())
    }
}

/// Ports the controller talks to.
#[derive(Clone)]
pub struct SessionPorts {
    pub entries: Arc<dyn EntryStore>,
    pub catalog: Arc<dyn PanelCatalog>,
    pub app_state: Arc<dyn AppStateStore>,
    pub presenter: Arc<dyn PresentationAdapter>,
}

struct ActiveSession {
    session: PrayerSession,
    panel_set: PanelSet,
    table: TransitionTable,
    streak: Option<u32>,
}

/// Runs prayer sessions against the journal.
pub struct PrayerSessionController {
    ports: SessionPorts,
    selector: RecencySelector,
    settings: SessionSettings,
    rng: StdRng,
    active: Option<ActiveSession>,
}

impl PrayerSessionController {
    pub fn new(
        ports: SessionPorts,
        selector: RecencySelector,
        settings: SessionSettings,
    ) -> Result<Self, ValidationError> {
        settings.validate()?;
        let rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self {
            ports,
            selector,
            settings,
            rng,
            active: None,
        })
    }

    /// The running (or just ended) session, if any.
    pub fn session(&self) -> Option<&PrayerSession> {
        self.active.as_ref().map(|a| &a.session)
    }

    /// What is on screen right now.
    pub fn descriptor(&self) -> Option<PanelDescriptor> {
        self.active.as_ref().map(describe)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Start a new session, replacing any previous one.
    ///
    /// Without an explicit id the panel set is the last one used (or the
    /// one after it when rotating), falling back to the configured default.
    pub async fn start(
        &mut self,
        panel_set: Option<PanelSetId>,
    ) -> Result<PanelDescriptor, SessionError> {
        let result = self.start_inner(panel_set).await;
        self.report(result)
    }

    /// Apply one user action to the running session.
    pub async fn dispatch(&mut self, action: SessionAction) -> Result<PanelDescriptor, SessionError> {
        let result = self.apply(action).await;
        self.report(result)
    }

    pub async fn advance(&mut self) -> Result<PanelDescriptor, SessionError> {
        self.dispatch(SessionAction::Advance).await
    }

    pub async fn add_entry(
        &mut self,
        content: &str,
        category_id: Option<CategoryId>,
    ) -> Result<PanelDescriptor, SessionError> {
        self.dispatch(SessionAction::AddEntry {
            content: content.to_string(),
            category_id,
        })
        .await
    }

    pub async fn mark_answered(
        &mut self,
        entry_id: EntryId,
        note: Option<String>,
    ) -> Result<PanelDescriptor, SessionError> {
        self.dispatch(SessionAction::MarkAnswered { entry_id, note })
            .await
    }

    pub async fn end_loop(&mut self) -> Result<PanelDescriptor, SessionError> {
        self.dispatch(SessionAction::EndLoop).await
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Internals
    // ─────────────────────────────────────────────────────────────────────────

    fn report(
        &self,
        result: Result<PanelDescriptor, SessionError>,
    ) -> Result<PanelDescriptor, SessionError> {
        match &result {
            Ok(descriptor) => self.ports.presenter.render(descriptor),
            Err(e) => {
                tracing::warn!(code = %e.code(), error = %e, "session action rejected");
                self.ports.presenter.notify_error(&e.message());
            }
        }
        result
    }

    async fn start_inner(
        &mut self,
        requested: Option<PanelSetId>,
    ) -> Result<PanelDescriptor, SessionError> {
        let panel_set_id = self.resolve_panel_set(requested).await?;
        let panel_set = self
            .ports
            .catalog
            .get(&panel_set_id)
            .await?
            .ok_or_else(|| SessionError::panel_set_not_found(panel_set_id.clone()))?;
        let table = TransitionTable::for_panel_set(&panel_set)?;
        let initial = SessionState::from(panel_set.first().kind);

        let first_batch = if initial == SessionState::PresentLoop {
            Some(self.draw_batch(&HashSet::new()).await?)
        } else {
            None
        };

        let mut session = PrayerSession::start(panel_set_id, initial);
        if let Some(batch) = first_batch {
            session.present_batch(batch)?;
        }

        let streak = self.record_streak().await;
        if initial == SessionState::PresentLoop {
            self.remember_panel_set(session.panel_set_id()).await;
        }

        tracing::info!(
            session_id = %session.id(),
            panel_set = %session.panel_set_id(),
            streak = ?streak,
            "prayer session started"
        );

        let active = ActiveSession {
            session,
            panel_set,
            table,
            streak,
        };
        let descriptor = describe(&active);
        self.active = Some(active);
        Ok(descriptor)
    }

    async fn resolve_panel_set(
        &self,
        requested: Option<PanelSetId>,
    ) -> Result<PanelSetId, SessionError> {
        if let Some(id) = requested {
            return Ok(id);
        }

        let last_used = match self.ports.app_state.load().await {
            Ok(state) => state.last_panel_set,
            Err(e) => {
                tracing::warn!(error = %e, "could not read app state, using default panel set");
                None
            }
        };
        let Some(last) = last_used else {
            return Ok(self.settings.default_panel_set.clone());
        };

        let ids = self.ports.catalog.list_ids().await?;
        let Some(pos) = ids.iter().position(|id| id == &last) else {
            tracing::warn!(
                panel_set = %last,
                "last used panel set is not in the catalog, using default"
            );
            return Ok(self.settings.default_panel_set.clone());
        };
        if !self.settings.rotate_panel_sets {
            return Ok(last);
        }
        Ok(ids[(pos + 1) % ids.len()].clone())
    }

    /// Extend the streak for today. Failures are logged, never fatal.
    async fn record_streak(&self) -> Option<u32> {
        let mut state = match self.ports.app_state.load().await {
            Ok(state) => state,
            Err(e) => {
                tracing::warn!(error = %e, "could not load prayer streak");
                return None;
            }
        };
        state.streak = state.streak.record(Timestamp::now().date());
        match self.ports.app_state.save(&state).await {
            Ok(()) => Some(state.streak.count),
            Err(e) => {
                tracing::warn!(error = %e, "could not save prayer streak");
                None
            }
        }
    }

    async fn remember_panel_set(&self, id: &PanelSetId) {
        let result: Result<(), StoreError> = async {
            let mut state = self.ports.app_state.load().await?;
            state.last_panel_set = Some(id.clone());
            self.ports.app_state.save(&state).await
        }
        .await;
        if let Err(e) = result {
            tracing::warn!(panel_set = %id, error = %e, "could not record last panel set");
        }
    }

    /// Draw the next batch, counting the showing in the store and resolving
    /// category names.
    async fn draw_batch(
        &mut self,
        exclude: &HashSet<EntryId>,
    ) -> Result<Vec<PresentedEntry>, SessionError> {
        let metadata = self.ports.entries.list_entry_metadata().await?;
        let ids = self.selector.select(
            &metadata,
            self.settings.batch_size,
            exclude,
            &Timestamp::now(),
            &mut self.rng,
        );
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let names: HashMap<CategoryId, String> = self
            .ports
            .entries
            .list_categories()
            .await?
            .into_iter()
            .map(|c| (*c.id(), c.name().to_string()))
            .collect();

        let shown = self.ports.entries.record_presented(&ids).await?;
        let batch = shown
            .iter()
            .map(|entry| {
                let category = entry.category_id().and_then(|c| names.get(c).cloned());
                PresentedEntry::from_entry(entry, category)
            })
            .collect();
        Ok(batch)
    }

    fn active(&self) -> Result<&ActiveSession, SessionError> {
        self.active
            .as_ref()
            .ok_or_else(|| SessionError::invalid_state("no session has been started"))
    }

    fn active_mut(&mut self) -> Result<&mut ActiveSession, SessionError> {
        self.active
            .as_mut()
            .ok_or_else(|| SessionError::invalid_state("no session has been started"))
    }

    async fn apply(&mut self, action: SessionAction) -> Result<PanelDescriptor, SessionError> {
        let (from, target) = {
            let active = self.active()?;
            active.session.ensure_active()?;
            let from = active.session.state();
            let kind = action.kind();
            let target = active
                .table
                .next(from, Trigger::Action(kind))
                .ok_or_else(|| {
                    SessionError::invalid_state(format!("cannot {} during {}", kind, from))
                })?;
            (from, target)
        };

        match action {
            SessionAction::Advance if from == SessionState::PresentLoop => {
                self.next_loop_batch().await?;
            }
            SessionAction::Advance | SessionAction::EndLoop => {
                self.move_to(target).await?;
            }
            SessionAction::AddEntry {
                content,
                category_id,
            } => {
                let entry = self
                    .ports
                    .entries
                    .create_entry(&content, category_id)
                    .await?;
                self.active_mut()?.session.record_entry_added()?;
                tracing::info!(entry_id = %entry.id(), "entry added");
            }
            SessionAction::MarkAnswered { entry_id, note } => {
                let newly_answered = self
                    .ports
                    .entries
                    .update_entry_answered(&entry_id, true, None, note)
                    .await?;
                self.active_mut()?
                    .session
                    .record_answered(&entry_id, newly_answered)?;
                tracing::info!(entry_id = %entry_id, newly_answered, "entry marked answered");
            }
        }

        let active = self.active()?;
        if active.session.is_ended() {
            let stats = active.session.stats();
            tracing::info!(
                session_id = %active.session.id(),
                presented = stats.entries_presented,
                added = stats.entries_added,
                answered = stats.entries_answered,
                "prayer session ended"
            );
        }
        Ok(describe(active))
    }

    /// Advance inside the loop: show the next batch or leave when empty.
    async fn next_loop_batch(&mut self) -> Result<(), SessionError> {
        let exclude = self.active()?.session.presented().clone();
        let batch = self.draw_batch(&exclude).await?;

        if batch.is_empty() {
            let exit = self
                .active()?
                .table
                .next(SessionState::PresentLoop, Trigger::Exhausted)
                .ok_or_else(|| SessionError::invalid_state("loop panel has no exit"))?;
            tracing::debug!("no entries left to present, leaving loop");
            return self.move_to(exit).await;
        }

        self.active_mut()?.session.present_batch(batch)
    }

    /// Enter `target`, drawing the first batch when it is the loop.
    async fn move_to(&mut self, target: SessionState) -> Result<(), SessionError> {
        let first_batch = if target == SessionState::PresentLoop {
            let exclude = self.active()?.session.presented().clone();
            Some(self.draw_batch(&exclude).await?)
        } else {
            None
        };

        let active = self.active_mut()?;
        let index = panel_index(&active.panel_set, target);
        active.session.enter(target, index)?;
        if let Some(batch) = first_batch {
            active.session.present_batch(batch)?;
            let id = active.session.panel_set_id().clone();
            self.remember_panel_set(&id).await;
        }
        Ok(())
    }
}

fn panel_index(set: &PanelSet, state: SessionState) -> usize {
    state
        .panel_kind()
        .and_then(|kind| set.panels().iter().position(|p| p.kind == kind))
        .unwrap_or(set.panels().len())
}

fn describe(active: &ActiveSession) -> PanelDescriptor {
    let session = &active.session;
    let state = session.state();
    let show_summary = matches!(state, SessionState::Closing | SessionState::Ended);
    let legal_actions: Vec<ActionKind> = if state.is_ended() {
        Vec::new()
    } else {
        active.table.legal_actions(state)
    };

    PanelDescriptor {
        session_id: *session.id(),
        panel_set_id: session.panel_set_id().clone(),
        state,
        panel: active.panel_set.panels().get(session.panel_index()).cloned(),
        entries: session.current_batch().to_vec(),
        legal_actions,
        stats: show_summary.then(|| session.stats()),
        streak: if show_summary { active.streak } else { None },
    }
}
