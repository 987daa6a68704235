//! Actions and the transition table that drives a session.
//!
//! The table is derived from a panel set: each panel advances to the next
//! one in the set, the last panel advances to `Ended`, and the share and
//! loop panels add their own self-transitions. Every row is checked
//! against [`SessionState`]'s canonical rules when the table is built.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::SessionState;
use crate::domain::foundation::{CategoryId, EntryId, StateMachine, ValidationError};
use crate::domain::panel::{PanelKind, PanelSet};

/// The kinds of user action a presentation layer can dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    Advance,
    AddEntry,
    MarkAnswered,
    EndLoop,
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ActionKind::Advance => "advance",
            ActionKind::AddEntry => "add entry",
            ActionKind::MarkAnswered => "mark answered",
            ActionKind::EndLoop => "end loop",
        };
        write!(f, "{}", s)
    }
}

/// An inbound action with its payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum SessionAction {
    Advance,
    AddEntry {
        content: String,
        #[serde(default)]
        category_id: Option<CategoryId>,
    },
    MarkAnswered {
        entry_id: EntryId,
        #[serde(default)]
        note: Option<String>,
    },
    EndLoop,
}

impl SessionAction {
    pub fn kind(&self) -> ActionKind {
        match self {
            SessionAction::Advance => ActionKind::Advance,
            SessionAction::AddEntry { .. } => ActionKind::AddEntry,
            SessionAction::MarkAnswered { .. } => ActionKind::MarkAnswered,
            SessionAction::EndLoop => ActionKind::EndLoop,
        }
    }
}

/// What fires a row of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigger {
    /// A user action.
    Action(ActionKind),
    /// The selector returned an empty batch inside the loop.
    Exhausted,
}

/// One row: `from --trigger--> to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionRow {
    pub from: SessionState,
    pub trigger: Trigger,
    pub to: SessionState,
}

/// Transition table for one panel set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionTable {
    rows: Vec<TransitionRow>,
}

impl TransitionTable {
    /// Derives the table for a panel set.
    ///
    /// # Errors
    ///
    /// - `InvalidFormat` if a derived row breaks the canonical state rules
    pub fn for_panel_set(set: &PanelSet) -> Result<Self, ValidationError> {
        let mut rows = Vec::new();

        for panel in set.panels() {
            let from = SessionState::from(panel.kind);
            let next = set
                .next_kind(panel.kind)
                .map(SessionState::from)
                .unwrap_or(SessionState::Ended);

            match panel.kind {
                PanelKind::ShareAndAdd => {
                    rows.push(row(from, Trigger::Action(ActionKind::AddEntry), from));
                    rows.push(row(from, Trigger::Action(ActionKind::Advance), next));
                }
                PanelKind::PresentLoop => {
                    rows.push(row(from, Trigger::Action(ActionKind::Advance), from));
                    rows.push(row(from, Trigger::Action(ActionKind::MarkAnswered), from));
                    rows.push(row(from, Trigger::Action(ActionKind::EndLoop), next));
                    rows.push(row(from, Trigger::Exhausted, next));
                }
                _ => rows.push(row(from, Trigger::Action(ActionKind::Advance), next)),
            }
        }

        for r in &rows {
            r.from.transition_to(r.to)?;
        }

        Ok(Self { rows })
    }

    /// Target of `trigger` from `from`, or `None` if the table has no such row.
    pub fn next(&self, from: SessionState, trigger: Trigger) -> Option<SessionState> {
        self.rows
            .iter()
            .find(|r| r.from == from && r.trigger == trigger)
            .map(|r| r.to)
    }

    /// The user actions with a row out of `from`, in table order.
    pub fn legal_actions(&self, from: SessionState) -> Vec<ActionKind> {
        self.rows
            .iter()
            .filter(|r| r.from == from)
            .filter_map(|r| match r.trigger {
                Trigger::Action(kind) => Some(kind),
                Trigger::Exhausted => None,
            })
            .collect()
    }

    pub fn rows(&self) -> &[TransitionRow] {
        &self.rows
    }
}

fn row(from: SessionState, trigger: Trigger, to: SessionState) -> TransitionRow {
    TransitionRow { from, trigger, to }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::PanelSetId;
    use crate::domain::panel::{Panel, Paragraph};

    fn set_of(kinds: &[PanelKind]) -> PanelSet {
        PanelSet::new(
            PanelSetId::new("t").unwrap(),
            kinds
                .iter()
                .map(|k| Panel::new(*k, k.to_string(), vec![Paragraph::new("x")]))
                .collect(),
        )
        .unwrap()
    }

    fn advance() -> Trigger {
        Trigger::Action(ActionKind::Advance)
    }

    #[test]
    fn full_set_follows_canonical_flow() {
        let table = TransitionTable::for_panel_set(&set_of(&PanelKind::ORDER)).unwrap();
        use SessionState::*;

        assert_eq!(table.next(Welcome, advance()), Some(Worship));
        assert_eq!(table.next(Worship, advance()), Some(ShareAndAdd));
        assert_eq!(table.next(ShareAndAdd, advance()), Some(PresentLoop));
        assert_eq!(table.next(PresentLoop, advance()), Some(PresentLoop));
        assert_eq!(
            table.next(PresentLoop, Trigger::Action(ActionKind::EndLoop)),
            Some(Encouragement)
        );
        assert_eq!(table.next(PresentLoop, Trigger::Exhausted), Some(Encouragement));
        assert_eq!(table.next(Encouragement, advance()), Some(Closing));
        assert_eq!(table.next(Closing, advance()), Some(Ended));
    }

    #[test]
    fn add_entry_only_from_share_panel() {
        let table = TransitionTable::for_panel_set(&set_of(&PanelKind::ORDER)).unwrap();
        let add = Trigger::Action(ActionKind::AddEntry);
        assert_eq!(table.next(SessionState::ShareAndAdd, add), Some(SessionState::ShareAndAdd));
        assert_eq!(table.next(SessionState::Welcome, add), None);
        assert_eq!(table.next(SessionState::PresentLoop, add), None);
    }

    #[test]
    fn ended_has_no_rows() {
        let table = TransitionTable::for_panel_set(&set_of(&PanelKind::ORDER)).unwrap();
        assert!(table.legal_actions(SessionState::Ended).is_empty());
        assert_eq!(table.next(SessionState::Ended, advance()), None);
    }

    #[test]
    fn legal_actions_in_loop_exclude_internal_trigger() {
        let table = TransitionTable::for_panel_set(&set_of(&PanelKind::ORDER)).unwrap();
        assert_eq!(
            table.legal_actions(SessionState::PresentLoop),
            vec![ActionKind::Advance, ActionKind::MarkAnswered, ActionKind::EndLoop]
        );
    }

    #[test]
    fn loop_as_last_panel_exits_to_ended() {
        let table = TransitionTable::for_panel_set(&set_of(&[
            PanelKind::ShareAndAdd,
            PanelKind::PresentLoop,
        ]))
        .unwrap();
        assert_eq!(
            table.next(SessionState::PresentLoop, Trigger::Exhausted),
            Some(SessionState::Ended)
        );
    }

    #[test]
    fn every_row_respects_state_rules() {
        let table = TransitionTable::for_panel_set(&set_of(&[
            PanelKind::Welcome,
            PanelKind::PresentLoop,
            PanelKind::Closing,
        ]))
        .unwrap();
        for r in table.rows() {
            assert!(r.from.can_transition_to(&r.to), "{:?}", r);
        }
    }

    #[test]
    fn session_action_deserializes_from_tagged_json() {
        let action: SessionAction =
            serde_json::from_str(r#"{"action":"add_entry","content":"Rain"}"#).unwrap();
        assert_eq!(
            action,
            SessionAction::AddEntry {
                content: "Rain".into(),
                category_id: None
            }
        );
        assert_eq!(action.kind(), ActionKind::AddEntry);
    }
}
