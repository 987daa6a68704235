//! SessionState - where a prayer session currently is.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;
use crate::domain::panel::PanelKind;

/// State of a prayer session. `Welcome` is initial, `Ended` terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    Welcome,
    Worship,
    ShareAndAdd,
    PresentLoop,
    Encouragement,
    Closing,
    Ended,
}

impl SessionState {
    pub const ALL: [SessionState; 7] = [
        SessionState::Welcome,
        SessionState::Worship,
        SessionState::ShareAndAdd,
        SessionState::PresentLoop,
        SessionState::Encouragement,
        SessionState::Closing,
        SessionState::Ended,
    ];

    /// The panel shown in this state; `None` once ended.
    pub fn panel_kind(self) -> Option<PanelKind> {
        match self {
            SessionState::Welcome => Some(PanelKind::Welcome),
            SessionState::Worship => Some(PanelKind::Worship),
            SessionState::ShareAndAdd => Some(PanelKind::ShareAndAdd),
            SessionState::PresentLoop => Some(PanelKind::PresentLoop),
            SessionState::Encouragement => Some(PanelKind::Encouragement),
            SessionState::Closing => Some(PanelKind::Closing),
            SessionState::Ended => None,
        }
    }

    pub fn is_ended(self) -> bool {
        matches!(self, SessionState::Ended)
    }

    fn order_index(self) -> usize {
        self.panel_kind()
            .map(PanelKind::order_index)
            .unwrap_or(PanelKind::ORDER.len())
    }
}

impl From<PanelKind> for SessionState {
    fn from(kind: PanelKind) -> Self {
        match kind {
            PanelKind::Welcome => SessionState::Welcome,
            PanelKind::Worship => SessionState::Worship,
            PanelKind::ShareAndAdd => SessionState::ShareAndAdd,
            PanelKind::PresentLoop => SessionState::PresentLoop,
            PanelKind::Encouragement => SessionState::Encouragement,
            PanelKind::Closing => SessionState::Closing,
        }
    }
}

impl StateMachine for SessionState {
    /// Moves only go forward along the canonical order (panels may be
    /// skipped by a panel set); `ShareAndAdd` and `PresentLoop` may also
    /// stay put. Nothing leaves `Ended`.
    fn can_transition_to(&self, target: &Self) -> bool {
        use SessionState::*;
        match (self, target) {
            (Ended, _) => false,
            (ShareAndAdd, ShareAndAdd) | (PresentLoop, PresentLoop) => true,
            (from, to) => from.order_index() < to.order_index(),
        }
    }

    fn valid_transitions(&self) -> Vec<Self> {
        Self::ALL
            .iter()
            .copied()
            .filter(|target| self.can_transition_to(target))
            .collect()
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.panel_kind() {
            Some(kind) => write!(f, "{}", kind),
            None => write!(f, "Ended"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ended_is_the_only_terminal_state() {
        for state in SessionState::ALL {
            assert_eq!(state.is_terminal(), state == SessionState::Ended, "{:?}", state);
        }
    }

    #[test]
    fn forward_moves_are_valid() {
        assert!(SessionState::Welcome.can_transition_to(&SessionState::Worship));
        assert!(SessionState::PresentLoop.can_transition_to(&SessionState::Encouragement));
        assert!(SessionState::Closing.can_transition_to(&SessionState::Ended));
    }

    #[test]
    fn backward_moves_are_invalid() {
        assert!(!SessionState::Worship.can_transition_to(&SessionState::Welcome));
        assert!(SessionState::Closing
            .transition_to(SessionState::PresentLoop)
            .is_err());
    }

    #[test]
    fn only_share_and_loop_panels_self_loop() {
        for state in SessionState::ALL {
            let expected = matches!(state, SessionState::ShareAndAdd | SessionState::PresentLoop);
            assert_eq!(state.can_transition_to(&state), expected, "{:?}", state);
        }
    }

    #[test]
    fn can_transition_to_is_consistent_with_valid_transitions() {
        for from in SessionState::ALL {
            for to in from.valid_transitions() {
                assert!(from.can_transition_to(&to));
            }
        }
    }

    #[test]
    fn panel_kind_roundtrips() {
        for kind in PanelKind::ORDER {
            assert_eq!(SessionState::from(kind).panel_kind(), Some(kind));
        }
        assert_eq!(SessionState::Ended.panel_kind(), None);
    }
}
