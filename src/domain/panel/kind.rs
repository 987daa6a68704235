//! PanelKind - the kinds of screens in a prayer session, and their order.
//!
//! # Canonical Order
//!
//! 1. Welcome → 2. Worship → 3. ShareAndAdd → 4. PresentLoop →
//! 5. Encouragement → 6. Closing
//!
//! A panel set may omit kinds but never reorders them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One discrete step of a prayer session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelKind {
    Welcome,
    Worship,
    ShareAndAdd,
    PresentLoop,
    Encouragement,
    Closing,
}

impl PanelKind {
    /// The canonical order of panel kinds.
    pub const ORDER: [PanelKind; 6] = [
        PanelKind::Welcome,
        PanelKind::Worship,
        PanelKind::ShareAndAdd,
        PanelKind::PresentLoop,
        PanelKind::Encouragement,
        PanelKind::Closing,
    ];

    /// Returns the 0-based position of this kind in the canonical order.
    pub fn order_index(self) -> usize {
        match self {
            PanelKind::Welcome => 0,
            PanelKind::Worship => 1,
            PanelKind::ShareAndAdd => 2,
            PanelKind::PresentLoop => 3,
            PanelKind::Encouragement => 4,
            PanelKind::Closing => 5,
        }
    }

    /// Returns true if `self` comes strictly before `other`.
    pub fn is_before(self, other: PanelKind) -> bool {
        self.order_index() < other.order_index()
    }

    /// Only the loop panel may be shown more than once in a traversal.
    pub fn can_repeat(self) -> bool {
        matches!(self, PanelKind::PresentLoop)
    }
}

impl fmt::Display for PanelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PanelKind::Welcome => "Welcome",
            PanelKind::Worship => "Worship",
            PanelKind::ShareAndAdd => "Share and Add",
            PanelKind::PresentLoop => "Present",
            PanelKind::Encouragement => "Encouragement",
            PanelKind::Closing => "Closing",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_index_matches_order_array() {
        for (i, kind) in PanelKind::ORDER.iter().enumerate() {
            assert_eq!(kind.order_index(), i);
        }
    }

    #[test]
    fn is_before_follows_canonical_order() {
        assert!(PanelKind::Welcome.is_before(PanelKind::Closing));
        assert!(!PanelKind::Encouragement.is_before(PanelKind::PresentLoop));
        assert!(!PanelKind::Worship.is_before(PanelKind::Worship));
    }

    #[test]
    fn only_present_loop_repeats() {
        let repeating: Vec<_> = PanelKind::ORDER.iter().filter(|k| k.can_repeat()).collect();
        assert_eq!(repeating, vec![&PanelKind::PresentLoop]);
    }

    #[test]
    fn serializes_to_snake_case() {
        assert_eq!(
            serde_json::to_string(&PanelKind::ShareAndAdd).unwrap(),
            "\"share_and_add\""
        );
    }
}
