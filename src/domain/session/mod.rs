//! Session module - the prayer session state machine.
//!
//! - `SessionState` - the enumerated states and their canonical rules
//! - `TransitionTable` - rows derived from a panel set
//! - `PrayerSession` - the transient aggregate the controller owns
//! - `PanelDescriptor` - what the presentation layer receives

mod aggregate;
mod descriptor;
mod errors;
mod state;
mod streak;
mod transition;

pub use aggregate::PrayerSession;
pub use descriptor::{PanelDescriptor, PresentedEntry, SessionStats};
pub use errors::{MissingRecord, SessionError};
pub use state::SessionState;
pub use streak::PrayerStreak;
pub use transition::{ActionKind, SessionAction, TransitionRow, TransitionTable, Trigger};
