//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, errors and the state machine
//! trait that form the vocabulary of the prayer journal domain.

mod errors;
mod ids;
mod state_machine;
mod timestamp;

pub use errors::{ErrorCode, ValidationError};
pub use ids::{CategoryId, EntryId, PanelSetId, SessionId};
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
