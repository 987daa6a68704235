//! Session-specific error types.
//!
//! Every failing transition returns one of these and leaves the session
//! exactly as it was before the call.

use crate::domain::foundation::{CategoryId, EntryId, ErrorCode, PanelSetId, ValidationError};
use crate::ports::StoreError;

/// What a `NotFound` error refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MissingRecord {
    Entry(EntryId),
    Category(CategoryId),
    PanelSet(PanelSetId),
}

/// Session-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Malformed input to a mutating transition.
    Validation { field: String, message: String },
    /// Reference to a record that does not exist.
    NotFound(MissingRecord),
    /// Transition not permitted from the current state.
    InvalidState(String),
    /// The entry store could not be reached or queried.
    StoreUnavailable(String),
}

impl SessionError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        SessionError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn entry_not_found(id: EntryId) -> Self {
        SessionError::NotFound(MissingRecord::Entry(id))
    }
    pub fn panel_set_not_found(id: PanelSetId) -> Self {
        SessionError::NotFound(MissingRecord::PanelSet(id))
    }
    pub fn invalid_state(message: impl Into<String>) -> Self {
        SessionError::InvalidState(message.into())
    }
    pub fn store_unavailable(message: impl Into<String>) -> Self {
        SessionError::StoreUnavailable(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            SessionError::Validation { .. } => ErrorCode::ValidationFailed,
            SessionError::NotFound(MissingRecord::Entry(_)) => ErrorCode::EntryNotFound,
            SessionError::NotFound(MissingRecord::Category(_)) => ErrorCode::CategoryNotFound,
            SessionError::NotFound(MissingRecord::PanelSet(_)) => ErrorCode::PanelSetNotFound,
            SessionError::InvalidState(_) => ErrorCode::InvalidStateTransition,
            SessionError::StoreUnavailable(_) => ErrorCode::StoreUnavailable,
        }
    }
    /// True for errors the user can fix or retry; false for integration bugs.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, SessionError::InvalidState(_))
    }
    pub fn message(&self) -> String {
        match self {
            SessionError::Validation { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            SessionError::NotFound(MissingRecord::Entry(id)) => format!("Entry not found: {}", id),
            SessionError::NotFound(MissingRecord::Category(id)) => {
                format!("Category not found: {}", id)
            }
            SessionError::NotFound(MissingRecord::PanelSet(id)) => {
                format!("Panel set not found: {}", id)
            }
            SessionError::InvalidState(msg) => format!("Invalid state: {}", msg),
            SessionError::StoreUnavailable(msg) => format!("Journal unavailable: {}", msg),
        }
    }
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for SessionError {}

impl From<ValidationError> for SessionError {
    fn from(err: ValidationError) -> Self {
        SessionError::Validation {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<StoreError> for SessionError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Validation(v) => v.into(),
            StoreError::EntryNotFound(id) => SessionError::NotFound(MissingRecord::Entry(id)),
            StoreError::CategoryNotFound(id) => SessionError::NotFound(MissingRecord::Category(id)),
            other => SessionError::StoreUnavailable(other.to_string()),
        }
    }
}
