//! Domain layer containing the prayer session logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors, state machine)
//! - `journal` - Prayer entries and categories
//! - `panel` - Panels and the panel sets that order them
//! - `selection` - Recency-weighted sampling of entries
//! - `session` - Prayer session aggregate, states and transition table

pub mod foundation;
pub mod journal;
pub mod panel;
pub mod selection;
pub mod session;
