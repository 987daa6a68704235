//! Panel module - the screens a prayer session walks through.

mod kind;
mod panel_set;

pub use kind::PanelKind;
pub use panel_set::{Panel, PanelSet, Paragraph};
