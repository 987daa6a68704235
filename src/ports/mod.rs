//! Ports - Interfaces for external collaborators.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the session core and the outside world. Adapters implement these ports.
//!
//! - `EntryStore` - durable entries and categories
//! - `PanelCatalog` - authored panel sets
//! - `AppStateStore` - last used panel set and prayer streak
//! - `PresentationAdapter` - renders panels for the user

mod app_state_store;
mod entry_store;
mod panel_catalog;
mod presentation;

pub use app_state_store::{AppState, AppStateStore};
pub use entry_store::{EntryStore, StoreError};
pub use panel_catalog::PanelCatalog;
pub use presentation::PresentationAdapter;
