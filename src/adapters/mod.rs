//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the session core to external systems:
//! - `storage` - journal and app state stores (file, in-memory)
//! - `panels` - panel catalogs (built-in, YAML)
//! - `console` - terminal presentation

pub mod console;
pub mod panels;
pub mod storage;

pub use console::ConsoleRenderer;
pub use panels::{BuiltinPanelCatalog, YamlPanelCatalog};
pub use storage::{FileAppStateStore, FileEntryStore, InMemoryAppStateStore, InMemoryEntryStore};
