//! Storage Adapters
//!
//! Implementations of the `EntryStore` and `AppStateStore` ports.
//!
//! ## Available Adapters
//!
//! - **FileEntryStore** - Stores the journal as `journal.yaml` on disk
//! - **InMemoryEntryStore** - Stores the journal in memory (testing/development)
//! - **FileAppStateStore** / **InMemoryAppStateStore** - streak and last panel set
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FileEntryStore, InMemoryEntryStore};
//!
//! // Production: file-based storage
//! let store = FileEntryStore::new("./data");
//!
//! // Testing: in-memory storage
//! let store = InMemoryEntryStore::new();
//! ```

mod app_state;
mod file_entry_store;
mod in_memory_entry_store;
mod journal_document;
mod yaml_file;

pub use app_state::{FileAppStateStore, InMemoryAppStateStore};
pub use file_entry_store::FileEntryStore;
pub use in_memory_entry_store::InMemoryEntryStore;
