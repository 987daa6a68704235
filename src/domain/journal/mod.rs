//! Journal module - the persisted records of the prayer journal.
//!
//! The core only ever holds copies of these records; the `EntryStore`
//! port owns the authoritative versions.

mod category;
mod entry;

pub use category::Category;
pub use entry::{Entry, EntryMetadata, MAX_CONTENT_LENGTH};
