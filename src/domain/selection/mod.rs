//! Selection module - choosing which entries a session revisits.

mod recency_selector;

pub use recency_selector::{RecencyBasis, RecencySelector, SelectionPolicy};
