//! My Prayers - a personal prayer journal with guided sessions
//!
//! A session walks the user through an authored panel set (welcome,
//! worship, sharing, praying through requests, encouragement, closing).
//! During the loop panel, past requests are drawn from the journal with
//! a recency-weighted random selector, so recent concerns come up most
//! often without older ones being forgotten.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
