//! Application layer - orchestrates the session core and its ports.

mod session_controller;

pub use session_controller::{
    PrayerSessionController, SessionPorts, SessionSettings, MAX_BATCH_SIZE,
};
