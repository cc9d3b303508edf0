//! External service interactions
//!
//! This module contains services for interacting with external systems:
//! - Roster file loading (JSON and CSV)

pub mod roster;

pub use roster::{load_roster, sample_roster};
