//! Event Handlers
//!
//! - keyboard: User keyboard input (grid navigation, viewer, alerts)

pub mod keyboard;
