//! Session layer root module.
//!
//! This module wraps the pure game core in an actor and connects it to the terminal:
//! - Game session actor (owns the state machine, runs the timers)
//! - Messages exchanged between the session and its views
//! - Console view (rendering and stdin command parsing)

pub mod server;
pub mod messages;
pub mod command;
pub mod render;
pub mod console;
