//! Game core: grid geometry, path generation, round scaling and the state machine.
//!
//! Nothing in this module does I/O or waits on a clock.

pub mod types;
pub mod grid;
pub mod path;
pub mod round;
pub mod state;
pub mod visual;
