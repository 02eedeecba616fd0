/// Game configuration constants.
/// 
/// This module defines scoring and the fixed delays of the round and failure transitions.
pub const POINTS_PER_STEP: u32 = 10; // Score awarded for each correctly clicked block.

/// Round number a fresh game starts at.
pub const FIRST_ROUND: u32 = 1;

/// Delay (in milliseconds) between walking the whole path and the next round starting.
pub const ROUND_ADVANCE_DELAY_MS: u64 = 500;

/// Delay (in milliseconds) between a wrong click and the game over screen.
pub const FAILURE_DELAY_MS: u64 = 1200;

/// Duration (in milliseconds) of the shake effect after a wrong click.
/// Runs inside the failure delay.
pub const SHAKE_DURATION_MS: u64 = 500;
