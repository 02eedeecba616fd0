/// Difficulty scaling constants.
/// 
/// Grid size, path length and reveal time are all derived from the round number
/// using these values.
pub const BASE_GRID_SIZE: usize = 5; // Grid side length on the first rounds.

/// Largest grid side length; growth stops here.
pub const MAX_GRID_SIZE: usize = 8;

/// The grid grows by one row and one column every this many rounds.
pub const GRID_GROWTH_INTERVAL: u32 = 3;

/// Path length before any round scaling.
pub const BASE_PATH_LENGTH: usize = 6;

/// Path growth per round, in tenths of a block (1.2 blocks per round).
pub const PATH_GROWTH_TENTHS: usize = 12;

/// Number of cells that are always left off the path.
pub const UNUSED_CELLS: usize = 2;

/// Reveal time (in milliseconds) before round scaling.
pub const REVEAL_BASE_MS: u64 = 3000;

/// Reveal time (in milliseconds) removed per round.
pub const REVEAL_STEP_MS: u64 = 100;

/// Shortest reveal time (in milliseconds).
pub const REVEAL_MIN_MS: u64 = 1500;

/// Probability that a move to the left is offered to the path walk.
pub const LEFT_BACKTRACK_PROBABILITY: f64 = 0.5;

/// Probability that a move up is offered to the path walk.
pub const UP_BACKTRACK_PROBABILITY: f64 = 0.3;
