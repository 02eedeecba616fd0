/// Main configuration module.
/// 
/// Re-exports submodules for game pacing and difficulty scaling.
pub mod game;
pub mod difficulty;
