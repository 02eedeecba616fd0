//! Round setup.
//!
//! Every round parameter is a pure function of the round number: the grid grows every few
//! rounds, the path gets longer and the reveal gets shorter.

use std::time::Duration;

use rand::Rng;

use crate::config::difficulty::{
    BASE_GRID_SIZE, MAX_GRID_SIZE, GRID_GROWTH_INTERVAL, BASE_PATH_LENGTH, PATH_GROWTH_TENTHS,
    UNUSED_CELLS, REVEAL_BASE_MS, REVEAL_STEP_MS, REVEAL_MIN_MS,
};
use crate::game::grid::Grid;
use crate::game::path::{Path, generate_path};

/// Side length of the (square) grid for `round`.
pub fn grid_size(round: u32) -> usize {
    (BASE_GRID_SIZE + (round / GRID_GROWTH_INTERVAL) as usize).min(MAX_GRID_SIZE)
}

/// Number of blocks requested from the path generator for `round` on `grid`.
pub fn path_length(round: u32, grid: &Grid) -> usize {
    let grown = BASE_PATH_LENGTH + round as usize * PATH_GROWTH_TENTHS / 10;
    grown.min(grid.cell_count().saturating_sub(UNUSED_CELLS))
}

/// How long the path stays visible before play starts.
pub fn reveal_duration(round: u32) -> Duration {
    let ms = REVEAL_BASE_MS
        .saturating_sub(u64::from(round) * REVEAL_STEP_MS)
        .max(REVEAL_MIN_MS);
    Duration::from_millis(ms)
}

/// Parameters for one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundParams {
    pub grid: Grid,
    pub path_length: usize,
    pub reveal: Duration,
}

impl RoundParams {
    pub fn for_round(round: u32) -> Self {
        let grid = Grid::square(grid_size(round));
        Self {
            grid,
            path_length: path_length(round, &grid),
            reveal: reveal_duration(round),
        }
    }
}

/// The board of a round in progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    pub number: u32,
    pub grid: Grid,
    pub path: Path,
}

/// A freshly generated round and how long to reveal it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundSetup {
    pub round: Round,
    pub reveal: Duration,
}

/// Build round `number`: size the grid, generate its path, and compute the reveal time.
pub fn start_round<R: Rng + ?Sized>(number: u32, rng: &mut R) -> RoundSetup {
    let params = RoundParams::for_round(number);
    let path = generate_path(params.grid, params.path_length, rng);
    RoundSetup {
        round: Round {
            number,
            grid: params.grid,
            path,
        },
        reveal: params.reveal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_round_one() {
        let params = RoundParams::for_round(1);
        assert_eq!(params.grid, Grid::square(5));
        assert_eq!(params.path_length, 7);
        assert_eq!(params.reveal, Duration::from_millis(2900));
    }

    #[test]
    fn test_round_ten() {
        let params = RoundParams::for_round(10);
        assert_eq!(params.grid, Grid::square(8));
        assert_eq!(params.path_length, 18);
        assert_eq!(params.reveal, Duration::from_millis(2000));
    }

    #[test]
    fn test_round_thirty() {
        let params = RoundParams::for_round(30);
        assert_eq!(params.grid, Grid::square(8));
        assert_eq!(params.path_length, 42);
        assert_eq!(params.reveal, Duration::from_millis(1500));
    }

    #[test]
    fn test_grid_grows_every_three_rounds() {
        let sizes: Vec<usize> = (1..=12).map(grid_size).collect();
        assert_eq!(sizes, vec![5, 5, 6, 6, 6, 7, 7, 7, 8, 8, 8, 8]);
        assert_eq!(grid_size(1000), MAX_GRID_SIZE);
    }

    #[test]
    fn test_path_length_keeps_unused_cells() {
        // 6 + floor(50 * 1.2) = 66 would not fit on an 8x8 board.
        assert_eq!(path_length(50, &Grid::square(8)), 62);
        assert_eq!(path_length(4, &Grid::square(6)), 10);
        assert_eq!(path_length(1, &Grid::new(1, 1)), 0);
    }

    #[test]
    fn test_reveal_floors_at_minimum() {
        assert_eq!(reveal_duration(15), Duration::from_millis(1500));
        assert_eq!(reveal_duration(16), Duration::from_millis(1500));
        assert_eq!(reveal_duration(u32::MAX), Duration::from_millis(1500));
        assert_eq!(reveal_duration(14), Duration::from_millis(1600));
    }

    #[test]
    fn test_start_round_uses_params() {
        let mut rng = StdRng::seed_from_u64(11);
        let setup = start_round(4, &mut rng);
        assert_eq!(setup.round.number, 4);
        assert_eq!(setup.round.grid, Grid::square(6));
        assert_eq!(setup.round.path.get(0), Some(0));
        assert!(setup.round.path.len() <= 10);
        assert_eq!(setup.reveal, Duration::from_millis(2600));
    }
}
