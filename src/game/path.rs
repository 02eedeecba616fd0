//! Path generation.
//!
//! A path is a random walk from the top-left block. It mostly heads right and down;
//! left and up moves are offered only some of the time so the walk backtracks now and then.
//! No block is ever visited twice.

use log::debug;
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Serialize, Deserialize};

use crate::config::difficulty::{LEFT_BACKTRACK_PROBABILITY, UP_BACKTRACK_PROBABILITY};
use crate::game::grid::Grid;
use crate::game::types::Direction;

/// Cell every path starts from.
pub const START_CELL: usize = 0;

/// Ordered, duplicate-free cell indices the player has to walk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Path(Vec<usize>);

impl Path {
    /// Wrap an explicit cell sequence. Used for scripted rounds.
    #[cfg(test)]
    pub fn from_cells(cells: Vec<usize>) -> Self {
        Self(cells)
    }

    pub fn cells(&self) -> &[usize] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, index: usize) -> Option<usize> {
        self.0.get(index).copied()
    }

    /// Position of `cell` along the path.
    pub fn index_of(&self, cell: usize) -> Option<usize> {
        self.0.iter().position(|&c| c == cell)
    }

    /// True once `position` points at the last block.
    pub fn is_complete_at(&self, position: usize) -> bool {
        position + 1 == self.0.len()
    }
}

#[derive(Debug, Clone, Copy)]
struct Move {
    cell: usize,
    direction: Direction,
}

/// Collect the moves offered from `cell`. Backtracking moves each cost one draw from `rng`,
/// and only when they would stay on the board.
fn candidate_moves<R: Rng + ?Sized>(grid: &Grid, cell: usize, rng: &mut R) -> Vec<Move> {
    let mut moves: Vec<Move> = Direction::FORWARD
        .into_iter()
        .filter_map(|direction| grid.step(cell, direction).map(|cell| Move { cell, direction }))
        .collect();

    for (direction, probability) in [
        (Direction::Left, LEFT_BACKTRACK_PROBABILITY),
        (Direction::Up, UP_BACKTRACK_PROBABILITY),
    ] {
        if let Some(target) = grid.step(cell, direction) {
            if rng.random_bool(probability) {
                moves.push(Move { cell: target, direction });
            }
        }
    }

    moves
}

/// Generate a path of at most `target_length` blocks on `grid`, starting at [`START_CELL`].
///
/// The walk stops early when every neighbour is already on the path, so the result can be
/// shorter than asked for. It always holds at least the start cell.
pub fn generate_path<R: Rng + ?Sized>(grid: Grid, target_length: usize, rng: &mut R) -> Path {
    let mut cells = vec![START_CELL];
    let mut current = START_CELL;
    let mut last_direction: Option<Direction> = None;

    for _ in 1..target_length {
        let moves = candidate_moves(&grid, current, rng);

        let preferred: Vec<Move> = moves
            .iter()
            .copied()
            .filter(|m| !last_direction.is_some_and(|last| m.direction.reverses(last)))
            .filter(|m| !cells.contains(&m.cell))
            .collect();

        let available = if preferred.is_empty() {
            moves.into_iter().filter(|m| !cells.contains(&m.cell)).collect()
        } else {
            preferred
        };

        let Some(next) = available.choose(rng).copied() else {
            debug!(
                "[Path] Walk boxed in at cell {} after {} of {} blocks",
                current,
                cells.len(),
                target_length
            );
            break;
        };

        cells.push(next.cell);
        current = next.cell;
        last_direction = Some(next.direction);
    }

    Path(cells)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn assert_valid_path(grid: &Grid, path: &Path, target_length: usize) {
        let cells = path.cells();
        assert_eq!(cells[0], START_CELL);
        assert!(cells.len() <= target_length.max(1));
        for (i, cell) in cells.iter().enumerate() {
            assert!(grid.contains(*cell), "cell {} off the board", cell);
            assert!(!cells[..i].contains(cell), "cell {} visited twice in {:?}", cell, cells);
        }
        for pair in cells.windows(2) {
            assert!(
                grid.direction_between(pair[0], pair[1]).is_some(),
                "{} -> {} is not a legal move in {:?}",
                pair[0],
                pair[1],
                cells
            );
        }
    }

    #[test]
    fn test_generated_paths_hold_invariants() {
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            for size in 5..=8 {
                let grid = Grid::square(size);
                let target = grid.cell_count() - 2;
                let path = generate_path(grid, target, &mut rng);
                assert_valid_path(&grid, &path, target);
            }
        }
    }

    #[test]
    fn test_same_seed_same_path() {
        let grid = Grid::square(6);
        let a = generate_path(grid, 15, &mut StdRng::seed_from_u64(42));
        let b = generate_path(grid, 15, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_short_targets() {
        let mut rng = StdRng::seed_from_u64(7);
        let grid = Grid::square(5);
        assert_eq!(generate_path(grid, 0, &mut rng).cells(), &[0]);
        assert_eq!(generate_path(grid, 1, &mut rng).cells(), &[0]);
        assert_eq!(generate_path(grid, 2, &mut rng).len(), 2);
    }

    #[test]
    fn test_walk_stops_when_boxed_in() {
        // A single row can only be walked to the right; the walk ends at the far edge.
        let mut rng = StdRng::seed_from_u64(3);
        let grid = Grid::new(1, 4);
        let path = generate_path(grid, 10, &mut rng);
        assert_eq!(path.cells(), &[0, 1, 2, 3]);
    }

    #[test]
    fn test_single_cell_grid() {
        let mut rng = StdRng::seed_from_u64(0);
        let path = generate_path(Grid::square(1), 5, &mut rng);
        assert_eq!(path.cells(), &[0]);
    }

    #[test]
    fn test_two_by_two_never_exceeds_board() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let grid = Grid::square(2);
            let path = generate_path(grid, 10, &mut rng);
            assert!(path.len() >= 2);
            assert_valid_path(&grid, &path, 10);
        }
    }

    #[test]
    fn test_path_lookup_helpers() {
        let path = Path::from_cells(vec![0, 1, 2, 7]);
        assert_eq!(path.index_of(7), Some(3));
        assert_eq!(path.index_of(6), None);
        assert!(path.is_complete_at(3));
        assert!(!path.is_complete_at(2));
        assert_eq!(path.get(4), None);
    }
}
