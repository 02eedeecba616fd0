use serde::{Serialize, Deserialize};

use crate::game::types::{Direction, Position};

/// A `rows x cols` board of blocks. Cell `i` sits at row `i / cols`, column `i % cols`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grid {
    pub rows: usize,
    pub cols: usize,
}

impl Grid {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    pub fn square(size: usize) -> Self {
        Self::new(size, size)
    }

    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    pub fn contains(&self, cell: usize) -> bool {
        cell < self.cell_count()
    }

    pub fn position(&self, cell: usize) -> Position {
        Position {
            row: cell.checked_div(self.cols).unwrap_or(0),
            col: cell.checked_rem(self.cols).unwrap_or(0),
        }
    }

    /// Cell index at `pos`, or `None` if `pos` is off the board.
    pub fn cell_at(&self, pos: Position) -> Option<usize> {
        if pos.row < self.rows && pos.col < self.cols {
            Some(pos.row * self.cols + pos.col)
        } else {
            None
        }
    }

    /// Neighbour of `cell` one move away in `direction`, if it stays on the board.
    pub fn step(&self, cell: usize, direction: Direction) -> Option<usize> {
        let pos = self.position(cell);
        let (d_row, d_col) = direction.delta();
        let row = pos.row.checked_add_signed(d_row)?;
        let col = pos.col.checked_add_signed(d_col)?;
        self.cell_at(Position { row, col })
    }

    /// The move that leads from `from` to `to`, if they are one move apart.
    #[cfg(test)]
    pub fn direction_between(&self, from: usize, to: usize) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|&direction| self.step(from, direction) == Some(to))
    }
}
