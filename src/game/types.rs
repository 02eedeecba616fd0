use serde::{Serialize, Deserialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

/// The six moves a path can make from one block to the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Right,
    Down,
    DiagonalRight,
    DiagonalLeft,
    Left,
    Up,
}

impl Direction {
    /// Moves considered on every step when they stay inside the grid.
    pub const FORWARD: [Direction; 4] = [
        Direction::Right,
        Direction::Down,
        Direction::DiagonalRight,
        Direction::DiagonalLeft,
    ];

    #[cfg(test)]
    pub const ALL: [Direction; 6] = [
        Direction::Right,
        Direction::Down,
        Direction::DiagonalRight,
        Direction::DiagonalLeft,
        Direction::Left,
        Direction::Up,
    ];

    /// Row and column offset of the move.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::DiagonalRight => (1, 1),
            Direction::DiagonalLeft => (1, -1),
            Direction::Left => (0, -1),
            Direction::Up => (-1, 0),
        }
    }

    /// True when `self` undoes `previous` exactly. Diagonals never count as a reversal.
    pub fn reverses(self, previous: Direction) -> bool {
        matches!(
            (previous, self),
            (Direction::Right, Direction::Left)
                | (Direction::Left, Direction::Right)
                | (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GameMode {
    Menu,
    Memorize,
    Play,
    GameOver,
}

/// How a single block is drawn, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CellVisual {
    Exploded,
    Current,
    Completed,
    Revealed,
    Default,
}
