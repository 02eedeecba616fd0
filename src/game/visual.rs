//! What the view needs to know, derived from the session.
//!
//! Everything here is a pure function of [`Session`], so rendering can be tested without
//! a terminal.

use serde::Serialize;

use crate::game::grid::Grid;
use crate::game::path::Path;
use crate::game::state::{GameState, Session};
use crate::game::types::{CellVisual, GameMode};

/// Visual category of `cell` in `state`. Without a board every cell is `Default`.
pub fn cell_visual(state: &GameState, cell: usize) -> CellVisual {
    let Some(path) = state.path() else {
        return CellVisual::Default;
    };
    let position = state.player_position();
    let path_index = path.index_of(cell);

    if state.exploded_cell() == Some(cell) {
        CellVisual::Exploded
    } else if path_index == Some(position) {
        CellVisual::Current
    } else if path_index.is_some_and(|i| i < position) {
        CellVisual::Completed
    } else if state.revealing() && path_index.is_some() {
        CellVisual::Revealed
    } else {
        CellVisual::Default
    }
}

/// Render state handed to the view after every transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub mode: GameMode,
    pub round: u32,
    pub score: u32,
    pub high_score: u32,
    pub grid: Option<Grid>,
    pub path: Path,
    pub player_position: usize,
    pub revealing: bool,
    pub exploded_cell: Option<usize>,
    pub shaking: bool,
    pub new_high_score: bool,
    /// [`cell_visual`] of every block on the board, row-major. Empty without a board.
    pub cells: Vec<CellVisual>,
}

impl Snapshot {
    pub fn of(session: &Session) -> Self {
        let state = &session.state;
        let grid = state.grid();
        Self {
            mode: state.mode(),
            round: state.round_number(),
            score: state.score(),
            high_score: session.high_score,
            grid,
            path: state.path().cloned().unwrap_or_default(),
            player_position: state.player_position(),
            revealing: state.revealing(),
            exploded_cell: state.exploded_cell(),
            shaking: state.shaking(),
            new_high_score: matches!(state, GameState::GameOver { new_high_score: true, .. }),
            cells: grid
                .map(|grid| (0..grid.cell_count()).map(|cell| cell_visual(state, cell)).collect())
                .unwrap_or_default(),
        }
    }

    pub fn cell_visual(&self, cell: usize) -> CellVisual {
        self.cells.get(cell).copied().unwrap_or(CellVisual::Default)
    }
}
